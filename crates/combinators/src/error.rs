//! # Error Types
//!
//! The statically-typed combinators are total: a shape mismatch is a
//! compile-time rejection and no error value ever exists. These errors
//! belong to the dynamic rendition, where composition `f >>> g` is only
//! defined when the output type of `f` equals the input type of `g`, and
//! a mismatch is a first-class value rather than a panic.

use thiserror::Error;

/// Errors for runtime-typed function composition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CombinatorError {
    /// The stages don't chain: output type of the first ≠ input type of
    /// the second. Raised at composition time, before anything runs.
    #[error("Cannot compose {f} with {g}: output {output} ≠ input {input}")]
    CompositionUndefined {
        f: String,
        g: String,
        output: &'static str,
        input: &'static str,
    },

    /// A value crossed a call boundary with the wrong type.
    #[error("Type mismatch at call boundary: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
}
