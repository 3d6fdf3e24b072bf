//! # Combinators - Function-Shape Transformers
//!
//! This crate provides a small library of generic higher-order functions
//! that turn one function shape into another:
//!
//! - **Compose**: forward composition `f >>> g` (Session 1)
//! - **Curry**: pair-taking ↔ chain-of-one-argument shapes (Session 2)
//! - **Flip**: swap the argument order of a curried function (Session 2)
//! - **Dynamic**: runtime-typed composition with first-class errors (Session 3)
//! - **Probe**: invocation counting to observe evaluation order
//!
//! ## Design Philosophy
//!
//! Every combinator is pure, total, and stateless: it builds a new function
//! value without invoking its input. Evaluation happens only when the
//! produced function is itself applied to a concrete argument. A function
//! value's identity is its shape — no combinator attaches hidden state.

pub mod compose;
pub mod curry;
pub mod dynamic;
pub mod error;
pub mod probe;

// Re-export key items at crate root for convenience
pub use compose::{compose, identity, Composable};
pub use curry::{curry, flip, uncurry, BoxFn};
pub use dynamic::DynFn;
pub use error::CombinatorError;
pub use probe::Probe;
