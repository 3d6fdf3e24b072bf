//! # Types - Counting and Erasing
//!
//! This crate covers the type-level half of the material:
//!
//! - **Cardinality**: how many distinct values a type has, and how sums,
//!   products, and function spaces combine those counts (Session 4)
//! - **Erasure**: existential wrappers that hide a concrete type behind
//!   a capability set (Session 5)
//!
//! ## Design Philosophy
//!
//! Cardinality is a compile-time fact, so it lives in an associated
//! `const` rather than a method: `<(bool, u8)>::COUNT` is arithmetic the
//! compiler does, not work the program does.

pub mod cardinality;
pub mod erased;

// Re-export key types at crate root for convenience
pub use cardinality::{function_space, Cardinality, Count, Never};
pub use erased::Showable;
