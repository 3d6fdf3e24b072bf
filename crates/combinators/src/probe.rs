//! # Invocation Probes
//!
//! A [`Probe`] wraps a function and counts how many times it runs.
//! The combinators promise not to invoke their inputs until the produced
//! function is applied; a probe makes that observable in tests without
//! changing the wrapped function's shape.
//!
//! Counting uses `Cell`: the library is synchronous and single-threaded,
//! so no coordination is needed.

use std::cell::Cell;

/// An invocation-counting wrapper around a function.
///
/// # Example
///
/// ```
/// use fnshapes_combinators::{compose, Probe};
///
/// let double = Probe::new("double", |x: i32| x * 2);
/// let pipeline = compose(double.as_fn(), |x: i32| x + 1);
///
/// assert_eq!(double.calls(), 0); // composing runs nothing
/// assert_eq!(pipeline(10), 21);
/// assert_eq!(double.calls(), 1);
/// ```
pub struct Probe<F> {
    name: &'static str,
    calls: Cell<usize>,
    inner: F,
}

impl<F> Probe<F> {
    /// Wrap a function with a named invocation counter.
    pub fn new(name: &'static str, inner: F) -> Self {
        Self {
            name,
            calls: Cell::new(0),
            inner,
        }
    }

    /// The probe's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// How many times the wrapped function has run.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Get a reference to the wrapped function.
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Unwrap and return the wrapped function, discarding the counter.
    pub fn into_inner(self) -> F {
        self.inner
    }

    /// Borrow the probe as a composable function.
    ///
    /// Each call through the returned closure bumps the counter before
    /// delegating to the wrapped function.
    pub fn as_fn<A, B>(&self) -> impl Fn(A) -> B + '_
    where
        F: Fn(A) -> B,
    {
        move |a| {
            self.calls.set(self.calls.get() + 1);
            (self.inner)(a)
        }
    }
}
