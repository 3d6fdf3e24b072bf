//! # Forward Composition (Session 1)
//!
//! Composition in diagram order: `compose(f, g)` means "f then g", so
//! `compose(f, g)(a) == g(f(a))`. This is the `>>>` of functional
//! languages, written here as a free function plus the [`Composable`]
//! extension trait for method syntax.
//!
//! ## Laziness
//!
//! `compose` never invokes `f` or `g`. It builds a closure; both inputs
//! run only when the composed function is applied to a concrete argument.

/// The identity function: the unit of composition.
///
/// `compose(identity, f)` and `compose(f, identity)` both behave like `f`.
pub fn identity<A>(a: A) -> A {
    a
}

/// Forward composition: `compose(f, g)(a) == g(f(a))`.
///
/// Composition is only well-formed when the output type of `f` matches
/// the input type of `g`; a mismatch is rejected at compile time.
///
/// # Example
///
/// ```
/// use fnshapes_combinators::compose;
///
/// let double = |a: i32| (2 * a) as f64;
/// let render = |b: f64| format!("{:?}", b);
///
/// let pipeline = compose(double, render);
/// assert_eq!(pipeline(4), "8.0");
/// ```
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |a| g(f(a))
}

/// Method syntax for forward composition: `f.then(g)` is "f then g".
///
/// Blanket-implemented for every `Fn(A) -> B`, so closures, function
/// pointers, and bound-method closures all compose the same way.
///
/// # Example
///
/// ```
/// use fnshapes_combinators::Composable;
///
/// let trim = |s: String| s.trim().to_string();
/// let len = |s: String| s.len();
///
/// assert_eq!(trim.then(len)("  four  ".to_string()), 4);
/// ```
pub trait Composable<A, B>: Fn(A) -> B + Sized {
    /// Forward composition as a method: `f.then(g)(a) == g(f(a))`.
    fn then<C, G>(self, g: G) -> impl Fn(A) -> C
    where
        G: Fn(B) -> C,
    {
        move |a| g(self(a))
    }
}

impl<A, B, F: Fn(A) -> B> Composable<A, B> for F {}
