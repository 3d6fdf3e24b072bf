//! # Curry, Uncurry, Flip (Session 2)
//!
//! Shape transforms between the pair-taking form `Fn(A, B) -> C` and the
//! chain-of-one-argument form `Fn(A) -> Fn(B) -> C`, plus `flip`, which
//! swaps the argument order of an already-curried function.
//!
//! ## Boxing
//!
//! The outer shape of each combinator stays generic (`impl Fn`), but the
//! inner closure of `curry` and `flip` is type-erased behind [`BoxFn`]:
//! Rust has no nested `impl Fn` return position, so the "function that
//! returns a function" half of the shape lives behind a box. Captured
//! arguments are cloned per call, so the produced functions stay `Fn`
//! rather than degrading to `FnOnce`. Each produced function is also
//! `Clone`, which is what lets the transforms nest (`curry(uncurry(g))`).

/// A boxed unary function, the erased inner half of a curried shape.
pub type BoxFn<A, B> = Box<dyn Fn(A) -> B>;

/// Transform a pair-taking function into a chain of one-argument functions.
///
/// Contract: `curry(f)(a)(b) == f(a, b)`.
///
/// # Example
///
/// ```
/// use fnshapes_combinators::curry;
///
/// let append = |a: String, b: String| format!("{}{}", a, b);
/// let curried = curry(append);
///
/// assert_eq!(curried("x".to_string())("y".to_string()), "xy");
/// ```
pub fn curry<A, B, C, F>(f: F) -> impl Clone + Fn(A) -> BoxFn<B, C>
where
    F: Fn(A, B) -> C + Clone + 'static,
    A: Clone + 'static,
    B: 'static,
    C: 'static,
{
    move |a: A| {
        let f = f.clone();
        Box::new(move |b: B| f(a.clone(), b)) as BoxFn<B, C>
    }
}

/// The inverse of [`curry`]: collapse a chain of one-argument functions
/// into a single pair-taking function.
///
/// Contract: `uncurry(g)(a, b) == g(a)(b)`, and the two transforms
/// round-trip up to extensional equality.
///
/// # Example
///
/// ```
/// use fnshapes_combinators::{curry, uncurry};
///
/// let append = |a: String, b: String| format!("{}{}", a, b);
/// let roundtrip = uncurry(curry(append));
///
/// assert_eq!(roundtrip("x".to_string(), "y".to_string()), "xy");
/// ```
pub fn uncurry<A, B, C, F, G>(f: F) -> impl Clone + Fn(A, B) -> C
where
    F: Fn(A) -> G + Clone,
    G: Fn(B) -> C,
{
    move |a, b| f(a)(b)
}

/// Swap the argument order of a curried two-argument function.
///
/// Contract: `flip(f)(c)(a) == f(a)(c)`.
///
/// # Example
///
/// ```
/// use fnshapes_combinators::flip;
///
/// let describe = |name: String| move |count: i64| format!("{} x{}", name, count);
/// let by_count = flip(describe);
///
/// assert_eq!(by_count(3)("bolt".to_string()), "bolt x3");
/// ```
pub fn flip<A, B, C, F, G>(f: F) -> impl Clone + Fn(C) -> BoxFn<A, B>
where
    F: Fn(A) -> G + Clone + 'static,
    G: Fn(C) -> B,
    A: 'static,
    B: 'static,
    C: Clone + 'static,
{
    move |c: C| {
        let f = f.clone();
        Box::new(move |a: A| f(a)(c.clone())) as BoxFn<A, B>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn append(a: String, b: String) -> String {
        format!("{}{}", a, b)
    }

    #[test]
    fn test_curry_applies_like_the_pair_form() {
        let curried = curry(append);
        assert_eq!(
            curried("x".to_string())("y".to_string()),
            append("x".to_string(), "y".to_string())
        );
    }

    #[test]
    fn test_curried_prefix_is_reusable() {
        let curried = curry(append);
        let with_prefix = curried("pre-".to_string());

        // One partial application, many saturations
        assert_eq!(with_prefix("a".to_string()), "pre-a");
        assert_eq!(with_prefix("b".to_string()), "pre-b");
    }

    #[test]
    fn test_uncurry_applies_like_the_chain_form() {
        let chain = |a: i64| move |b: i64| a * 100 + b;
        let paired = uncurry(chain);

        assert_eq!(paired(3, 7), chain(3)(7));
        assert_eq!(paired(3, 7), 307);
    }

    #[test]
    fn test_roundtrip_uncurry_curry() {
        let roundtrip = uncurry(curry(append));
        assert_eq!(roundtrip("x".to_string(), "y".to_string()), "xy");
    }

    #[test]
    fn test_flip_swaps_argument_order() {
        let f = |a: i64| move |c: i64| a * 10 - c;
        let flipped = flip(f);

        assert_eq!(flipped(2)(5), f(5)(2));
        assert_eq!(flipped(2)(5), 48);
    }

    #[test]
    fn test_flip_with_strings() {
        let join = |a: String| move |c: String| format!("{}-{}", a, c);
        let flipped = flip(join);

        assert_eq!(flipped("right".to_string())("left".to_string()), "left-right");
    }

    #[test]
    fn test_bound_method_feeds_combinators() {
        // A method on an owning value is just a closure capturing the
        // receiver; once bound it composes like any other function value.
        struct Greeter {
            prefix: String,
        }

        impl Greeter {
            fn append(&self, rest: String) -> String {
                format!("{}{}", self.prefix, rest)
            }
        }

        let greeter = Greeter {
            prefix: "Hello, ".to_string(),
        };
        let bound = move |rest: String| greeter.append(rest);

        use crate::compose::Composable;
        let shout = bound.then(|s: String| s.to_uppercase());
        assert_eq!(shout("world".to_string()), "HELLO, WORLD");
    }
}
