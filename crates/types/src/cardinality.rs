//! # Cardinality - Counting a Type's Values
//!
//! The cardinality of a type is the number of distinct values it can
//! hold. The algebra is the point:
//!
//! - Sum types (enums, `Result`) **add** the counts of their variants
//! - Product types (structs, tuples) **multiply** the counts of their fields
//! - `Option<T>` is `1 + |T|` — one extra value for `None`
//! - The function space `A -> B` has `|B|^|A|` values
//!
//! Counts are `u128`-valued and saturate to [`Count::Infinite`] on
//! overflow, so the arithmetic is total.

use std::fmt;

/// The number of distinct values of a type: a finite count or infinite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    /// Exactly this many distinct values.
    Finite(u128),
    /// More values than we care to count (or than `u128` can hold).
    Infinite,
}

impl Count {
    /// Sum-type arithmetic: `|A| + |B|` variants side by side.
    pub const fn plus(self, other: Count) -> Count {
        match (self, other) {
            (Count::Finite(a), Count::Finite(b)) => match a.checked_add(b) {
                Some(n) => Count::Finite(n),
                None => Count::Infinite,
            },
            _ => Count::Infinite,
        }
    }

    /// Product-type arithmetic: `|A| * |B|` field combinations.
    pub const fn times(self, other: Count) -> Count {
        match (self, other) {
            // An empty factor collapses the whole product
            (Count::Finite(0), _) | (_, Count::Finite(0)) => Count::Finite(0),
            (Count::Finite(a), Count::Finite(b)) => match a.checked_mul(b) {
                Some(n) => Count::Finite(n),
                None => Count::Infinite,
            },
            _ => Count::Infinite,
        }
    }

    /// Exponentiation: `self` raised to `exponent`.
    ///
    /// This is the function-space count read as `|B|.pow(|A|)`: one
    /// choice of output per possible input.
    pub const fn pow(self, exponent: Count) -> Count {
        match (self, exponent) {
            // Empty domain: exactly one function, the vacuous one
            (_, Count::Finite(0)) => Count::Finite(1),
            // One-value base: only the constant function, however big the domain
            (Count::Finite(1), _) => Count::Finite(1),
            // Empty base with a nonempty domain: no functions at all
            (Count::Finite(0), _) => Count::Finite(0),
            (Count::Finite(b), Count::Finite(a)) => {
                if a > u32::MAX as u128 {
                    Count::Infinite
                } else {
                    match b.checked_pow(a as u32) {
                        Some(n) => Count::Finite(n),
                        None => Count::Infinite,
                    }
                }
            }
            _ => Count::Infinite,
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Finite(n) => write!(f, "{}", n),
            Count::Infinite => write!(f, "∞"),
        }
    }
}

/// Cardinality of the function space `A -> B`: `|B|^|A|`.
pub const fn function_space(domain: Count, codomain: Count) -> Count {
    codomain.pow(domain)
}

/// A type with a known number of distinct values.
///
/// # Example
///
/// ```
/// use fnshapes_types::{Cardinality, Count};
///
/// // A struct multiplies its fields: 2 * 256
/// assert_eq!(<(bool, u8)>::COUNT, Count::Finite(512));
///
/// // Option adds one value for None
/// assert_eq!(Option::<bool>::COUNT, Count::Finite(3));
/// ```
pub trait Cardinality {
    /// The number of distinct values of this type.
    const COUNT: Count;
}

/// The empty type: an enum with no variants and therefore no values.
#[derive(Debug, Clone, Copy)]
pub enum Never {}

impl Cardinality for Never {
    const COUNT: Count = Count::Finite(0);
}

impl Cardinality for () {
    const COUNT: Count = Count::Finite(1);
}

impl Cardinality for bool {
    const COUNT: Count = Count::Finite(2);
}

impl Cardinality for u8 {
    const COUNT: Count = Count::Finite(256);
}

impl Cardinality for u16 {
    const COUNT: Count = Count::Finite(65_536);
}

impl Cardinality for u64 {
    const COUNT: Count = Count::Finite(1 << 64);
}

impl<T: Cardinality> Cardinality for Option<T> {
    // None is the "+ 1"
    const COUNT: Count = Count::Finite(1).plus(T::COUNT);
}

impl<T: Cardinality, E: Cardinality> Cardinality for Result<T, E> {
    const COUNT: Count = T::COUNT.plus(E::COUNT);
}

impl<A: Cardinality, B: Cardinality> Cardinality for (A, B) {
    const COUNT: Count = A::COUNT.times(B::COUNT);
}

impl<A: Cardinality, B: Cardinality, C: Cardinality> Cardinality for (A, B, C) {
    const COUNT: Count = A::COUNT.times(B::COUNT).times(C::COUNT);
}

// ============================================================================
// Demonstration Types
// ============================================================================

/// Example: a four-variant enum, cardinality 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Cardinality for Suit {
    const COUNT: Count = Count::Finite(4);
}

/// Example: a two-field struct, cardinality `2 * 256`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag {
    pub set: bool,
    pub level: u8,
}

impl Cardinality for Flag {
    const COUNT: Count = bool::COUNT.times(u8::COUNT);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_base_counts() {
        assert_eq!(Never::COUNT, Count::Finite(0));
        assert_eq!(<()>::COUNT, Count::Finite(1));
        assert_eq!(bool::COUNT, Count::Finite(2));
        assert_eq!(u8::COUNT, Count::Finite(256));
    }

    #[test]
    fn test_option_adds_one() {
        assert_eq!(Option::<Never>::COUNT, Count::Finite(1));
        assert_eq!(Option::<bool>::COUNT, Count::Finite(3));
        assert_eq!(Option::<Option<bool>>::COUNT, Count::Finite(4));
    }

    #[test]
    fn test_result_adds_variants() {
        assert_eq!(Result::<bool, u8>::COUNT, Count::Finite(258));
        assert_eq!(Result::<Never, bool>::COUNT, Count::Finite(2));
    }

    #[test]
    fn test_tuples_multiply() {
        assert_eq!(<(bool, bool)>::COUNT, Count::Finite(4));
        assert_eq!(<(bool, u8)>::COUNT, Count::Finite(512));
        assert_eq!(<(bool, bool, bool)>::COUNT, Count::Finite(8));
        assert_eq!(<(Never, u8)>::COUNT, Count::Finite(0));
    }

    #[test]
    fn test_demonstration_types() {
        assert_eq!(Suit::COUNT, Count::Finite(4));
        assert_eq!(Flag::COUNT, Count::Finite(512));
        // A pair of demonstration types still multiplies
        assert_eq!(<(Suit, Flag)>::COUNT, Count::Finite(2048));
    }

    #[test]
    fn test_function_space_counts() {
        // bool -> bool: four functions (id, not, const true, const false)
        assert_eq!(function_space(bool::COUNT, bool::COUNT), Count::Finite(4));
        // Never -> u8: exactly the vacuous function
        assert_eq!(function_space(Never::COUNT, u8::COUNT), Count::Finite(1));
        // bool -> Never: no functions
        assert_eq!(function_space(bool::COUNT, Never::COUNT), Count::Finite(0));
        // () -> u8: one function per output value
        assert_eq!(function_space(<()>::COUNT, u8::COUNT), Count::Finite(256));
    }

    #[test]
    fn test_overflow_saturates_to_infinite() {
        let max = Count::Finite(u128::MAX);
        assert_eq!(max.plus(Count::Finite(1)), Count::Infinite);
        assert_eq!(max.times(Count::Finite(2)), Count::Infinite);
        assert_eq!(Count::Finite(2).pow(Count::Finite(200)), Count::Infinite);
    }

    #[test]
    fn test_infinite_absorbs() {
        assert_eq!(Count::Infinite.plus(Count::Finite(1)), Count::Infinite);
        assert_eq!(Count::Infinite.times(Count::Finite(2)), Count::Infinite);
        // Except where the algebra says otherwise
        assert_eq!(Count::Infinite.times(Count::Finite(0)), Count::Finite(0));
        assert_eq!(Count::Infinite.pow(Count::Finite(0)), Count::Finite(1));
        assert_eq!(Count::Finite(1).pow(Count::Infinite), Count::Finite(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Count::Finite(42).to_string(), "42");
        assert_eq!(Count::Infinite.to_string(), "∞");
    }
}
