//! # Existential Erasure (Session 5)
//!
//! An existential type hides a concrete type behind a capability set:
//! "some type, all we know is what it can do". [`Showable`] is the
//! smallest useful case — the only exposed capability is rendering to
//! text — which is exactly what a heterogeneous collection needs.

use std::fmt;

/// A type-erased wrapper around any value that can render itself.
///
/// The concrete type is forgotten at construction; all that remains is
/// the `Display` capability. There is deliberately no way back out.
///
/// # Example
///
/// ```
/// use fnshapes_types::Showable;
///
/// let mixed: Vec<Showable> = vec![
///     Showable::new(42),
///     Showable::new("text"),
///     Showable::new(2.5),
/// ];
///
/// let rendered: Vec<String> = mixed.iter().map(Showable::show).collect();
/// assert_eq!(rendered, ["42", "text", "2.5"]);
/// ```
pub struct Showable {
    value: Box<dyn fmt::Display>,
}

impl Showable {
    /// Erase a value down to its display capability.
    pub fn new(value: impl fmt::Display + 'static) -> Self {
        Self {
            value: Box::new(value),
        }
    }

    /// Render the wrapped value.
    pub fn show(&self) -> String {
        self.value.to_string()
    }
}

impl fmt::Display for Showable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl fmt::Debug for Showable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Showable")
            .field("value", &self.show())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erases_mixed_types() {
        let mixed = vec![
            Showable::new(1u8),
            Showable::new(true),
            Showable::new("word"),
        ];

        let rendered: Vec<String> = mixed.iter().map(Showable::show).collect();
        assert_eq!(rendered, ["1", "true", "word"]);
    }

    #[test]
    fn test_display_delegates() {
        let s = Showable::new(3.25f64);
        assert_eq!(format!("{}", s), "3.25");
    }

    #[test]
    fn test_wraps_user_types() {
        struct Version(u8, u8);

        impl fmt::Display for Version {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "v{}.{}", self.0, self.1)
            }
        }

        let erased = Showable::new(Version(1, 4));
        assert_eq!(erased.show(), "v1.4");
    }
}
