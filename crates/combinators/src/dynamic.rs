//! # Runtime-Typed Composition (Session 3)
//!
//! The statically-typed combinators reject a shape mismatch at compile
//! time. This module is the dynamically-typed rendition: function stages
//! are type-erased behind `Box<dyn Any>`, each stage remembers the
//! `TypeId` of its input and output, and composing two stages checks
//! `output(f) == input(g)` eagerly — a mismatch is an explicit
//! [`CombinatorError`], never a silent wrong answer.
//!
//! The erasure machinery mirrors a capability registry: values travel as
//! `Box<dyn Any>` and are downcast back at the typed boundary.

use std::any::{type_name, Any, TypeId};
use std::fmt;

use crate::error::CombinatorError;

type ErasedRun = Box<dyn Fn(Box<dyn Any>) -> Result<Box<dyn Any>, CombinatorError>>;

/// A named, type-erased unary function stage.
///
/// A `DynFn` remembers the type of its input and output even though the
/// values it passes around are erased. Composition via [`DynFn::then`]
/// checks the shapes line up; invocation via [`DynFn::call`] checks both
/// ends of the call boundary.
///
/// # Example
///
/// ```
/// use fnshapes_combinators::DynFn;
///
/// let double = DynFn::new("double", |a: i32| (2 * a) as f64);
/// let render = DynFn::new("render", |b: f64| format!("{:?}", b));
///
/// let pipeline = double.then(render).unwrap();
/// let out: String = pipeline.call(4).unwrap();
/// assert_eq!(out, "8.0");
/// ```
pub struct DynFn {
    name: String,
    input: TypeId,
    input_name: &'static str,
    output: TypeId,
    output_name: &'static str,
    run: ErasedRun,
}

impl DynFn {
    /// Wrap a typed function as an erased stage.
    pub fn new<A, B, F>(name: impl Into<String>, f: F) -> Self
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Self {
            name: name.into(),
            input: TypeId::of::<A>(),
            input_name: type_name::<A>(),
            output: TypeId::of::<B>(),
            output_name: type_name::<B>(),
            run: Box::new(move |erased| {
                let a = erased
                    .downcast::<A>()
                    .map_err(|_| CombinatorError::TypeMismatch {
                        expected: type_name::<A>(),
                        got: "erased value",
                    })?;
                Ok(Box::new(f(*a)))
            }),
        }
    }

    /// The stage's name (composed stages join names with `>>>`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable input type name.
    pub fn input_name(&self) -> &'static str {
        self.input_name
    }

    /// Human-readable output type name.
    pub fn output_name(&self) -> &'static str {
        self.output_name
    }

    /// Forward composition: `f.then(g)` is "f then g".
    ///
    /// Only defined when the output type of `self` equals the input type
    /// of `g`; the check happens here, at composition time, so a
    /// mis-shaped pipeline is rejected before it ever runs.
    pub fn then(self, g: DynFn) -> Result<DynFn, CombinatorError> {
        if self.output != g.input {
            return Err(CombinatorError::CompositionUndefined {
                f: self.name,
                g: g.name,
                output: self.output_name,
                input: g.input_name,
            });
        }

        let DynFn {
            name: f_name,
            input,
            input_name,
            run: f_run,
            ..
        } = self;
        let DynFn {
            name: g_name,
            output,
            output_name,
            run: g_run,
            ..
        } = g;

        Ok(DynFn {
            name: format!("{} >>> {}", f_name, g_name),
            input,
            input_name,
            output,
            output_name,
            run: Box::new(move |erased| g_run(f_run(erased)?)),
        })
    }

    /// Invoke the stage with a typed argument, expecting a typed result.
    ///
    /// Both ends of the boundary are checked: a wrong argument type or a
    /// wrong expected result type yields `TypeMismatch`.
    pub fn call<A, B>(&self, a: A) -> Result<B, CombinatorError>
    where
        A: 'static,
        B: 'static,
    {
        if TypeId::of::<A>() != self.input {
            return Err(CombinatorError::TypeMismatch {
                expected: self.input_name,
                got: type_name::<A>(),
            });
        }

        let out = (self.run)(Box::new(a))?;
        out.downcast::<B>()
            .map(|b| *b)
            .map_err(|_| CombinatorError::TypeMismatch {
                expected: type_name::<B>(),
                got: self.output_name,
            })
    }
}

impl fmt::Display for DynFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} → {}", self.name, self.input_name, self.output_name)
    }
}

impl fmt::Debug for DynFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynFn")
            .field("name", &self.name)
            .field("input", &self.input_name)
            .field("output", &self.output_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_stage_call() {
        let double = DynFn::new("double", |a: i32| (2 * a) as f64);

        let out: f64 = double.call(21).unwrap();
        assert_eq!(out, 42.0);
    }

    #[test]
    fn test_then_chains_matching_stages() {
        let double = DynFn::new("double", |a: i32| (2 * a) as f64);
        let render = DynFn::new("render", |b: f64| format!("{:?}", b));

        let pipeline = double.then(render).unwrap();
        assert_eq!(pipeline.name(), "double >>> render");

        let out: String = pipeline.call(5).unwrap();
        assert_eq!(out, "10.0");
    }

    #[test]
    fn test_then_rejects_shape_mismatch() {
        let double = DynFn::new("double", |a: i32| (2 * a) as f64);
        let shout = DynFn::new("shout", |s: String| s.to_uppercase());

        let result = double.then(shout);
        assert!(matches!(
            result,
            Err(CombinatorError::CompositionUndefined { .. })
        ));
    }

    #[test]
    fn test_mismatch_error_names_both_types() {
        let double = DynFn::new("double", |a: i32| (2 * a) as f64);
        let shout = DynFn::new("shout", |s: String| s.to_uppercase());

        let err = double.then(shout).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("double"));
        assert!(message.contains("shout"));
        assert!(message.contains("f64"));
        assert!(message.contains("String"));
    }

    #[test]
    fn test_call_rejects_wrong_argument_type() {
        let double = DynFn::new("double", |a: i32| (2 * a) as f64);

        let result: Result<f64, _> = double.call("not a number".to_string());
        assert!(matches!(result, Err(CombinatorError::TypeMismatch { .. })));
    }

    #[test]
    fn test_call_rejects_wrong_result_type() {
        let double = DynFn::new("double", |a: i32| (2 * a) as f64);

        let result: Result<String, _> = double.call(21);
        assert!(matches!(result, Err(CombinatorError::TypeMismatch { .. })));
    }

    #[test]
    fn test_display_shows_shape() {
        let double = DynFn::new("double", |a: i32| (2 * a) as f64);
        let display = format!("{}", double);
        assert!(display.contains("double"));
        assert!(display.contains("i32"));
        assert!(display.contains("f64"));
    }
}
