//! The curve-function trait implemented by every plugin.

use crate::arity::{ArgumentKind, Arity};
use crate::error::{FunctionError, NameError};
use crate::name::FunctionName;

/// A pure mapping from `(x, a)` to a scalar.
///
/// Implementors are zero-sized types; the trait has no receiver because a
/// curve function carries no state. The arity is derived from the lengths of
/// [`VARIABLES`](Self::VARIABLES) and [`PARAMETERS`](Self::PARAMETERS).
pub trait CurveFunction {
    /// Identity string, `f<N>: <description>`.
    const NAME: &'static str;

    /// Independent variable names in `x` order.
    const VARIABLES: &'static [&'static str];

    /// Parameter names in `a` order.
    const PARAMETERS: &'static [&'static str];

    /// Closed-form value.
    ///
    /// Returns `None` only when `x` or `a` does not have the declared length.
    /// Degenerate numeric inputs produce IEEE-754 results, never `None`.
    fn value(x: &[f64], a: &[f64]) -> Option<f64>;

    /// Declared arity.
    #[must_use]
    fn arity() -> Arity {
        Arity::new(Self::VARIABLES.len(), Self::PARAMETERS.len())
    }

    /// Parsed identity.
    ///
    /// # Errors
    ///
    /// Returns a [`NameError`] if [`NAME`](Self::NAME) breaks the grammar.
    fn name() -> Result<FunctionName, NameError> {
        FunctionName::parse(Self::NAME)
    }

    /// Arity-checked evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::ArityMismatch`] when the slices do not match
    /// [`arity`](Self::arity).
    fn evaluate(x: &[f64], a: &[f64]) -> Result<f64, FunctionError> {
        let arity = Self::arity();
        arity.check(x.len(), a.len())?;
        Self::value(x, a).ok_or(FunctionError::ArityMismatch {
            kind: ArgumentKind::Parameters,
            expected: arity.parameters,
            actual: a.len(),
        })
    }

    /// Evaluate a single-variable function at every point of `xs`.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::ArityMismatch`] when the function does not take
    /// exactly one variable or `a` has the wrong length.
    fn evaluate_grid(xs: &[f64], a: &[f64]) -> Result<Vec<f64>, FunctionError> {
        Self::arity().check(1, a.len())?;
        xs.iter()
            .map(|x| Self::evaluate(core::slice::from_ref(x), a))
            .collect()
    }
}
