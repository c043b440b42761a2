//! Starting parameters handed to the fit host.
//!
//! The host takes one entry per parameter: a positional name (`a1`, `a2`,
//! ...), a start value, whether the parameter is held constant during the
//! fit, and a human label.

use crate::arity::ArgumentKind;
use crate::error::{FunctionError, GuessError};
use crate::function::CurveFunction;

/// One starting parameter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputParameter {
    /// Positional name, `a1` for the first parameter.
    pub name: String,
    /// Start value.
    pub value: f64,
    /// Held fixed during the fit.
    pub constant: bool,
    /// Human label such as `amplitude`.
    pub label: String,
}

/// Ordered starting parameters for one function.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct InputParameters {
    params: Vec<InputParameter>,
}

impl InputParameters {
    /// Pair labels with values, all free.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::ArityMismatch`] if the slices differ in length.
    pub fn from_values(labels: &[&str], values: &[f64]) -> Result<Self, FunctionError> {
        if labels.len() != values.len() {
            return Err(FunctionError::ArityMismatch {
                kind: ArgumentKind::Parameters,
                expected: labels.len(),
                actual: values.len(),
            });
        }
        let params = labels
            .iter()
            .zip(values)
            .enumerate()
            .map(|(i, (label, &value))| InputParameter {
                name: format!("a{}", i + 1),
                value,
                constant: false,
                label: (*label).to_string(),
            })
            .collect();
        Ok(Self { params })
    }

    /// Build from `(label, value)` pairs, all free.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let params = pairs
            .into_iter()
            .enumerate()
            .map(|(i, (label, value))| InputParameter {
                name: format!("a{}", i + 1),
                value,
                constant: false,
                label: label.to_string(),
            })
            .collect();
        Self { params }
    }

    /// Label values with the parameter names of `F`.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::ArityMismatch`] if `values` does not match the
    /// parameter count of `F`.
    pub fn for_function<F: CurveFunction>(values: &[f64]) -> Result<Self, FunctionError> {
        Self::from_values(F::PARAMETERS, values)
    }

    /// Start values in positional order, ready to pass as `a`.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.params.iter().map(|p| p.value).collect()
    }

    /// Look up by label or positional name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&InputParameter> {
        self.params.iter().find(|p| p.label == key || p.name == key)
    }

    /// Hold a parameter fixed or release it. Returns `false` if `key` is unknown.
    pub fn set_constant(&mut self, key: &str, constant: bool) -> bool {
        match self
            .params
            .iter_mut()
            .find(|p| p.label == key || p.name == key)
        {
            Some(param) => {
                param.constant = constant;
                true
            }
            None => false,
        }
    }

    /// Iterate in positional order.
    pub fn iter(&self) -> impl Iterator<Item = &InputParameter> {
        self.params.iter()
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// `true` when there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Tuning for the initial-parameter guesses.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GuessOptions {
    /// Width to start from, in units of `x`.
    pub sigma: f64,
    /// Super-Gaussian order to start from.
    pub exponent: f64,
}

impl Default for GuessOptions {
    fn default() -> Self {
        Self {
            sigma: 0.1,
            exponent: 5.0,
        }
    }
}

/// Validate a scan before guessing from it.
///
/// # Errors
///
/// [`GuessError::LengthMismatch`] when `x` and `y` differ in length,
/// [`GuessError::Empty`] when there are no samples and
/// [`GuessError::NonFinite`] for the first sample with a NaN or infinite
/// coordinate.
pub fn check_samples(x: &[f64], y: &[f64]) -> Result<(), GuessError> {
    if x.len() != y.len() {
        return Err(GuessError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.is_empty() {
        return Err(GuessError::Empty);
    }
    match x
        .iter()
        .zip(y)
        .position(|(xi, yi)| !xi.is_finite() || !yi.is_finite())
    {
        Some(index) => Err(GuessError::NonFinite { index }),
        None => Ok(()),
    }
}
