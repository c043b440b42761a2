//! Declared argument counts and the checks against them.

use core::fmt;

use crate::error::FunctionError;

/// Which argument array a count refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ArgumentKind {
    /// Independent variables (`x`).
    Variables,
    /// Fit parameters (`a`).
    Parameters,
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variables => f.write_str("variables"),
            Self::Parameters => f.write_str("parameters"),
        }
    }
}

/// Number of independent variables and parameters a function declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arity {
    /// Length of the `x` array.
    pub variables: usize,
    /// Length of the `a` array.
    pub parameters: usize,
}

impl Arity {
    /// Create an arity.
    #[must_use]
    pub const fn new(variables: usize, parameters: usize) -> Self {
        Self {
            variables,
            parameters,
        }
    }

    /// Check supplied array lengths, variables first.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::ArityMismatch`] for the first array whose
    /// length differs from the declaration.
    pub fn check(&self, variables: usize, parameters: usize) -> Result<(), FunctionError> {
        if variables != self.variables {
            return Err(FunctionError::ArityMismatch {
                kind: ArgumentKind::Variables,
                expected: self.variables,
                actual: variables,
            });
        }
        if parameters != self.parameters {
            return Err(FunctionError::ArityMismatch {
                kind: ArgumentKind::Parameters,
                expected: self.parameters,
                actual: parameters,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} variable(s), {} parameter(s)",
            self.variables, self.parameters
        )
    }
}
