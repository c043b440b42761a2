//! Error types for the plugin contract.

use thiserror::Error;

use crate::arity::ArgumentKind;
use crate::constants::return_code;

/// Failure of a contract check at the plugin boundary.
///
/// Floating-point exceptional results are never reported here; an infinite
/// or NaN value is a valid output of the formula.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FunctionError {
    /// Destination buffer cannot hold the NUL-terminated name.
    #[error("buffer too small: name needs {required} bytes, capacity is {capacity}")]
    BufferTooSmall {
        /// Bytes needed, terminator included.
        required: usize,
        /// Bytes available.
        capacity: usize,
    },

    /// Argument array length differs from the declared count.
    #[error("arity mismatch: expected {expected} {kind}, got {actual}")]
    ArityMismatch {
        /// Which argument array was wrong.
        kind: ArgumentKind,
        /// Declared count.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// A required pointer argument was null.
    #[error("null pointer passed for `{argument}`")]
    NullPointer {
        /// Argument name as it appears in the C signature.
        argument: &'static str,
    },

    /// A declared count does not fit a C `int`.
    #[error("{count} {kind} do not fit a C int")]
    CountOverflow {
        /// Which count overflowed.
        kind: ArgumentKind,
        /// Declared count.
        count: usize,
    },

    /// The identity string does not follow the `f<N>:` grammar.
    #[error("invalid function name: {0}")]
    InvalidName(#[from] NameError),

    /// A checked entry point returned a non-success status.
    #[error("entry point returned status {code}")]
    Status {
        /// Raw status code.
        code: i32,
    },
}

impl FunctionError {
    /// Status code reported through the checked entry points.
    #[must_use]
    pub fn return_code(&self) -> i32 {
        match self {
            Self::BufferTooSmall { .. } => return_code::BUFFER_TOO_SMALL,
            Self::ArityMismatch { .. } => return_code::ARITY_MISMATCH,
            Self::NullPointer { .. } => return_code::NULL_POINTER,
            Self::CountOverflow { .. } | Self::InvalidName(_) => return_code::ERROR,
            Self::Status { code } => *code,
        }
    }

    /// Turn a status code from a checked entry point into a result.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::Status`] for any code other than
    /// [`return_code::SUCCESS`].
    pub fn check_return_code(code: i32) -> Result<(), Self> {
        if code == return_code::SUCCESS {
            Ok(())
        } else {
            Err(Self::Status { code })
        }
    }
}

/// Reasons a string is not a valid function identity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The name does not start with `f`.
    #[error("name must start with 'f'")]
    MissingPrefix,

    /// No digits follow the `f`.
    #[error("name must have a positive integer after 'f'")]
    MissingId,

    /// The digits are zero or overflow a `u32`.
    #[error("function id '{0}' is not a positive 32-bit integer")]
    InvalidId(String),

    /// The id is not followed by `:`.
    #[error("function id must be followed by ':'")]
    MissingColon,

    /// The name contains a NUL byte before its end.
    #[error("name contains an interior NUL byte at offset {0}")]
    InteriorNul(usize),

    /// A C buffer contained no terminator.
    #[error("name buffer of {0} bytes has no NUL terminator")]
    Unterminated(usize),

    /// The name is not valid UTF-8.
    #[error("name is not valid UTF-8")]
    InvalidUtf8,

    /// The name does not fit in the host buffer.
    #[error("name is {len} bytes, at most {max} fit with the terminator")]
    TooLong {
        /// Byte length of the name without terminator.
        len: usize,
        /// Largest allowed length.
        max: usize,
    },
}

/// Failure to derive starting parameters from sample data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GuessError {
    /// No samples were supplied.
    #[error("cannot guess parameters from empty data")]
    Empty,

    /// `x` and `y` differ in length.
    #[error("x has {x} samples but y has {y}")]
    LengthMismatch {
        /// Number of x samples.
        x: usize,
        /// Number of y samples.
        y: usize,
    },

    /// A sample is infinite or NaN.
    #[error("sample {index} is not finite")]
    NonFinite {
        /// Index of the offending sample.
        index: usize,
    },
}
