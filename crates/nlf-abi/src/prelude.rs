//! Convenience re-exports for plugin and host crates.
//!
//! ```
//! use nlf_abi::prelude::*;
//!
//! assert_eq!(NAME_BUFFER_LEN, 255);
//! assert_eq!(return_code::SUCCESS, 0);
//! ```

pub use crate::arity::{ArgumentKind, Arity};
pub use crate::constants::{NAME_BUFFER_LEN, return_code, symbol};
pub use crate::error::{FunctionError, GuessError, NameError};
pub use crate::function::CurveFunction;
pub use crate::name::{FunctionId, FunctionName};
pub use crate::params::{GuessOptions, InputParameter, InputParameters, check_samples};
