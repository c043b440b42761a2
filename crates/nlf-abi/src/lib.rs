//! C ABI contract for curve-function plugins.
//!
//! A curve-function plugin is a shared library that a non-linear-fit host
//! loads at runtime and queries through four unmangled, C-linkage symbols:
//!
//! - `GetFunctionName(char* name)` - writes the NUL-terminated identity into a
//!   host buffer of at least [`NAME_BUFFER_LEN`] bytes
//! - `GetFunctionValue(double* x, double* a, double* y)` - evaluates the
//!   function at `x` with parameters `a` and writes the result to `*y`
//! - `GetNumParameters(int* n)` - writes the parameter count
//! - `GetNumVariables(int* n)` - writes the independent-variable count
//!
//! Plugins built with [`export_curve_function!`] also export two checked entry
//! points that receive buffer lengths and return a status code from
//! [`return_code`]:
//!
//! - `int GetFunctionNameBounded(char* name, size_t capacity)`
//! - `int GetFunctionValueChecked(const double* x, size_t nx, const double* a, size_t na, double* y)`
//!
//! # Identity
//!
//! Every function name starts with `f<N>:` where `N` is a positive integer.
//! The remainder is free text shown to the user. See [`FunctionName`].
//!
//! # Numerics
//!
//! Evaluation follows IEEE-754 throughout. Infinite and NaN results are
//! values, not errors.
//!
//! # Example
//!
//! ```
//! use nlf_abi::prelude::*;
//!
//! struct Line;
//!
//! impl CurveFunction for Line {
//!     const NAME: &'static str = "f7: Line f7=slope*x+intercept";
//!     const VARIABLES: &'static [&'static str] = &["x"];
//!     const PARAMETERS: &'static [&'static str] = &["slope", "intercept"];
//!
//!     fn value(x: &[f64], a: &[f64]) -> Option<f64> {
//!         match (x, a) {
//!             ([x], [slope, intercept]) => Some(slope * x + intercept),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let y = Line::evaluate(&[2.0], &[3.0, 1.0])?;
//! assert!((y - 7.0).abs() < 1e-12);
//! assert_eq!(Line::name()?.id().get(), 7);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod arity;
pub mod constants;
pub mod error;
pub mod ffi;
pub mod function;
mod macros;
pub mod name;
pub mod params;
pub mod prelude;
pub mod signatures;

pub use arity::{ArgumentKind, Arity};
pub use constants::{NAME_BUFFER_LEN, return_code, symbol};
pub use error::{FunctionError, GuessError, NameError};
pub use function::CurveFunction;
pub use name::{FunctionId, FunctionName};
pub use params::{GuessOptions, InputParameter, InputParameters, check_samples};
