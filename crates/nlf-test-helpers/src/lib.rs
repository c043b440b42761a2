//! Shared test utilities for the curve-function workspace.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`assertions`] - Floating-point and ordering assertions
//! - [`fixtures`] - Sample grids and synthetic scan data
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! nlf-test-helpers = { workspace = true }
//! ```
//!
//! ```rust,ignore
//! use nlf_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic)]

pub mod assertions;
pub mod fixtures;
pub mod must;
pub mod prelude;

pub use fixtures::{linspace, sample};
pub use must::*;
