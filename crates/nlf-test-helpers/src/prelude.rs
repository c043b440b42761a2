//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use nlf_test_helpers::prelude::*;
//! ```

pub use crate::fixtures::{linspace, sample};
pub use crate::must::{must, must_some, must_with};
pub use crate::{
    assert_approx_eq, assert_contains, assert_in_range, assert_monotonic, assert_monotonic_desc,
    assert_sorted,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
