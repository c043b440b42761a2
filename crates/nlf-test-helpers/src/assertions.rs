//! Custom assertion macros for testing.
//!
//! Curve values are `f64`, so most of these compare with a tolerance or
//! check ordering across a sampled grid.

/// Assert that two floating-point values are approximately equal.
///
/// # Example
///
/// ```rust
/// use nlf_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(1.0, 1.0001, 0.001);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {{
        let left: f64 = $left;
        let right: f64 = $right;
        let tolerance: f64 = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    }};
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {{
        let left: f64 = $left;
        let right: f64 = $right;
        let tolerance: f64 = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`: {}",
                left, right, diff, tolerance, format_args!($($arg)+)
            );
        }
    }};
}

/// Assert that a collection is sorted in ascending order (ties allowed).
///
/// # Example
///
/// ```rust
/// use nlf_test_helpers::assert_sorted;
///
/// assert_sorted!(&[0.0, 0.5, 0.5, 1.0]);
/// ```
#[macro_export]
macro_rules! assert_sorted {
    ($collection:expr $(,)?) => {{
        let collection = $collection;
        let mut iter = collection.iter();
        if let Some(mut prev) = iter.next() {
            for (i, curr) in iter.enumerate() {
                if prev > curr {
                    panic!(
                        "assertion failed: collection is not sorted\n  first unsorted pair at index {}: {:?} > {:?}",
                        i, prev, curr
                    );
                }
                prev = curr;
            }
        }
    }};
}

/// Assert that a sequence is strictly increasing.
///
/// # Example
///
/// ```rust
/// use nlf_test_helpers::assert_monotonic;
///
/// assert_monotonic!(&[0.1, 0.2, 0.3]);
/// ```
#[macro_export]
macro_rules! assert_monotonic {
    ($collection:expr $(,)?) => {{
        let collection = $collection;
        let mut iter = collection.iter();
        if let Some(mut prev) = iter.next() {
            for (i, curr) in iter.enumerate() {
                if prev >= curr {
                    panic!(
                        "assertion failed: sequence is not strictly monotonic\n  violation at index {}: {:?} >= {:?}",
                        i, prev, curr
                    );
                }
                prev = curr;
            }
        }
    }};
}

/// Assert that a sequence is strictly decreasing.
///
/// # Example
///
/// ```rust
/// use nlf_test_helpers::assert_monotonic_desc;
///
/// assert_monotonic_desc!(&[3.0, 2.0, 1.0]);
/// ```
#[macro_export]
macro_rules! assert_monotonic_desc {
    ($collection:expr $(,)?) => {{
        let collection = $collection;
        let mut iter = collection.iter();
        if let Some(mut prev) = iter.next() {
            for (i, curr) in iter.enumerate() {
                if prev <= curr {
                    panic!(
                        "assertion failed: sequence is not strictly monotonic decreasing\n  violation at index {}: {:?} <= {:?}",
                        i, prev, curr
                    );
                }
                prev = curr;
            }
        }
    }};
}

/// Assert that a string contains a substring.
///
/// # Example
///
/// ```rust
/// use nlf_test_helpers::assert_contains;
///
/// assert_contains!("f1: GaussianCDF", "CDF");
/// ```
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr $(,)?) => {{
        let haystack = $haystack;
        let needle = $needle;
        if !haystack.contains(needle) {
            panic!(
                "assertion failed: `{:?}` does not contain `{:?}`",
                haystack, needle
            );
        }
    }};
}

/// Assert that a value lies in a range.
///
/// # Example
///
/// ```rust
/// use nlf_test_helpers::assert_in_range;
///
/// assert_in_range!(0.5, 0.0..=1.0);
/// ```
#[macro_export]
macro_rules! assert_in_range {
    ($value:expr, $range:expr $(,)?) => {{
        let value = $value;
        let range = $range;
        if !range.contains(&value) {
            panic!("assertion failed: value {:?} is not in range {:?}", value, range);
        }
    }};
    ($value:expr, $range:expr, $($arg:tt)+) => {{
        let value = $value;
        let range = $range;
        if !range.contains(&value) {
            panic!("assertion failed: value {:?} is not in range {:?}: {}", value, range, format_args!($($arg)+));
        }
    }};
}
