//! Exercises the entry points generated by `export_curve_function!`.

use std::ffi::{c_char, c_int};
use std::ptr;

use nlf_abi::prelude::*;
use nlf_test_helpers::prelude::*;

struct Ramp;

impl CurveFunction for Ramp {
    const NAME: &'static str = "f42: Ramp f42=slope*(x-x0)";
    const VARIABLES: &'static [&'static str] = &["x"];
    const PARAMETERS: &'static [&'static str] = &["slope", "x0"];

    fn value(x: &[f64], a: &[f64]) -> Option<f64> {
        match (x, a) {
            ([x], [slope, x0]) => Some(slope * (x - x0)),
            _ => None,
        }
    }
}

nlf_abi::export_curve_function!(Ramp);

fn name_from_buffer(buffer: &[c_char]) -> Result<FunctionName, NameError> {
    let bytes: Vec<u8> = buffer.iter().map(|&c| c as u8).collect();
    FunctionName::from_c_bytes(&bytes)
}

#[test]
fn test_get_function_name() -> TestResult {
    let mut buffer = [0 as c_char; NAME_BUFFER_LEN];
    // SAFETY: the buffer holds NAME_BUFFER_LEN bytes.
    unsafe { GetFunctionName(buffer.as_mut_ptr()) };
    let name = name_from_buffer(&buffer)?;
    assert_eq!(name.id().get(), 42);
    assert_eq!(name.as_str(), Ramp::NAME);
    Ok(())
}

#[test]
fn test_get_function_name_null_is_ignored() {
    // SAFETY: null is checked before any write.
    unsafe { GetFunctionName(ptr::null_mut()) };
}

#[test]
fn test_get_counts() {
    let mut n: c_int = 0;
    // SAFETY: `n` is a valid local.
    unsafe { GetNumParameters(&raw mut n) };
    assert_eq!(n, 2);
    // SAFETY: `n` is a valid local.
    unsafe { GetNumVariables(&raw mut n) };
    assert_eq!(n, 1);
}

#[test]
fn test_get_function_value() {
    let x = [3.0];
    let a = [2.0, 1.0];
    let mut y = 0.0;
    // SAFETY: arrays hold the declared counts.
    unsafe { GetFunctionValue(x.as_ptr(), a.as_ptr(), &raw mut y) };
    assert_approx_eq!(y, 4.0, 1e-12);
}

#[test]
fn test_bounded_name_reports_small_buffer() {
    let mut buffer = [0 as c_char; 8];
    // SAFETY: capacity matches the buffer.
    let code = unsafe { GetFunctionNameBounded(buffer.as_mut_ptr(), buffer.len()) };
    assert_eq!(code, return_code::BUFFER_TOO_SMALL);
}

#[test]
fn test_bounded_name_exact_capacity() -> TestResult {
    let mut buffer = vec![0 as c_char; Ramp::NAME.len() + 1];
    // SAFETY: capacity matches the buffer.
    let code = unsafe { GetFunctionNameBounded(buffer.as_mut_ptr(), buffer.len()) };
    assert_eq!(code, return_code::SUCCESS);
    assert_eq!(name_from_buffer(&buffer)?.as_str(), Ramp::NAME);
    Ok(())
}

#[test]
fn test_checked_value_rejects_wrong_lengths() {
    let x = [3.0, 4.0];
    let a = [2.0, 1.0, 0.0];
    let mut y = -1.0;
    // SAFETY: lengths match the arrays; the mismatch is reported before reading.
    let code = unsafe { GetFunctionValueChecked(x.as_ptr(), x.len(), a.as_ptr(), 2, &raw mut y) };
    assert_eq!(code, return_code::ARITY_MISMATCH);
    assert_approx_eq!(y, -1.0, 0.0);

    // SAFETY: as above.
    let code = unsafe { GetFunctionValueChecked(x.as_ptr(), 1, a.as_ptr(), a.len(), &raw mut y) };
    assert_eq!(code, return_code::ARITY_MISMATCH);
}

#[test]
fn test_checked_value_success() {
    let x = [0.5];
    let a = [4.0, 0.0];
    let mut y = 0.0;
    // SAFETY: lengths match the arrays.
    let code = unsafe { GetFunctionValueChecked(x.as_ptr(), 1, a.as_ptr(), 2, &raw mut y) };
    assert_eq!(code, return_code::SUCCESS);
    assert_approx_eq!(y, 2.0, 1e-12);
}
