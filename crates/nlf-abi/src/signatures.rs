//! Function-pointer types of the exported entry points.
//!
//! The loader resolves symbols with these types. The required four return
//! nothing, matching plugins written against the host's C header.

use core::ffi::{c_char, c_int};

/// `void GetFunctionName(char* name)`
///
/// # Safety
/// - `name` must be valid for writes of [`NAME_BUFFER_LEN`](crate::NAME_BUFFER_LEN) bytes
pub type GetFunctionNameFn = unsafe extern "C" fn(name: *mut c_char);

/// `void GetFunctionValue(double* x, double* a, double* y)`
///
/// # Safety
/// - `x` must hold `GetNumVariables()` values
/// - `a` must hold `GetNumParameters()` values
/// - `y` must be writable
pub type GetFunctionValueFn = unsafe extern "C" fn(x: *const f64, a: *const f64, y: *mut f64);

/// `void GetNumParameters(int* n)` and `void GetNumVariables(int* n)`
///
/// # Safety
/// - `n` must be writable
pub type GetCountFn = unsafe extern "C" fn(n: *mut c_int);

/// `int GetFunctionNameBounded(char* name, size_t capacity)`
///
/// # Returns
/// - 0 on success
/// - Negative [`return_code`](crate::return_code) on failure
pub type GetFunctionNameBoundedFn = unsafe extern "C" fn(name: *mut c_char, capacity: usize) -> c_int;

/// `int GetFunctionValueChecked(const double* x, size_t nx, const double* a, size_t na, double* y)`
///
/// # Returns
/// - 0 on success
/// - Negative [`return_code`](crate::return_code) on failure
pub type GetFunctionValueCheckedFn =
    unsafe extern "C" fn(x: *const f64, nx: usize, a: *const f64, na: usize, y: *mut f64) -> c_int;
