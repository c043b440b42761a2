//! Raw-pointer adapters behind the exported entry points.
//!
//! [`export_curve_function!`](crate::export_curve_function) expands to thin
//! `extern "C"` wrappers around the functions here. Each adapter validates
//! what it can (null pointers, declared lengths, buffer capacity) before it
//! touches host memory, and reports the outcome as a status code from
//! [`return_code`](crate::constants::return_code).

use core::ffi::{c_char, c_int};
use core::mem::MaybeUninit;
use core::{ptr, slice};

use crate::arity::ArgumentKind;
use crate::constants::{NAME_BUFFER_LEN, return_code};
use crate::error::FunctionError;
use crate::function::CurveFunction;

/// Copy `name` and a NUL terminator into `buffer`.
///
/// Returns the number of bytes written before the terminator. Nothing is
/// written when the buffer is too small.
///
/// # Errors
///
/// Returns [`FunctionError::BufferTooSmall`] if `buffer` is shorter than
/// `name.len() + 1`.
pub fn copy_name_into(name: &str, buffer: &mut [u8]) -> Result<usize, FunctionError> {
    // SAFETY: `u8` and `MaybeUninit<u8>` share a layout, and only
    // initialized bytes are written through the view.
    let buffer = unsafe { &mut *(ptr::from_mut(buffer) as *mut [MaybeUninit<u8>]) };
    copy_name(name, buffer)
}

fn copy_name(name: &str, buffer: &mut [MaybeUninit<u8>]) -> Result<usize, FunctionError> {
    let required = name.len() + 1;
    if buffer.len() < required {
        return Err(FunctionError::BufferTooSmall {
            required,
            capacity: buffer.len(),
        });
    }
    let (body, rest) = buffer.split_at_mut(name.len());
    for (dst, &byte) in body.iter_mut().zip(name.as_bytes()) {
        dst.write(byte);
    }
    if let Some(terminator) = rest.first_mut() {
        terminator.write(0);
    }
    Ok(name.len())
}

/// Map an adapter result to its status code.
#[must_use]
pub fn status_code(result: Result<(), FunctionError>) -> c_int {
    match result {
        Ok(()) => return_code::SUCCESS,
        Err(err) => err.return_code(),
    }
}

/// Write the name of `F` into a host buffer of `capacity` bytes.
///
/// # Safety
///
/// `name` must be null or valid for writes of `capacity` bytes.
///
/// # Errors
///
/// [`FunctionError::NullPointer`] for a null buffer,
/// [`FunctionError::BufferTooSmall`] if the name and terminator do not fit.
pub unsafe fn write_name<F: CurveFunction>(
    name: *mut c_char,
    capacity: usize,
) -> Result<(), FunctionError> {
    if name.is_null() {
        return Err(FunctionError::NullPointer { argument: "name" });
    }
    // SAFETY: non-null and valid for writes of `capacity` bytes per the
    // caller contract. The host buffer may be uninitialized.
    let buffer = unsafe { slice::from_raw_parts_mut(name.cast::<MaybeUninit<u8>>(), capacity) };
    copy_name(F::NAME, buffer).map(|_| ())
}

/// Write a count to a host `int`.
///
/// # Safety
///
/// `out` must be null or valid for a write of one `c_int`.
///
/// # Errors
///
/// [`FunctionError::NullPointer`] for a null pointer,
/// [`FunctionError::CountOverflow`] if `count` exceeds `c_int::MAX`. Nothing
/// is written in either case.
pub unsafe fn write_count(
    out: *mut c_int,
    kind: ArgumentKind,
    count: usize,
) -> Result<(), FunctionError> {
    if out.is_null() {
        return Err(FunctionError::NullPointer { argument: "n" });
    }
    let count = c_int::try_from(count).map_err(|_| FunctionError::CountOverflow { kind, count })?;
    // SAFETY: non-null and writable per the caller contract.
    unsafe { out.write(count) };
    Ok(())
}

/// Evaluate `F` on host arrays and write the result to `*y`.
///
/// Lengths are checked against the declared arity before anything is read.
///
/// # Safety
///
/// When non-null, `x` must be valid for reads of `variables` aligned `f64`s,
/// `a` for `parameters` aligned `f64`s and `y` for a write of one `f64`.
///
/// # Errors
///
/// [`FunctionError::ArityMismatch`] when a length differs from the declared
/// arity, [`FunctionError::NullPointer`] for any null pointer.
pub unsafe fn write_value<F: CurveFunction>(
    x: *const f64,
    variables: usize,
    a: *const f64,
    parameters: usize,
    y: *mut f64,
) -> Result<(), FunctionError> {
    F::arity().check(variables, parameters)?;
    if x.is_null() {
        return Err(FunctionError::NullPointer { argument: "x" });
    }
    if a.is_null() {
        return Err(FunctionError::NullPointer { argument: "a" });
    }
    if y.is_null() {
        return Err(FunctionError::NullPointer { argument: "y" });
    }

    // SAFETY: non-null, and the caller guarantees `variables` readable values.
    let x = unsafe { core::slice::from_raw_parts(x, variables) };
    // SAFETY: non-null, and the caller guarantees `parameters` readable values.
    let a = unsafe { core::slice::from_raw_parts(a, parameters) };
    let value = F::evaluate(x, a)?;
    // SAFETY: non-null and writable per the caller contract.
    unsafe { y.write(value) };
    Ok(())
}

/// `GetFunctionName` body: the host buffer is [`NAME_BUFFER_LEN`] bytes.
///
/// # Safety
///
/// `name` must be null or valid for writes of [`NAME_BUFFER_LEN`] bytes.
pub unsafe fn export_function_name<F: CurveFunction>(name: *mut c_char) -> c_int {
    // SAFETY: forwarded caller contract.
    status_code(unsafe { write_name::<F>(name, NAME_BUFFER_LEN) })
}

/// `GetFunctionNameBounded` body.
///
/// # Safety
///
/// `name` must be null or valid for writes of `capacity` bytes.
pub unsafe fn export_function_name_bounded<F: CurveFunction>(
    name: *mut c_char,
    capacity: usize,
) -> c_int {
    // SAFETY: forwarded caller contract.
    status_code(unsafe { write_name::<F>(name, capacity) })
}

/// `GetFunctionValue` body: lengths are the declared counts.
///
/// A null `x` or `a` with a valid `y` writes the NaN sentinel, since the
/// legacy signature has no other way to report the failure.
///
/// # Safety
///
/// When non-null, `x` and `a` must hold the declared number of `f64`s and `y`
/// must be writable.
pub unsafe fn export_function_value<F: CurveFunction>(
    x: *const f64,
    a: *const f64,
    y: *mut f64,
) -> c_int {
    let arity = F::arity();
    // SAFETY: forwarded caller contract with the declared lengths.
    let result = unsafe { write_value::<F>(x, arity.variables, a, arity.parameters, y) };
    if result.is_err() && !y.is_null() {
        // SAFETY: `y` is non-null and writable per the caller contract.
        unsafe { y.write(f64::NAN) };
    }
    status_code(result)
}

/// `GetFunctionValueChecked` body.
///
/// # Safety
///
/// See [`write_value`].
pub unsafe fn export_function_value_checked<F: CurveFunction>(
    x: *const f64,
    variables: usize,
    a: *const f64,
    parameters: usize,
    y: *mut f64,
) -> c_int {
    // SAFETY: forwarded caller contract.
    status_code(unsafe { write_value::<F>(x, variables, a, parameters, y) })
}

/// `GetNumParameters` body.
///
/// # Safety
///
/// `n` must be null or writable.
pub unsafe fn export_num_parameters<F: CurveFunction>(n: *mut c_int) -> c_int {
    // SAFETY: forwarded caller contract.
    status_code(unsafe { write_count(n, ArgumentKind::Parameters, F::arity().parameters) })
}

/// `GetNumVariables` body.
///
/// # Safety
///
/// `n` must be null or writable.
pub unsafe fn export_num_variables<F: CurveFunction>(n: *mut c_int) -> c_int {
    // SAFETY: forwarded caller contract.
    status_code(unsafe { write_count(n, ArgumentKind::Variables, F::arity().variables) })
}
