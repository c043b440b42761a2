//! Export macro for plugin crates.

/// Export the C entry points of a [`CurveFunction`](crate::CurveFunction).
///
/// Expands to six unmangled `extern "C"` functions in the calling crate:
///
/// | Symbol | Signature |
/// |--------|-----------|
/// | `GetFunctionName` | `void (char* name)` |
/// | `GetFunctionValue` | `void (double* x, double* a, double* y)` |
/// | `GetNumParameters` | `void (int* n)` |
/// | `GetNumVariables` | `void (int* n)` |
/// | `GetFunctionNameBounded` | `int (char* name, size_t capacity)` |
/// | `GetFunctionValueChecked` | `int (const double* x, size_t nx, const double* a, size_t na, double* y)` |
///
/// The first four keep the host's `void` signatures. Failures there write
/// nothing, except that `GetFunctionValue` stores NaN when `x` or `a` is null.
/// The checked pair return a code from [`return_code`](crate::return_code).
///
/// The name length is checked at compile time against
/// [`NAME_BUFFER_LEN`](crate::NAME_BUFFER_LEN), and both argument counts
/// against `c_int::MAX`.
///
/// Invoke it at most once per shared library: the symbol names are fixed.
///
/// ```ignore
/// pub struct GaussianCdf;
/// impl nlf_abi::CurveFunction for GaussianCdf { /* ... */ }
///
/// nlf_abi::export_curve_function!(GaussianCdf);
/// ```
#[macro_export]
macro_rules! export_curve_function {
    ($function:ty) => {
        const _: () = ::core::assert!(
            <$function as $crate::CurveFunction>::NAME.len() < $crate::NAME_BUFFER_LEN,
            "function name does not fit the host name buffer"
        );
        const _: () = ::core::assert!(
            <$function as $crate::CurveFunction>::VARIABLES.len()
                <= ::core::ffi::c_int::MAX as usize
                && <$function as $crate::CurveFunction>::PARAMETERS.len()
                    <= ::core::ffi::c_int::MAX as usize,
            "argument counts do not fit a C int"
        );

        /// Write the NUL-terminated function name into `name`.
        ///
        /// # Safety
        ///
        /// `name` must be null or valid for writes of 255 bytes.
        #[allow(unsafe_code, non_snake_case)]
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn GetFunctionName(name: *mut ::core::ffi::c_char) {
            // SAFETY: forwarded host contract.
            unsafe { $crate::ffi::export_function_name::<$function>(name) };
        }

        /// Evaluate the function at `x` with parameters `a`, writing `*y`.
        ///
        /// # Safety
        ///
        /// `x` and `a` must hold `GetNumVariables()` and `GetNumParameters()`
        /// values; `y` must be writable.
        #[allow(unsafe_code, non_snake_case)]
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn GetFunctionValue(x: *const f64, a: *const f64, y: *mut f64) {
            // SAFETY: forwarded host contract.
            unsafe { $crate::ffi::export_function_value::<$function>(x, a, y) };
        }

        /// Write the number of parameters to `*n`.
        ///
        /// # Safety
        ///
        /// `n` must be null or writable.
        #[allow(unsafe_code, non_snake_case)]
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn GetNumParameters(n: *mut ::core::ffi::c_int) {
            // SAFETY: forwarded host contract.
            unsafe { $crate::ffi::export_num_parameters::<$function>(n) };
        }

        /// Write the number of independent variables to `*n`.
        ///
        /// # Safety
        ///
        /// `n` must be null or writable.
        #[allow(unsafe_code, non_snake_case)]
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn GetNumVariables(n: *mut ::core::ffi::c_int) {
            // SAFETY: forwarded host contract.
            unsafe { $crate::ffi::export_num_variables::<$function>(n) };
        }

        /// Write the function name into a buffer of `capacity` bytes.
        ///
        /// # Safety
        ///
        /// `name` must be null or valid for writes of `capacity` bytes.
        #[allow(unsafe_code, non_snake_case)]
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn GetFunctionNameBounded(
            name: *mut ::core::ffi::c_char,
            capacity: usize,
        ) -> ::core::ffi::c_int {
            // SAFETY: forwarded caller contract.
            unsafe { $crate::ffi::export_function_name_bounded::<$function>(name, capacity) }
        }

        /// Evaluate with explicit array lengths.
        ///
        /// # Safety
        ///
        /// `x` must hold `nx` values, `a` must hold `na` values and `y` must be
        /// writable.
        #[allow(unsafe_code, non_snake_case)]
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn GetFunctionValueChecked(
            x: *const f64,
            nx: usize,
            a: *const f64,
            na: usize,
            y: *mut f64,
        ) -> ::core::ffi::c_int {
            // SAFETY: forwarded caller contract.
            unsafe { $crate::ffi::export_function_value_checked::<$function>(x, nx, a, na, y) }
        }
    };
}
