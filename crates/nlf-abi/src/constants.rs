//! Buffer bounds, symbol names and return codes.
//!
//! These constants define the binary contract between the fit host and a
//! plugin. They never change without a new set of symbol names.

/// Capacity in bytes of the host's name buffer, NUL terminator included.
///
/// The host allocates exactly this much for `GetFunctionName`, so the
/// identity string of every plugin must be at most `NAME_BUFFER_LEN - 1`
/// bytes long.
pub const NAME_BUFFER_LEN: usize = 255;

/// First character of every function name.
pub const NAME_PREFIX: char = 'f';

/// Separator between the numeric id and the free-text description.
pub const NAME_ID_SEPARATOR: char = ':';

/// Exported symbol names.
///
/// The first four are what the host binds. The checked variants are looked
/// up opportunistically by [`nlf-native-loader`](https://docs.rs/nlf-native-loader).
pub mod symbol {
    /// `void GetFunctionName(char* name)`
    pub const GET_FUNCTION_NAME: &str = "GetFunctionName";
    /// `void GetFunctionValue(double* x, double* a, double* y)`
    pub const GET_FUNCTION_VALUE: &str = "GetFunctionValue";
    /// `void GetNumParameters(int* n)`
    pub const GET_NUM_PARAMETERS: &str = "GetNumParameters";
    /// `void GetNumVariables(int* n)`
    pub const GET_NUM_VARIABLES: &str = "GetNumVariables";
    /// `int GetFunctionNameBounded(char* name, size_t capacity)`
    pub const GET_FUNCTION_NAME_BOUNDED: &str = "GetFunctionNameBounded";
    /// `int GetFunctionValueChecked(const double* x, size_t nx, const double* a, size_t na, double* y)`
    pub const GET_FUNCTION_VALUE_CHECKED: &str = "GetFunctionValueChecked";

    /// Symbols every plugin must export.
    pub const REQUIRED: [&str; 4] = [
        GET_FUNCTION_NAME,
        GET_FUNCTION_VALUE,
        GET_NUM_PARAMETERS,
        GET_NUM_VARIABLES,
    ];

    /// Symbols exported by plugins built with `export_curve_function!`.
    pub const CHECKED: [&str; 2] = [GET_FUNCTION_NAME_BOUNDED, GET_FUNCTION_VALUE_CHECKED];
}

/// Status codes returned by the checked entry points.
pub mod return_code {
    /// Success - the output was written
    pub const SUCCESS: i32 = 0;
    /// Generic error
    pub const ERROR: i32 = -1;
    /// A required pointer argument was null
    pub const NULL_POINTER: i32 = -2;
    /// The destination buffer cannot hold the NUL-terminated name
    pub const BUFFER_TOO_SMALL: i32 = -3;
    /// Variable or parameter count differs from the declared arity
    pub const ARITY_MISMATCH: i32 = -4;
}
