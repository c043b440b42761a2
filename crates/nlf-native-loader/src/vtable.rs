//! Resolved entry points of one curve-function library.

use nlf_abi::signatures::{
    GetCountFn, GetFunctionNameBoundedFn, GetFunctionNameFn, GetFunctionValueCheckedFn,
    GetFunctionValueFn,
};

/// Function table of a curve-function library (C ABI).
///
/// The four required pointers are the host contract. The checked pair is
/// `None` when the library does not export it or the loader was configured
/// not to use it.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FunctionVTable {
    /// `GetFunctionName`
    pub get_function_name: GetFunctionNameFn,
    /// `GetFunctionValue`
    pub get_function_value: GetFunctionValueFn,
    /// `GetNumParameters`
    pub get_num_parameters: GetCountFn,
    /// `GetNumVariables`
    pub get_num_variables: GetCountFn,
    /// `GetFunctionNameBounded`
    pub get_function_name_bounded: Option<GetFunctionNameBoundedFn>,
    /// `GetFunctionValueChecked`
    pub get_function_value_checked: Option<GetFunctionValueCheckedFn>,
}

impl FunctionVTable {
    /// `true` when both checked entry points are present.
    #[must_use]
    pub fn has_checked_entry_points(&self) -> bool {
        self.get_function_name_bounded.is_some() && self.get_function_value_checked.is_some()
    }

    /// Drop the checked pair so only the legacy four are called.
    #[must_use]
    pub fn legacy_only(self) -> Self {
        Self {
            get_function_name_bounded: None,
            get_function_value_checked: None,
            ..self
        }
    }
}
