//! Opening curve-function libraries.

use std::path::Path;

use libloading::Library;
use nlf_abi::symbol;
use tracing::info;

use crate::config::LoaderConfig;
use crate::error::{NlfError, NlfResult};
use crate::function::NativeFunction;
use crate::vtable::FunctionVTable;

/// Loads curve functions from shared libraries.
#[derive(Debug, Clone, Default)]
pub struct NativeFunctionLoader {
    config: LoaderConfig,
}

impl NativeFunctionLoader {
    /// Create a loader.
    ///
    /// # Errors
    ///
    /// Returns [`NlfError::Config`] if `config` fails validation.
    pub fn new(config: LoaderConfig) -> NlfResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load the curve function exported by the library at `path`.
    ///
    /// Native libraries run with full process privileges. Only load
    /// libraries from trusted locations.
    ///
    /// # Errors
    ///
    /// - [`NlfError::LibraryLoadFailed`] if the file is missing or not a
    ///   loadable library
    /// - [`NlfError::MissingSymbol`] if a required entry point is absent,
    ///   or a checked one under [`LoaderConfig::strict`]
    /// - [`NlfError::InvalidName`] / [`NlfError::InvalidArity`] for an
    ///   unusable identity
    pub fn load(&self, path: &Path) -> NlfResult<NativeFunction> {
        // SAFETY: opening a library runs its initializers. Curve-function
        // libraries are trusted code by contract.
        let library = unsafe { Library::new(path) }.map_err(|e| NlfError::LibraryLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let vtable = self.resolve(&library)?;

        // SAFETY: the pointers were resolved from `library`, which moves
        // into the function and outlives them.
        let function = unsafe { NativeFunction::from_parts(vtable, Some(library), &self.config)? };

        info!(
            function_id = %function.id(),
            name = %function.name(),
            arity = %function.arity(),
            checked = function.has_checked_entry_points(),
            path = %path.display(),
            "Curve function loaded"
        );

        Ok(function)
    }

    fn resolve(&self, library: &Library) -> NlfResult<FunctionVTable> {
        // SAFETY: each symbol is read with the signature the plugin contract
        // assigns to that name.
        let vtable = unsafe {
            FunctionVTable {
                get_function_name: required(library, symbol::GET_FUNCTION_NAME)?,
                get_function_value: required(library, symbol::GET_FUNCTION_VALUE)?,
                get_num_parameters: required(library, symbol::GET_NUM_PARAMETERS)?,
                get_num_variables: required(library, symbol::GET_NUM_VARIABLES)?,
                get_function_name_bounded: None,
                get_function_value_checked: None,
            }
        };
        if !self.config.use_checked_entry_points {
            return Ok(vtable);
        }

        if self.config.require_checked_entry_points {
            // SAFETY: as above.
            let (bounded, checked) = unsafe {
                (
                    required(library, symbol::GET_FUNCTION_NAME_BOUNDED)?,
                    required(library, symbol::GET_FUNCTION_VALUE_CHECKED)?,
                )
            };
            return Ok(FunctionVTable {
                get_function_name_bounded: Some(bounded),
                get_function_value_checked: Some(checked),
                ..vtable
            });
        }

        // SAFETY: as above.
        let pair = unsafe {
            (
                optional(library, symbol::GET_FUNCTION_NAME_BOUNDED),
                optional(library, symbol::GET_FUNCTION_VALUE_CHECKED),
            )
        };
        Ok(match pair {
            (Some(bounded), Some(checked)) => FunctionVTable {
                get_function_name_bounded: Some(bounded),
                get_function_value_checked: Some(checked),
                ..vtable
            },
            _ => vtable,
        })
    }
}

/// Resolve `name`, reporting its absence as [`NlfError::MissingSymbol`].
///
/// # Safety
///
/// `T` must be the function-pointer type of `name`.
unsafe fn required<T: Copy>(library: &Library, name: &'static str) -> NlfResult<T> {
    // SAFETY: forwarded caller contract.
    let resolved = unsafe { library.get::<T>(name.as_bytes()) };
    resolved
        .map(|symbol| *symbol)
        .map_err(|e| NlfError::MissingSymbol {
            symbol: name,
            reason: e.to_string(),
        })
}

/// Resolve `name` if the library exports it.
///
/// # Safety
///
/// `T` must be the function-pointer type of `name`.
unsafe fn optional<T: Copy>(library: &Library, name: &'static str) -> Option<T> {
    // SAFETY: forwarded caller contract.
    let resolved = unsafe { library.get::<T>(name.as_bytes()) };
    resolved.ok().map(|symbol| *symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::consts::{DLL_PREFIX, DLL_SUFFIX};
    use std::path::PathBuf;

    use nlf_abi::signatures::GetFunctionValueFn;
    use nlf_test_helpers::prelude::*;

    fn built_gaussian_cdf() -> PathBuf {
        let exe = must(std::env::current_exe());
        let deps = must_some(exe.parent(), "test binary directory");
        let name = format!("{DLL_PREFIX}nlf_gaussian_cdf{DLL_SUFFIX}");
        deps.join(name)
    }

    #[test]
    fn test_required_and_optional_on_missing_symbol() {
        // SAFETY: the built f1 plugin has no initializers.
        let library = must_with(unsafe { Library::new(built_gaussian_cdf()) }, "built f1");

        // SAFETY: the type matches the symbol when it exists.
        let found = unsafe { optional::<GetFunctionValueFn>(&library, symbol::GET_FUNCTION_VALUE) };
        assert!(found.is_some());

        // SAFETY: the symbol does not exist, nothing is called.
        let absent = unsafe { optional::<GetFunctionValueFn>(&library, "GetFunctionValueTwice") };
        assert!(absent.is_none());

        // SAFETY: as above.
        let missing = unsafe { required::<GetFunctionValueFn>(&library, "GetFunctionValueTwice") };
        assert!(matches!(
            missing,
            Err(NlfError::MissingSymbol { symbol: "GetFunctionValueTwice", .. })
        ));
    }

    #[test]
    fn test_new_validates() {
        let config = LoaderConfig {
            name_buffer_len: 10,
            ..LoaderConfig::default()
        };
        assert!(matches!(
            NativeFunctionLoader::new(config),
            Err(NlfError::Config(_))
        ));
    }

    #[test]
    fn test_default_loader_config() {
        let loader = NativeFunctionLoader::default();
        assert_eq!(loader.config(), &LoaderConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let loader = NativeFunctionLoader::default();
        let path = Path::new("/nonexistent/libf1_gaussian_cdf.so");
        let result = loader.load(path);
        assert!(matches!(
            result,
            Err(NlfError::LibraryLoadFailed { path: ref failed, .. }) if failed == path
        ));
    }
}
