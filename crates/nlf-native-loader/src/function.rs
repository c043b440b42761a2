//! A loaded curve function.

use std::ffi::c_int;

use libloading::Library;
use nlf_abi::{Arity, FunctionError, FunctionId, FunctionName};

use crate::config::LoaderConfig;
use crate::error::{NlfError, NlfResult};
use crate::vtable::FunctionVTable;

/// Curve function backed by native entry points.
///
/// Name and arity are read once when the function is built. Evaluation goes
/// through the checked entry point when the library exports it, otherwise
/// through `GetFunctionValue`.
#[derive(Debug)]
pub struct NativeFunction {
    name: FunctionName,
    arity: Arity,
    vtable: FunctionVTable,
    /// Keeps the code behind `vtable` mapped. Declared last so it drops last.
    _library: Option<Library>,
}

// SAFETY: the entry points are pure functions of their arguments with no
// shared mutable state, and `Library` is `Send + Sync`.
unsafe impl Send for NativeFunction {}
// SAFETY: see `Send`; concurrent calls are re-entrant.
unsafe impl Sync for NativeFunction {}

impl NativeFunction {
    /// Build a function from entry points that are already in memory, such
    /// as statically linked plugins.
    ///
    /// # Safety
    ///
    /// Every pointer in `vtable` must follow the plugin contract of
    /// [`nlf_abi`] and stay valid for the lifetime of the returned value.
    ///
    /// # Errors
    ///
    /// [`NlfError::InvalidName`] or [`NlfError::InvalidArity`] when the
    /// entry points report an unusable identity.
    pub unsafe fn from_vtable(vtable: FunctionVTable, config: &LoaderConfig) -> NlfResult<Self> {
        // SAFETY: forwarded caller contract; no library to keep alive.
        unsafe { Self::from_parts(vtable, None, config) }
    }

    /// # Safety
    ///
    /// As [`from_vtable`](Self::from_vtable); `library` must own the code
    /// behind `vtable` when it is `Some`.
    pub(crate) unsafe fn from_parts(
        vtable: FunctionVTable,
        library: Option<Library>,
        config: &LoaderConfig,
    ) -> NlfResult<Self> {
        config.validate()?;
        let vtable = if config.use_checked_entry_points {
            vtable
        } else {
            vtable.legacy_only()
        };

        // SAFETY: forwarded caller contract.
        let name = unsafe { read_name(&vtable, config.name_buffer_len)? };
        // SAFETY: forwarded caller contract.
        let arity = unsafe { read_arity(&vtable)? };

        Ok(Self {
            name,
            arity,
            vtable,
            _library: library,
        })
    }

    /// Numeric identity.
    #[must_use]
    pub fn id(&self) -> FunctionId {
        self.name.id()
    }

    /// Full identity string.
    #[must_use]
    pub fn name(&self) -> &FunctionName {
        &self.name
    }

    /// Declared counts.
    #[must_use]
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// `true` when evaluation uses the checked entry point.
    #[must_use]
    pub fn has_checked_entry_points(&self) -> bool {
        self.vtable.has_checked_entry_points()
    }

    /// Evaluate at `x` with parameters `a`.
    ///
    /// Lengths are checked here before the library is called.
    ///
    /// # Errors
    ///
    /// [`FunctionError::ArityMismatch`] for wrong lengths and
    /// [`FunctionError::Status`] when the checked entry point fails.
    pub fn evaluate(&self, x: &[f64], a: &[f64]) -> Result<f64, FunctionError> {
        self.arity.check(x.len(), a.len())?;
        let mut y = f64::NAN;

        match self.vtable.get_function_value_checked {
            Some(checked) => {
                // SAFETY: both slices are valid for their lengths and `y` is a
                // local; the contract holds for every resolved entry point.
                let code = unsafe { checked(x.as_ptr(), x.len(), a.as_ptr(), a.len(), &raw mut y) };
                FunctionError::check_return_code(code)?;
            }
            None => {
                // SAFETY: lengths were checked against the declared arity
                // above, so the library reads only inside the slices.
                unsafe { (self.vtable.get_function_value)(x.as_ptr(), a.as_ptr(), &raw mut y) };
            }
        }
        Ok(y)
    }

    /// Evaluate a single-variable function at every point of `xs`.
    ///
    /// # Errors
    ///
    /// [`FunctionError::ArityMismatch`] when the function does not take
    /// exactly one variable or `a` has the wrong length.
    pub fn evaluate_grid(&self, xs: &[f64], a: &[f64]) -> Result<Vec<f64>, FunctionError> {
        self.arity.check(1, a.len())?;
        xs.iter()
            .map(|x| self.evaluate(std::slice::from_ref(x), a))
            .collect()
    }
}

/// # Safety
///
/// The name entry points in `vtable` must follow the plugin contract.
unsafe fn read_name(vtable: &FunctionVTable, capacity: usize) -> NlfResult<FunctionName> {
    let mut buffer = vec![0u8; capacity];
    match vtable.get_function_name_bounded {
        Some(bounded) => {
            // SAFETY: the buffer holds `capacity` writable bytes.
            let code = unsafe { bounded(buffer.as_mut_ptr().cast(), buffer.len()) };
            FunctionError::check_return_code(code)?;
        }
        None => {
            // SAFETY: `capacity >= NAME_BUFFER_LEN`, checked by `validate`.
            unsafe { (vtable.get_function_name)(buffer.as_mut_ptr().cast()) };
        }
    }
    Ok(FunctionName::from_c_bytes(&buffer)?)
}

/// # Safety
///
/// The count entry points in `vtable` must follow the plugin contract.
unsafe fn read_arity(vtable: &FunctionVTable) -> NlfResult<Arity> {
    let mut variables: c_int = -1;
    let mut parameters: c_int = -1;
    // SAFETY: writes one `c_int` to a local.
    unsafe { (vtable.get_num_variables)(&raw mut variables) };
    // SAFETY: as above.
    unsafe { (vtable.get_num_parameters)(&raw mut parameters) };

    let invalid = || NlfError::InvalidArity {
        variables,
        parameters,
    };
    let variables_count = usize::try_from(variables).map_err(|_| invalid())?;
    let parameters_count = usize::try_from(parameters).map_err(|_| invalid())?;
    if variables_count == 0 {
        return Err(invalid());
    }
    Ok(Arity::new(variables_count, parameters_count))
}
