//! Convenience re-exports.

pub use crate::config::LoaderConfig;
pub use crate::error::{NlfError, NlfResult};
pub use crate::function::NativeFunction;
pub use crate::loader::NativeFunctionLoader;
pub use crate::registry::FunctionRegistry;
pub use crate::vtable::FunctionVTable;
