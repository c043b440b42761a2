//! Host-side loading of native curve-function plugins.
//!
//! A curve-function plugin is a shared library exporting the entry points
//! described in [`nlf_abi`]. This crate opens such libraries, reads their
//! identity and arity once, and evaluates them through a safe API:
//!
//! - [`NativeFunctionLoader`] opens one library and resolves its symbols
//! - [`NativeFunction`] wraps the resolved entry points
//! - [`FunctionRegistry`] keeps loaded functions by `f<N>` id and rejects
//!   duplicate ids
//!
//! # Security Considerations
//!
//! Native libraries run with full process privileges and are NOT sandboxed.
//! Only load libraries from trusted locations.
//!
//! # Checked entry points
//!
//! Libraries built with `nlf_abi::export_curve_function!` also export
//! `GetFunctionNameBounded` and `GetFunctionValueChecked`. The loader prefers
//! them by default; see [`LoaderConfig`].
//!
//! # Example
//!
//! ```rust,no_run
//! use nlf_native_loader::{FunctionRegistry, LoaderConfig};
//! use std::path::Path;
//!
//! let registry = FunctionRegistry::new(LoaderConfig::default())?;
//! for id in registry.load_dir(Path::new("plugins"))? {
//!     if let Some(function) = registry.get(id) {
//!         println!("{}: {}", function.name(), function.arity());
//!     }
//! }
//! # Ok::<(), nlf_native_loader::NlfError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod error;
pub mod function;
pub mod loader;
pub mod prelude;
pub mod registry;
pub mod vtable;

pub use config::LoaderConfig;
pub use error::{NlfError, NlfResult};
pub use function::NativeFunction;
pub use loader::NativeFunctionLoader;
pub use registry::FunctionRegistry;
pub use vtable::FunctionVTable;
