//! Error types for loading curve-function libraries.

use std::path::PathBuf;

use nlf_abi::{FunctionError, FunctionId, NameError};
use thiserror::Error;

/// Result alias for loader operations.
pub type NlfResult<T> = Result<T, NlfError>;

/// Error type for native curve-function operations.
#[derive(Error, Debug)]
pub enum NlfError {
    /// The shared library could not be opened.
    #[error("failed to load library {}: {reason}", path.display())]
    LibraryLoadFailed {
        /// Path that was opened.
        path: PathBuf,
        /// Loader message.
        reason: String,
    },

    /// A required entry point is not exported.
    #[error("missing symbol `{symbol}`: {reason}")]
    MissingSymbol {
        /// Symbol name.
        symbol: &'static str,
        /// Loader message.
        reason: String,
    },

    /// The library reported an identity outside the `f<N>:` grammar.
    #[error("invalid function name: {0}")]
    InvalidName(#[from] NameError),

    /// The library reported unusable counts.
    #[error("invalid arity: {variables} variables, {parameters} parameters")]
    InvalidArity {
        /// Reported variable count.
        variables: i32,
        /// Reported parameter count.
        parameters: i32,
    },

    /// A contract check failed at the boundary.
    #[error(transparent)]
    Function(#[from] FunctionError),

    /// Another library already registered this id.
    #[error("function id {id} is already registered by \"{existing}\"")]
    DuplicateFunctionId {
        /// The contested id.
        id: FunctionId,
        /// Name of the registered function.
        existing: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON configuration error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
