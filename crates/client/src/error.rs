//! Unified error handling.
//!
//! Flows report expected failures (declined dialogs, rejected requests)
//! through their outcome enums; `Error` is reserved for faults the client
//! cannot absorb, such as an unwritable data directory.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Top-level error type for the client library.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The local data directory could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A backend request failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// Result type alias for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
