//! Error types for locating sources.

use javasmith_io::IoError;
use javasmith_types::ContractError;
use thiserror::Error;

/// Error types for locator operations.
///
/// Unreadable subdirectories during a search are not errors; they are logged
/// and skipped.
#[derive(Error, Debug)]
pub enum LocateError {
    /// Malformed identifier or package path.
    #[error(transparent)]
    Validation(#[from] ContractError),

    /// The identifier combination is not allowed by the active layout policy.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Reading or writing the matched file failed.
    #[error(transparent)]
    Io(#[from] IoError),
}
