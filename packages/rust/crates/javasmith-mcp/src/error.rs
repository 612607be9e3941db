//! Failures surfaced to MCP clients as `isError` tool results.

use javasmith_edit::EditError;
use javasmith_io::IoError;
use javasmith_locate::LocateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolFailure {
    #[error(transparent)]
    Locate(#[from] LocateError),

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Io(#[from] IoError),

    /// Locate found nothing for a call that needs an existing source.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The blocking worker panicked or was cancelled.
    #[error("Internal error: {0}")]
    Internal(String),
}
