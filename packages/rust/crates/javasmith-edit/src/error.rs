//! Error types for patch operations.
//!
//! Library crates use `thiserror` for explicit error enums.

use thiserror::Error;

/// Error types for edit operations.
///
/// Each variant represents a specific failure mode in the editing pipeline.
#[derive(Error, Debug)]
pub enum EditError {
    /// An edit in the batch has an empty `oldText`.
    #[error("Validation error: edit #{} has an empty oldText", .index + 1)]
    EmptyOldText {
        /// Zero-based position in the batch.
        index: usize,
    },

    /// Neither the exact nor the whitespace-tolerant match found `old_text`.
    #[error("Edit not found: edit #{} matched neither exactly nor ignoring indentation:\n{old_text}", .index + 1)]
    EditNotFound {
        /// Zero-based position in the batch.
        index: usize,
        /// The unmatched text, as supplied.
        old_text: String,
    },

    /// Member text for injection was blank.
    #[error("Validation error: member text must not be empty")]
    EmptyMember,

    /// No line looked like a declaration of the requested type.
    #[error("Declaration not found: no class, interface, enum or record named '{0}'")]
    DeclarationNotFound(String),

    /// Invalid declaration pattern.
    #[error("Pattern error: {0}")]
    Pattern(String),
}
