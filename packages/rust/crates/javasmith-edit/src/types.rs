//! Core types for patching.
//!
//! Defines the data structures used throughout the editing pipeline.

use javasmith_types::PatchResult;
use serde::Serialize;

use crate::endings::LineEndings;

/// Which matching tier satisfied an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Literal substring match.
    Exact,
    /// Line-block match ignoring leading/trailing whitespace.
    WhitespaceTolerant,
}

/// Where and how one edit of a batch landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedEdit {
    /// Zero-based position in the batch.
    pub index: usize,
    /// Tier that matched.
    pub tier: MatchTier,
    /// Line (1-indexed) where the match started, in the content the edit saw.
    pub line: usize,
}

/// In-memory result of a successful batch, before anything touches disk.
#[derive(Debug, Clone)]
pub struct PatchOutcome {
    /// Original content, line endings normalized to `\n`.
    pub original: String,
    /// Patched content, line endings normalized to `\n`.
    pub modified: String,
    /// Fenced unified diff between `original` and `modified`.
    pub diff: String,
    /// Per-edit placement, in batch order.
    pub edits: Vec<AppliedEdit>,
    /// Line terminators of the content as it was read.
    pub endings: LineEndings,
}

impl PatchOutcome {
    /// Patched content with each untouched line's original terminator.
    #[must_use]
    pub fn disk_content(&self) -> String {
        self.endings.restore(&self.original, &self.modified)
    }

    /// Wire result for this outcome.
    #[must_use]
    pub fn to_result(&self, applied: bool) -> PatchResult {
        PatchResult {
            diff: self.diff.clone(),
            applied,
        }
    }
}
