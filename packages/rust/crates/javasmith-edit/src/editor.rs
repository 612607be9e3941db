//! Core patch engine implementation.
//!
//! Applies ordered old/new edit batches with exact-then-whitespace-tolerant
//! matching, and produces a fenced unified diff. The engine never touches
//! disk; callers persist [`PatchOutcome::disk_content`] once a batch has
//! fully matched.

use javasmith_types::EditOperation;

use crate::diff::{fence_diff, generate_unified_diff};
use crate::error::EditError;
use crate::endings::{LineEndings, normalize_line_endings};
use crate::heuristics::insert_member;
use crate::matcher::replace_first;
use crate::types::{AppliedEdit, PatchOutcome};

/// PatchEngine - fuzzy text patching for source files.
///
/// # Example
///
/// ```rust,ignore
/// use javasmith_edit::PatchEngine;
/// use javasmith_types::EditOperation;
///
/// let outcome = PatchEngine::apply_edits(
///     "class A { int x; }",
///     &[EditOperation::new("int x;", "int x, y;")],
/// )?;
/// assert_eq!(outcome.modified, "class A { int x, y; }");
/// ```
pub struct PatchEngine;

impl PatchEngine {
    /// Reject malformed batches before any I/O.
    ///
    /// # Errors
    /// `EmptyOldText` for the first edit with an empty `old_text`.
    pub fn validate(edits: &[EditOperation]) -> Result<(), EditError> {
        match edits.iter().position(|e| e.old_text.is_empty()) {
            Some(index) => Err(EditError::EmptyOldText { index }),
            None => Ok(()),
        }
    }

    /// Apply `edits` in order to `content`.
    ///
    /// Each edit sees the output of the previous one. The first edit that
    /// matches under neither tier aborts the batch; the partial result is
    /// dropped.
    ///
    /// # Errors
    /// `EmptyOldText` or `EditNotFound`.
    pub fn apply_edits(content: &str, edits: &[EditOperation]) -> Result<PatchOutcome, EditError> {
        Self::validate(edits)?;

        let endings = LineEndings::scan(content);
        let original = normalize_line_endings(content);
        let mut working = original.clone();
        let mut applied = Vec::with_capacity(edits.len());

        for (index, edit) in edits.iter().enumerate() {
            let old = normalize_line_endings(&edit.old_text);
            let new = normalize_line_endings(&edit.new_text);

            let Some(replacement) = replace_first(&working, &old, &new) else {
                tracing::debug!(index, "edit did not match");
                return Err(EditError::EditNotFound {
                    index,
                    old_text: edit.old_text.clone(),
                });
            };

            tracing::debug!(
                index,
                tier = ?replacement.tier,
                line = replacement.line,
                "edit matched"
            );
            applied.push(AppliedEdit {
                index,
                tier: replacement.tier,
                line: replacement.line,
            });
            working = replacement.content;
        }

        Ok(Self::outcome(original, working, applied, endings))
    }

    /// Insert `member` into the body of the type named `class_name`.
    ///
    /// Uses [`crate::ClassDeclarationMatcher`], a line heuristic.
    ///
    /// # Errors
    /// `EmptyMember`, `DeclarationNotFound` or `Pattern`.
    pub fn inject_member(
        content: &str,
        class_name: &str,
        member: &str,
    ) -> Result<PatchOutcome, EditError> {
        let endings = LineEndings::scan(content);
        let original = normalize_line_endings(content);
        let modified = insert_member(&original, class_name, &normalize_line_endings(member))?;
        Ok(Self::outcome(original, modified, Vec::new(), endings))
    }

    fn outcome(
        original: String,
        modified: String,
        edits: Vec<AppliedEdit>,
        endings: LineEndings,
    ) -> PatchOutcome {
        let diff = fence_diff(&generate_unified_diff(&original, &modified));
        PatchOutcome {
            original,
            modified,
            diff,
            edits,
            endings,
        }
    }
}
