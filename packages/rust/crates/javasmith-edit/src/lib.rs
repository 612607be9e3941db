#![allow(clippy::doc_markdown)]

//! javasmith-edit - Fuzzy patch engine for the javasmith source editor
//!
//! Applies ordered old-text/new-text edit batches to source content,
//! tolerating indentation drift, and produces a reviewable diff.
//!
//! # Features
//!
//! - **Two-tier matching**: literal substring first, then a line block
//!   compared with surrounding whitespace trimmed
//! - **Re-indentation**: fuzzy replacements adopt the indentation of the
//!   block they replace
//! - **All-or-nothing**: a batch either matches completely or changes nothing
//! - **Diff Preview**: fenced unified diffs; callers decide whether to persist
//! - **Line endings**: untouched lines keep their original terminators
//! - **Member injection**: insert a member into a named type via a line heuristic
//!
//! # Architecture
//!
//! ```text
//! javasmith-edit/src/
//! ├── lib.rs        # Re-exports (this file)
//! ├── error.rs      # EditError enum (thiserror)
//! ├── types.rs      # PatchOutcome, AppliedEdit, MatchTier
//! ├── endings.rs    # Line-ending normalization and per-line restore
//! ├── matcher.rs    # Exact / whitespace-tolerant matching, re-indent
//! ├── diff.rs       # Unified diff + collision-free fence
//! ├── heuristics.rs # ClassDeclarationMatcher, member insertion
//! └── editor.rs     # PatchEngine implementation
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use javasmith_edit::PatchEngine;
//! use javasmith_types::EditOperation;
//!
//! let outcome = PatchEngine::apply_edits(
//!     "  void f() {\n    return 1;\n  }",
//!     &[EditOperation::new("void f() {\nreturn 1;\n}", "void f() {\nreturn 2;\n}")],
//! )?;
//! println!("{}", outcome.diff);
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod diff;
mod editor;
mod endings;
mod error;
mod heuristics;
mod matcher;
mod types;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use editor::PatchEngine;
pub use error::EditError;
pub use heuristics::{ClassDeclarationMatcher, DeclarationSite};
pub use endings::{LineEnding, LineEndings, normalize_line_endings};
pub use types::{AppliedEdit, MatchTier, PatchOutcome};

// Re-export diff utilities for external use
pub use diff::{fence_diff, generate_unified_diff, longest_backtick_run};
