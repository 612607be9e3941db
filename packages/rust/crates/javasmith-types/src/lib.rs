//! javasmith-types - Shared data contracts for the javasmith source editor
//!
//! The locator, the patch engine and the MCP server all speak in these types.
//! Every type derives `schemars::JsonSchema` so the server can hand the same
//! definitions to MCP clients as tool parameter and response schemas.
//!
//! Wire names are camelCase (`packagePath`, `relativePath`, `oldText`, ...).

#![allow(clippy::doc_markdown)]

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single package segment: lowercase letter followed by lowercase letters, digits or `_`.
static PACKAGE_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9_]*$")
        .unwrap_or_else(|err| panic!("invalid PACKAGE_SEGMENT regex: {err}"))
});

/// Validation failures for request-scoped contracts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// Identifier name was empty or whitespace.
    #[error("Validation error: source name must not be empty")]
    EmptyName,

    /// Identifier name is not a bare file stem.
    #[error("Validation error: invalid source name '{0}' (expected a bare identifier without separators or extension)")]
    InvalidName(String),

    /// A dotted package segment does not match `[a-z][a-z0-9_]*`.
    #[error("Validation error: invalid package segment '{segment}' in '{package}'")]
    InvalidPackageSegment {
        /// The offending segment
        segment: String,
        /// The full package path as supplied
        package: String,
    },
}

/// Which convention subtree a source lives in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Production sources.
    Main,
    /// Test sources.
    Test,
    /// No classification given; resolved against the shared fallback root.
    #[default]
    Unspecified,
}

/// Logical address of a source file: class name, classification and package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceIdentifier {
    /// Base name without extension (e.g. `OrderService`).
    pub name: String,
    /// Convention subtree; defaults to `unspecified`.
    #[serde(default)]
    pub classification: Classification,
    /// Dotted package path (e.g. `com.acme.orders`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_path: Option<String>,
}

impl SourceIdentifier {
    /// Identifier with no classification and no package.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classification: Classification::Unspecified,
            package_path: None,
        }
    }

    /// Set the classification.
    #[must_use]
    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = classification;
        self
    }

    /// Set the dotted package path.
    #[must_use]
    pub fn with_package(mut self, package_path: impl Into<String>) -> Self {
        self.package_path = Some(package_path.into());
        self
    }

    /// Package path with blank values treated as absent.
    #[must_use]
    pub fn package(&self) -> Option<&str> {
        self.package_path
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Check the name and every package segment.
    ///
    /// # Errors
    /// Returns the first [`ContractError`] encountered.
    pub fn validate(&self) -> Result<(), ContractError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContractError::EmptyName);
        }
        if name != self.name || name.contains(['/', '\\', '.']) || name.chars().any(char::is_whitespace) {
            return Err(ContractError::InvalidName(self.name.clone()));
        }
        if let Some(package) = self.package() {
            package_segments(package)?;
        }
        Ok(())
    }
}

/// Split a dotted package path into validated segments.
///
/// # Errors
/// Returns [`ContractError::InvalidPackageSegment`] for the first bad segment.
pub fn package_segments(package: &str) -> Result<Vec<&str>, ContractError> {
    package
        .split('.')
        .map(|segment| {
            if PACKAGE_SEGMENT.is_match(segment) {
                Ok(segment)
            } else {
                Err(ContractError::InvalidPackageSegment {
                    segment: segment.to_string(),
                    package: package.to_string(),
                })
            }
        })
        .collect()
}

/// Outcome of a locate call.
///
/// `found` is true exactly when both `relative_path` and `content` are set;
/// the constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocateResult {
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    relative_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

impl LocateResult {
    /// A hit: `relative_path` uses `/` separators and is relative to the project root.
    pub fn found(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            found: true,
            relative_path: Some(relative_path.into()),
            content: Some(content.into()),
        }
    }

    /// A miss.
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            found: false,
            relative_path: None,
            content: None,
        }
    }

    /// Whether the file was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.found
    }

    /// Project-relative path of the hit.
    #[must_use]
    pub fn relative_path(&self) -> Option<&str> {
        self.relative_path.as_deref()
    }

    /// Full file content of the hit.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Take `(relative_path, content)` out of a hit.
    #[must_use]
    pub fn into_hit(self) -> Option<(String, String)> {
        match (self.relative_path, self.content) {
            (Some(path), Some(content)) => Some((path, content)),
            _ => None,
        }
    }
}

/// One old-text/new-text replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditOperation {
    /// Text to find. Must not be empty.
    pub old_text: String,
    /// Replacement text. Empty deletes the match.
    #[serde(default)]
    pub new_text: String,
}

impl EditOperation {
    /// Build an edit from a pair of strings.
    pub fn new(old_text: impl Into<String>, new_text: impl Into<String>) -> Self {
        Self {
            old_text: old_text.into(),
            new_text: new_text.into(),
        }
    }
}

/// Result of applying an edit batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PatchResult {
    /// Fenced unified diff between the original and the patched content.
    pub diff: String,
    /// `false` for dry runs; the file on disk was not touched.
    pub applied: bool,
}
