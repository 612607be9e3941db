//! Tool parameter and response shapes.
//!
//! Field names are camelCase on the wire; the identifier fields are
//! flattened so every source tool takes `name`, `classification` and
//! `packagePath` at the top level.

use javasmith_types::{EditOperation, SourceIdentifier};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocateRequest {
    #[serde(flatten)]
    pub source: SourceIdentifier,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatchRequest {
    #[serde(flatten)]
    pub source: SourceIdentifier,
    /// Ordered replacements; each sees the output of the previous one.
    pub edits: Vec<EditOperation>,
    /// Compute the diff without writing the file.
    #[serde(default)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberRequest {
    #[serde(flatten)]
    pub source: SourceIdentifier,
    /// Member text (field, method, nested type) to append to the type body.
    pub member: String,
    #[serde(default)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSourceRequest {
    #[serde(flatten)]
    pub source: SourceIdentifier,
    /// File body after the package line. Defaults to an empty public class.
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct TailLogRequest {
    /// Number of trailing lines (default 100, capped at 2000).
    #[serde(default)]
    pub lines: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedSource {
    pub relative_path: String,
}
