//! MCP service exposing the locator and patch engine as tools.
//!
//! Every tool runs its filesystem work on the blocking pool. Domain failures
//! become `isError` tool results carrying the error's display text; only
//! malformed parameters are protocol errors.

use std::path::PathBuf;
use std::sync::Arc;

use javasmith_edit::{PatchEngine, PatchOutcome};
use javasmith_io::tail_lines_async;
use javasmith_locate::{SourceLocator, skeleton_source};
use javasmith_types::{PatchResult, SourceIdentifier};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use crate::config::Limits;
use crate::error::ToolFailure;
use crate::requests::{
    AddMemberRequest, CreateSourceRequest, CreatedSource, LocateRequest, PatchRequest,
    TailLogRequest,
};

const INSTRUCTIONS: &str = "Structural source editor for a package-structured project. \
Use 'locate_source' to read a source by class name, 'patch_source' to apply old/new text \
edits (dryRun previews the diff), 'add_member' to append a member to a type body, \
'create_source' to scaffold a new file and 'tail_log' to read the end of the run log.";

#[derive(Clone)]
pub struct JavasmithServer {
    locator: Arc<SourceLocator>,
    log_file: Option<Arc<PathBuf>>,
    limits: Limits,
    tool_router: ToolRouter<Self>,
}

impl JavasmithServer {
    #[must_use]
    pub fn new(locator: SourceLocator, log_file: Option<PathBuf>, limits: Limits) -> Self {
        Self {
            locator: Arc::new(locator),
            log_file: log_file.map(Arc::new),
            limits,
            tool_router: Self::tool_router(),
        }
    }

    async fn blocking<T, F>(&self, job: F) -> Result<T, ToolFailure>
    where
        T: Send + 'static,
        F: FnOnce(&SourceLocator) -> Result<T, ToolFailure> + Send + 'static,
    {
        let locator = Arc::clone(&self.locator);
        tokio::task::spawn_blocking(move || job(&locator))
            .await
            .map_err(|error| ToolFailure::Internal(error.to_string()))?
    }

    fn tail_line_count(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.limits.tail_default_lines)
            .min(self.limits.tail_max_lines)
    }
}

#[tool_router]
impl JavasmithServer {
    #[tool(
        description = "Find a source file by class name. classification is 'main', 'test' or omitted; packagePath is dotted (com.acme.orders). Returns {found, relativePath, content}; a miss is {found:false}, not an error."
    )]
    pub async fn locate_source(
        &self,
        Parameters(request): Parameters<LocateRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self
            .blocking(move |locator| Ok(locator.locate(&request.source)?))
            .await;
        Ok(respond(result))
    }

    #[tool(
        description = "Apply ordered {oldText, newText} edits to a located source. Each oldText is matched exactly first, then ignoring indentation. All edits must match or nothing is written. Returns a fenced unified diff and whether it was applied (false for dryRun)."
    )]
    pub async fn patch_source(
        &self,
        Parameters(request): Parameters<PatchRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let PatchRequest {
            source,
            edits,
            dry_run,
        } = request;
        let result = self
            .blocking(move |locator| {
                if edits.is_empty() {
                    return Err(ToolFailure::Validation("edits must not be empty".to_string()));
                }
                PatchEngine::validate(&edits)?;
                let (relative_path, content) = locate_existing(locator, &source)?;
                let outcome = PatchEngine::apply_edits(&content, &edits)?;
                finish(locator, &relative_path, &outcome, dry_run)
            })
            .await;
        Ok(respond(result))
    }

    #[tool(
        description = "Append a member (field, method or nested type) to the body of the type named by 'name' in its located source. Indentation follows the declaration. Returns the same diff result as patch_source."
    )]
    pub async fn add_member(
        &self,
        Parameters(request): Parameters<AddMemberRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let AddMemberRequest {
            source,
            member,
            dry_run,
        } = request;
        let result = self
            .blocking(move |locator| {
                let (relative_path, content) = locate_existing(locator, &source)?;
                let outcome = PatchEngine::inject_member(&content, &source.name, &member)?;
                finish(locator, &relative_path, &outcome, dry_run)
            })
            .await;
        Ok(respond(result))
    }

    #[tool(
        description = "Create a new source file under the layout convention. Writes a package line when packagePath is given and an empty public class when body is omitted. Fails if the file exists. Returns {relativePath}."
    )]
    pub async fn create_source(
        &self,
        Parameters(request): Parameters<CreateSourceRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self
            .blocking(move |locator| {
                let content = skeleton_source(&request.source, request.body.as_deref());
                let relative_path = locator.create(&request.source, &content)?;
                Ok(CreatedSource { relative_path })
            })
            .await;
        Ok(respond(result))
    }

    #[tool(
        description = "Return the last lines of the configured run log (default 100, at most 2000)."
    )]
    pub async fn tail_log(
        &self,
        Parameters(request): Parameters<TailLogRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let Some(log_file) = self.log_file.as_deref() else {
            return Ok(failure(&ToolFailure::Configuration(
                "no log file configured; start the server with --log-file".to_string(),
            )));
        };
        let lines = self.tail_line_count(request.lines);
        match tail_lines_async(log_file, lines, self.limits.tail_max_bytes).await {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(error) => Ok(failure(&ToolFailure::from(error))),
        }
    }
}

#[tool_handler]
impl ServerHandler for JavasmithServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

fn locate_existing(
    locator: &SourceLocator,
    source: &SourceIdentifier,
) -> Result<(String, String), ToolFailure> {
    locator.locate(source)?.into_hit().ok_or_else(|| {
        ToolFailure::NotFound(format!("no source named '{}' in the project", source.name))
    })
}

fn finish(
    locator: &SourceLocator,
    relative_path: &str,
    outcome: &PatchOutcome,
    dry_run: bool,
) -> Result<PatchResult, ToolFailure> {
    if dry_run {
        tracing::debug!(path = relative_path, "dry run; not persisting");
        return Ok(outcome.to_result(false));
    }
    locator.persist(relative_path, &outcome.disk_content())?;
    Ok(outcome.to_result(true))
}

fn respond<T: Serialize>(result: Result<T, ToolFailure>) -> CallToolResult {
    match result.and_then(|value| {
        serde_json::to_string_pretty(&value)
            .map_err(|error| ToolFailure::Internal(error.to_string()))
    }) {
        Ok(json) => CallToolResult::success(vec![Content::text(json)]),
        Err(error) => failure(&error),
    }
}

fn failure(error: &ToolFailure) -> CallToolResult {
    tracing::warn!(error = %error, "tool call failed");
    CallToolResult::error(vec![Content::text(error.to_string())])
}
