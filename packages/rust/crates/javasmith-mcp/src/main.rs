//! javasmith-mcp: serve the source tools on stdin/stdout.
//!
//! Logging goes to stderr; set `RUST_LOG=javasmith_mcp=debug` for detail.

mod cli;

use anyhow::Context;
use clap::Parser;
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use javasmith_locate::SourceLocator;
use javasmith_mcp::{JavasmithServer, load_settings, resolve_log_file, resolve_project_root};

use crate::cli::Cli;

const DEFAULT_FILTER: &str =
    "javasmith_mcp=info,javasmith_locate=info,javasmith_edit=info,javasmith_io=info";
const VERBOSE_FILTER: &str =
    "javasmith_mcp=debug,javasmith_locate=debug,javasmith_edit=debug,javasmith_io=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            VERBOSE_FILTER
        } else {
            DEFAULT_FILTER
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();

    let project_root =
        resolve_project_root(&cli.project_root).context("Invalid --project-root")?;
    let settings = load_settings(&project_root, cli.conf.as_deref());
    settings.validate().context("Invalid settings")?;
    let limits = settings.limits();

    let locator = SourceLocator::new(project_root.clone(), settings.layout_convention())
        .with_max_file_size(limits.max_file_size);
    let log_file = cli
        .log_file
        .as_deref()
        .map(|raw| resolve_log_file(&project_root, raw));

    tracing::info!(
        project_root = %project_root.display(),
        log_file = ?log_file,
        "starting javasmith-mcp on stdio"
    );

    let server = JavasmithServer::new(locator, log_file, limits);
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("Failed to start MCP service")?;
    service.waiting().await.context("MCP service stopped")?;
    Ok(())
}
