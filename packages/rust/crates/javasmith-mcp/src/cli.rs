use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "javasmith-mcp")]
#[command(
    about = "MCP server over stdio: locate, patch and create sources in a package-structured project."
)]
pub(crate) struct Cli {
    /// Project root; `~` is expanded.
    #[arg(long, value_name = "DIR")]
    pub(crate) project_root: PathBuf,

    /// Run log read by `tail_log`. Relative paths are anchored at the project root.
    #[arg(long, value_name = "PATH")]
    pub(crate) log_file: Option<PathBuf>,

    /// Override the user config directory (reads `<conf>/javasmith/settings.yaml`).
    #[arg(long, value_name = "DIR")]
    pub(crate) conf: Option<PathBuf>,

    /// Debug logging on stderr (ignored when `RUST_LOG` is set).
    #[arg(long, short)]
    pub(crate) verbose: bool,
}
