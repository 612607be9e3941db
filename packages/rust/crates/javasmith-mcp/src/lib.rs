//! javasmith MCP server: structural source editing over stdio.
//!
//! - **Locate**: class name + classification + package -> file under the layout convention.
//! - **Patch**: ordered old/new edits, exact then indentation-tolerant, all-or-nothing.
//! - **Create / add member**: scaffold a source, append a member to a type body.
//! - **Tail**: last lines of the configured run log.

#![allow(missing_docs)]

mod config;
mod error;
mod requests;
mod server;

pub use config::{
    ConfigError, LayoutSettings, LimitSettings, Limits, ServerSettings, expand_home,
    load_settings, load_settings_from_paths, resolve_log_file, resolve_project_root,
    settings_paths,
};
pub use error::ToolFailure;
pub use requests::{
    AddMemberRequest, CreateSourceRequest, CreatedSource, LocateRequest, PatchRequest,
    TailLogRequest,
};
pub use server::JavasmithServer;
