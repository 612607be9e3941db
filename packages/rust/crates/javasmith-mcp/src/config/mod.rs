//! Config namespace: settings files and project path resolution.

mod paths;
mod settings;

pub use paths::{expand_home, resolve_log_file, resolve_project_root};
pub use settings::{
    ConfigError, LayoutSettings, LimitSettings, Limits, ServerSettings, load_settings,
    load_settings_from_paths, settings_paths,
};
