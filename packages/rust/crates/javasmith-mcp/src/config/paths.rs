//! Project-root and log-file path handling done before the core sees a path.

use std::path::{Path, PathBuf};

use super::settings::ConfigError;

/// Replace a leading `~` with the user's home directory.
#[must_use]
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// Expand, absolutize and check the project root.
///
/// # Errors
/// `ConfigError::Invalid` when the path does not name an existing directory.
pub fn resolve_project_root(raw: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_home(raw);
    let root = expanded.canonicalize().map_err(|error| {
        ConfigError::Invalid(format!(
            "project root {} is not accessible: {error}",
            expanded.display()
        ))
    })?;
    if !root.is_dir() {
        return Err(ConfigError::Invalid(format!(
            "project root {} is not a directory",
            root.display()
        )));
    }
    Ok(root)
}

/// Expand `~` and anchor relative log paths at the project root.
///
/// The file does not have to exist yet.
#[must_use]
pub fn resolve_log_file(project_root: &Path, raw: &Path) -> PathBuf {
    let expanded = expand_home(raw);
    let path = if expanded.is_absolute() {
        expanded
    } else {
        project_root.join(expanded)
    };
    if !path.exists() {
        tracing::warn!(path = %path.display(), "log file does not exist yet");
    }
    path
}
