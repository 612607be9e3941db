//! Runtime settings loader for javasmith-mcp.
//!
//! Loads and merges:
//! - Project settings: `<project_root>/.javasmith/settings.yaml`
//! - User overrides:   `<config_home>/javasmith/settings.yaml`
//!
//! Merge precedence is user over project. `config_home` is `--conf`, then
//! `PRJ_CONFIG_HOME`, then the platform config directory.

use std::path::{Path, PathBuf};

use javasmith_locate::{LayoutConvention, PackagePolicy};
use serde::Deserialize;
use thiserror::Error;

const PROJECT_SETTINGS_RELATIVE_PATH: &str = ".javasmith/settings.yaml";
const USER_SETTINGS_RELATIVE_PATH: &str = "javasmith/settings.yaml";

/// Settings that cannot be used to start the server.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value is present but unusable.
    #[error("Configuration error: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerSettings {
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default)]
    pub limits: LimitSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayoutSettings {
    pub main_root: Option<String>,
    pub test_root: Option<String>,
    pub shared_root: Option<String>,
    pub extension: Option<String>,
    pub package_policy: Option<PackagePolicy>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitSettings {
    pub max_file_size: Option<u64>,
    pub tail_default_lines: Option<usize>,
    pub tail_max_lines: Option<usize>,
    pub tail_max_bytes: Option<u64>,
}

/// Effective limits after defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest source file the server will read (bytes).
    pub max_file_size: u64,
    /// Lines returned by `tail_log` when the caller does not say.
    pub tail_default_lines: usize,
    /// Upper bound on lines per `tail_log` call.
    pub tail_max_lines: usize,
    /// Bytes read from the end of the log per `tail_log` call.
    pub tail_max_bytes: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_size: 1024 * 1024,
            tail_default_lines: 100,
            tail_max_lines: 2000,
            tail_max_bytes: 256 * 1024,
        }
    }
}

impl ServerSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            layout: self.layout.merge(overlay.layout),
            limits: self.limits.merge(overlay.limits),
        }
    }

    /// Layout convention with unset keys taken from the Maven defaults.
    #[must_use]
    pub fn layout_convention(&self) -> LayoutConvention {
        let defaults = LayoutConvention::default();
        let layout = self.layout.clone();
        LayoutConvention {
            main_root: layout.main_root.unwrap_or(defaults.main_root),
            test_root: layout.test_root.unwrap_or(defaults.test_root),
            shared_root: layout.shared_root.unwrap_or(defaults.shared_root),
            extension: layout.extension.unwrap_or(defaults.extension),
            package_policy: layout.package_policy.unwrap_or(defaults.package_policy),
        }
    }

    /// Limits with unset keys defaulted.
    #[must_use]
    pub fn limits(&self) -> Limits {
        let defaults = Limits::default();
        Limits {
            max_file_size: self.limits.max_file_size.unwrap_or(defaults.max_file_size),
            tail_default_lines: self
                .limits
                .tail_default_lines
                .unwrap_or(defaults.tail_default_lines),
            tail_max_lines: self.limits.tail_max_lines.unwrap_or(defaults.tail_max_lines),
            tail_max_bytes: self.limits.tail_max_bytes.unwrap_or(defaults.tail_max_bytes),
        }
    }

    /// Reject values the core cannot work with.
    ///
    /// # Errors
    /// `ConfigError::Invalid` naming the first bad key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let layout = self.layout_convention();
        for (key, value) in [
            ("layout.main_root", &layout.main_root),
            ("layout.test_root", &layout.test_root),
            ("layout.shared_root", &layout.shared_root),
        ] {
            if value.trim().is_empty() || Path::new(value).is_absolute() || value.contains("..") {
                return Err(ConfigError::Invalid(format!(
                    "{key} must be a non-empty relative path, got '{value}'"
                )));
            }
        }
        let extension = layout.extension.trim_start_matches('.');
        if extension.is_empty() || extension.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "layout.extension is not a file extension: '{}'",
                layout.extension
            )));
        }

        let limits = self.limits();
        if limits.max_file_size == 0 || limits.tail_max_bytes == 0 || limits.tail_max_lines == 0 {
            return Err(ConfigError::Invalid(
                "limits must be greater than zero".to_string(),
            ));
        }
        if limits.tail_default_lines > limits.tail_max_lines {
            return Err(ConfigError::Invalid(format!(
                "limits.tail_default_lines ({}) exceeds limits.tail_max_lines ({})",
                limits.tail_default_lines, limits.tail_max_lines
            )));
        }
        Ok(())
    }
}

impl LayoutSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            main_root: overlay.main_root.or(self.main_root),
            test_root: overlay.test_root.or(self.test_root),
            shared_root: overlay.shared_root.or(self.shared_root),
            extension: overlay.extension.or(self.extension),
            package_policy: overlay.package_policy.or(self.package_policy),
        }
    }
}

impl LimitSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            max_file_size: overlay.max_file_size.or(self.max_file_size),
            tail_default_lines: overlay.tail_default_lines.or(self.tail_default_lines),
            tail_max_lines: overlay.tail_max_lines.or(self.tail_max_lines),
            tail_max_bytes: overlay.tail_max_bytes.or(self.tail_max_bytes),
        }
    }
}

/// Load merged settings (user overrides project).
#[must_use]
pub fn load_settings(project_root: &Path, conf_override: Option<&Path>) -> ServerSettings {
    let (project_path, user_path) = settings_paths(project_root, conf_override);
    load_settings_from_paths(&project_path, user_path.as_deref())
}

#[doc(hidden)]
#[must_use]
pub fn settings_paths(project_root: &Path, conf_override: Option<&Path>) -> (PathBuf, Option<PathBuf>) {
    let project_path = project_root.join(PROJECT_SETTINGS_RELATIVE_PATH);
    let user_path =
        resolve_config_home(project_root, conf_override).map(|home| home.join(USER_SETTINGS_RELATIVE_PATH));
    (project_path, user_path)
}

#[doc(hidden)]
#[must_use]
pub fn load_settings_from_paths(project: &Path, user: Option<&Path>) -> ServerSettings {
    let base = load_one(project);
    match user {
        Some(user) => base.merge(load_one(user)),
        None => base,
    }
}

fn load_one(path: &Path) -> ServerSettings {
    if !path.exists() {
        return ServerSettings::default();
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to read settings file; ignoring"
            );
            return ServerSettings::default();
        }
    };
    match serde_yaml::from_str::<ServerSettings>(&raw) {
        Ok(value) => {
            tracing::debug!(path = %path.display(), "loaded settings");
            value
        }
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to parse settings yaml; ignoring file"
            );
            ServerSettings::default()
        }
    }
}

fn resolve_config_home(project_root: &Path, conf_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = conf_override {
        return Some(absolutize(project_root, super::expand_home(path)));
    }

    std::env::var("PRJ_CONFIG_HOME")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(|v| absolutize(project_root, PathBuf::from(v)))
        .or_else(dirs::config_dir)
}

fn absolutize(project_root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        project_root.join(path)
    }
}
