//! Identifier-to-file resolution.
//!
//! `resolve_root` turns classification + package into a directory; `find`
//! walks that directory depth-first (pre-order) and returns the first file
//! named `<name>.<extension>`.
//!
//! Entries are visited in file-name order within each directory. When the
//! same file name exists in several branches, the lexicographically first
//! branch wins; this is deterministic but still a guess about which one the
//! caller meant.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use javasmith_io::{create_text_new, read_text_safe, write_text_existing};
use javasmith_types::{Classification, LocateResult, SourceIdentifier, package_segments};
use walkdir::WalkDir;

use crate::convention::{LayoutConvention, PackagePolicy};
use crate::error::LocateError;

/// Default read limit for matched sources (1MB).
const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Convention-based source locator bound to one project root.
#[derive(Debug, Clone)]
pub struct SourceLocator {
    project_root: PathBuf,
    convention: LayoutConvention,
    max_file_size: u64,
}

impl SourceLocator {
    /// Create a locator. `project_root` must be an existing, absolute directory.
    pub fn new(project_root: impl Into<PathBuf>, convention: LayoutConvention) -> Self {
        Self {
            project_root: project_root.into(),
            convention,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// Override the read limit for matched files.
    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    /// Project root all relative paths are anchored to.
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Active layout convention.
    #[must_use]
    pub fn convention(&self) -> &LayoutConvention {
        &self.convention
    }

    /// Directory in which sources for `classification`/`package` live.
    ///
    /// # Errors
    /// `Validation` for a malformed package segment; `Configuration` when a
    /// package is given without classification under [`PackagePolicy::Reject`].
    pub fn resolve_root(
        &self,
        classification: Classification,
        package: Option<&str>,
    ) -> Result<PathBuf, LocateError> {
        let package = package.map(str::trim).filter(|p| !p.is_empty());
        let segments = match package {
            Some(p) => package_segments(p)?,
            None => Vec::new(),
        };

        let base = match classification {
            Classification::Main => &self.convention.main_root,
            Classification::Test => &self.convention.test_root,
            Classification::Unspecified => {
                if let Some(p) = package
                    && self.convention.package_policy == PackagePolicy::Reject
                {
                    return Err(LocateError::Configuration(format!(
                        "package '{p}' requires a classification (main or test)"
                    )));
                }
                &self.convention.shared_root
            }
        };

        let mut dir = self.project_root.clone();
        dir.extend(base.split('/').filter(|part| !part.is_empty()));
        dir.extend(segments);
        Ok(dir)
    }

    /// Search `dir` for `<name>.<extension>`.
    ///
    /// A missing `dir` is a miss, not an error. Subdirectories that cannot be
    /// read are logged and skipped.
    ///
    /// # Errors
    /// `Io` when the matched file itself cannot be read.
    pub fn find(&self, dir: &Path, name: &str) -> Result<LocateResult, LocateError> {
        if !dir.is_dir() {
            tracing::debug!(dir = %dir.display(), "search root does not exist");
            return Ok(LocateResult::not_found());
        }

        let expected = self.convention.file_name(name);
        let expected = OsStr::new(&expected);

        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    tracing::warn!(
                        path = ?error.path(),
                        error = %error,
                        "skipping unreadable directory entry"
                    );
                    continue;
                }
            };

            if !entry.file_type().is_file() || entry.file_name() != expected {
                continue;
            }

            let content = read_text_safe(entry.path(), self.max_file_size)?;
            let relative = relative_slash_path(&self.project_root, entry.path());
            tracing::debug!(path = %relative, "located source");
            return Ok(LocateResult::found(relative, content));
        }

        Ok(LocateResult::not_found())
    }

    /// Resolve and search in one step.
    ///
    /// # Errors
    /// See [`SourceLocator::resolve_root`] and [`SourceLocator::find`].
    pub fn locate(&self, identifier: &SourceIdentifier) -> Result<LocateResult, LocateError> {
        identifier.validate()?;
        let dir = self.resolve_root(identifier.classification, identifier.package())?;
        self.find(&dir, &identifier.name)
    }

    /// Absolute path for a project-relative, `/`-separated path.
    #[must_use]
    pub fn absolute(&self, relative_path: &str) -> PathBuf {
        let mut path = self.project_root.clone();
        path.extend(relative_path.split('/').filter(|part| !part.is_empty()));
        path
    }

    /// Write `content` back to an existing source.
    ///
    /// # Errors
    /// `Io(NotFound)` if the file disappeared since it was located.
    pub fn persist(&self, relative_path: &str, content: &str) -> Result<(), LocateError> {
        write_text_existing(self.absolute(relative_path), content)?;
        tracing::info!(path = relative_path, "persisted source");
        Ok(())
    }

    /// Create a new source for `identifier` and return its relative path.
    ///
    /// # Errors
    /// `Io(AlreadyExists)` when the file is already there.
    pub fn create(
        &self,
        identifier: &SourceIdentifier,
        content: &str,
    ) -> Result<String, LocateError> {
        identifier.validate()?;
        let dir = self.resolve_root(identifier.classification, identifier.package())?;
        let path = dir.join(self.convention.file_name(&identifier.name));
        create_text_new(&path, content)?;

        let relative = relative_slash_path(&self.project_root, &path);
        tracing::info!(path = %relative, "created source");
        Ok(relative)
    }
}

/// `path` relative to `root`, joined with `/` regardless of platform.
///
/// Paths outside `root` are returned whole.
#[must_use]
pub fn relative_slash_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn locator(root: &Path) -> SourceLocator {
        SourceLocator::new(root, LayoutConvention::default())
    }

    #[test]
    fn test_resolve_root_per_classification() {
        let loc = locator(Path::new("/work"));
        assert_eq!(
            loc.resolve_root(Classification::Main, Some("com.acme")).unwrap(),
            Path::new("/work/src/main/java/com/acme")
        );
        assert_eq!(
            loc.resolve_root(Classification::Test, None).unwrap(),
            Path::new("/work/src/test/java")
        );
        assert_eq!(
            loc.resolve_root(Classification::Unspecified, Some("com.acme")).unwrap(),
            Path::new("/work/src/com/acme")
        );
    }

    #[test]
    fn test_resolve_root_reject_policy() {
        let convention = LayoutConvention {
            package_policy: PackagePolicy::Reject,
            ..LayoutConvention::default()
        };
        let loc = SourceLocator::new("/work", convention);
        assert!(matches!(
            loc.resolve_root(Classification::Unspecified, Some("com.acme")),
            Err(LocateError::Configuration(_))
        ));
        // Without a package the shared root is still fine.
        assert!(loc.resolve_root(Classification::Unspecified, None).is_ok());
    }

    #[test]
    fn test_resolve_root_rejects_bad_package() {
        let loc = locator(Path::new("/work"));
        assert!(matches!(
            loc.resolve_root(Classification::Main, Some("com.Acme")),
            Err(LocateError::Validation(_))
        ));
    }

    #[test]
    fn test_find_missing_dir_is_not_found() {
        let dir = TempDir::new().unwrap();
        let loc = locator(dir.path());
        let result = loc.find(&dir.path().join("nope"), "Foo").unwrap();
        assert!(!result.is_found());
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("foo.java"), "class foo {}").unwrap();
        let loc = locator(dir.path());
        assert!(!loc.find(dir.path(), "Foo").unwrap().is_found());
    }

    #[test]
    fn test_find_first_in_sorted_preorder() {
        let dir = TempDir::new().unwrap();
        for branch in ["b", "a/deep"] {
            fs::create_dir_all(dir.path().join(branch)).unwrap();
            fs::write(dir.path().join(branch).join("Dup.java"), branch).unwrap();
        }
        let loc = locator(dir.path());
        let hit = loc.find(dir.path(), "Dup").unwrap();
        assert_eq!(hit.relative_path(), Some("a/deep/Dup.java"));
        assert_eq!(hit.content(), Some("a/deep"));
    }

    #[test]
    fn test_relative_slash_path() {
        let root = Path::new("/work");
        let path = Path::new("/work").join("src").join("A.java");
        assert_eq!(relative_slash_path(root, &path), "src/A.java");
    }
}
