//! Directory-layout convention.
//!
//! The fixed subdirectory names and the source extension live in one
//! immutable value handed to the locator at construction.

use serde::Deserialize;

/// What to do with a package path when no classification was given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackagePolicy {
    /// Resolve the package under the shared root (`src/<package dirs>`).
    #[default]
    SharedRoot,
    /// Fail with a configuration error.
    Reject,
}

/// Layout convention for a package-structured source tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutConvention {
    /// Root of production sources, relative to the project root.
    pub main_root: String,
    /// Root of test sources, relative to the project root.
    pub test_root: String,
    /// Root searched when no classification is given.
    pub shared_root: String,
    /// Source file extension without the dot.
    pub extension: String,
    /// Handling of a package path without classification.
    pub package_policy: PackagePolicy,
}

impl Default for LayoutConvention {
    fn default() -> Self {
        Self {
            main_root: "src/main/java".to_string(),
            test_root: "src/test/java".to_string(),
            shared_root: "src".to_string(),
            extension: "java".to_string(),
            package_policy: PackagePolicy::SharedRoot,
        }
    }
}

impl LayoutConvention {
    /// Expected file name for an identifier, e.g. `Foo` -> `Foo.java`.
    #[must_use]
    pub fn file_name(&self, name: &str) -> String {
        format!("{name}.{}", self.extension.trim_start_matches('.'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        let convention = LayoutConvention::default();
        assert_eq!(convention.file_name("Foo"), "Foo.java");

        let kotlin = LayoutConvention {
            extension: ".kt".to_string(),
            ..LayoutConvention::default()
        };
        assert_eq!(kotlin.file_name("Foo"), "Foo.kt");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let convention: LayoutConvention =
            serde_yaml::from_str("package_policy: reject\nextension: groovy\n")
                .expect("Parse convention");
        assert_eq!(convention.package_policy, PackagePolicy::Reject);
        assert_eq!(convention.extension, "groovy");
        assert_eq!(convention.main_root, "src/main/java");
    }
}
