//! Skeleton text for newly created sources.

use javasmith_types::SourceIdentifier;

/// Build the initial text of a new source file.
///
/// Emits a `package` declaration when the identifier carries a package path,
/// then `body` or, when absent, an empty public class named after the
/// identifier.
#[must_use]
pub fn skeleton_source(identifier: &SourceIdentifier, body: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(package) = identifier.package() {
        out.push_str(&format!("package {package};\n\n"));
    }
    match body.map(str::trim_end).filter(|b| !b.is_empty()) {
        Some(body) => out.push_str(body),
        None => out.push_str(&format!("public class {} {{\n}}", identifier.name)),
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_body_with_package() {
        let id = SourceIdentifier::new("Invoice").with_package("com.acme.billing");
        assert_eq!(
            skeleton_source(&id, None),
            "package com.acme.billing;\n\npublic class Invoice {\n}\n"
        );
    }

    #[test]
    fn test_custom_body_without_package() {
        let id = SourceIdentifier::new("Util");
        assert_eq!(
            skeleton_source(&id, Some("final class Util {}\n\n")),
            "final class Util {}\n"
        );
    }
}
