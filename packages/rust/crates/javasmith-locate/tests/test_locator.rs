//! Tests for the source locator against real directory trees.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use javasmith_locate::{LayoutConvention, LocateError, SourceLocator};
use javasmith_types::{Classification, SourceIdentifier};

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("Parent dir")).expect("Create dirs");
    fs::write(path, content).expect("Write file");
}

fn maven_project() -> TempDir {
    let dir = TempDir::new().expect("Create temp dir");
    write(
        dir.path(),
        "src/main/java/com/acme/orders/OrderService.java",
        "package com.acme.orders;\n\npublic class OrderService {}\n",
    );
    write(
        dir.path(),
        "src/test/java/com/acme/orders/OrderServiceTest.java",
        "package com.acme.orders;\n\nclass OrderServiceTest {}\n",
    );
    write(dir.path(), "src/main/java/com/acme/orders/README.md", "docs");
    dir
}

#[test]
fn test_locate_main_source() {
    let project = maven_project();
    let locator = SourceLocator::new(project.path(), LayoutConvention::default());

    let id = SourceIdentifier::new("OrderService")
        .with_classification(Classification::Main)
        .with_package("com.acme.orders");
    let hit = locator.locate(&id).expect("Locate");

    assert!(hit.is_found());
    assert_eq!(
        hit.relative_path(),
        Some("src/main/java/com/acme/orders/OrderService.java")
    );
    assert!(hit.content().expect("Content").contains("public class OrderService"));
}

#[test]
fn test_locate_missing_is_not_an_error() {
    let project = maven_project();
    let locator = SourceLocator::new(project.path(), LayoutConvention::default());

    let hit = locator
        .locate(&SourceIdentifier::new("Missing"))
        .expect("Locate should not fail");

    assert!(!hit.is_found());
    assert!(hit.relative_path().is_none());
    assert!(hit.content().is_none());
}

#[test]
fn test_unspecified_searches_shared_root_recursively() {
    let project = maven_project();
    let locator = SourceLocator::new(project.path(), LayoutConvention::default());

    let hit = locator
        .locate(&SourceIdentifier::new("OrderServiceTest"))
        .expect("Locate");
    assert_eq!(
        hit.relative_path(),
        Some("src/test/java/com/acme/orders/OrderServiceTest.java")
    );
}

#[test]
fn test_unique_name_independent_of_siblings() {
    let project = maven_project();
    for sibling in ["aaa", "zzz", "com/aaa", "com/acme/zz"] {
        write(
            project.path(),
            &format!("src/main/java/{sibling}/Other.java"),
            "class Other {}",
        );
    }
    let locator = SourceLocator::new(project.path(), LayoutConvention::default());

    let id = SourceIdentifier::new("OrderService").with_classification(Classification::Main);
    let hit = locator.locate(&id).expect("Locate");
    let relative = hit.relative_path().expect("Found");

    let joined = locator.absolute(relative);
    assert_eq!(
        joined,
        project
            .path()
            .join("src/main/java/com/acme/orders/OrderService.java")
    );
    assert!(joined.is_file());
}

#[test]
fn test_reject_policy_surfaces_configuration_error() {
    let project = maven_project();
    let convention = LayoutConvention {
        package_policy: javasmith_locate::PackagePolicy::Reject,
        ..LayoutConvention::default()
    };
    let locator = SourceLocator::new(project.path(), convention);

    let id = SourceIdentifier::new("OrderService").with_package("com.acme.orders");
    let err = locator.locate(&id).expect_err("Should reject");
    assert!(matches!(err, LocateError::Configuration(_)));
    assert!(err.to_string().contains("com.acme.orders"));
}

#[test]
fn test_invalid_name_rejected_before_io() {
    let locator = SourceLocator::new("/definitely/not/here", LayoutConvention::default());
    let err = locator
        .locate(&SourceIdentifier::new("../../etc/passwd"))
        .expect_err("Should reject");
    assert!(matches!(err, LocateError::Validation(_)));
}

#[cfg(unix)]
#[test]
fn test_unreadable_branch_does_not_abort_search() {
    use std::os::unix::fs::PermissionsExt;

    let project = maven_project();
    let locked = project.path().join("src/main/java/com/acme/aaa_locked");
    fs::create_dir_all(locked.join("inner")).expect("Create locked dir");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");
    if fs::read_dir(&locked).is_ok() {
        // Permission bits are not enforced (e.g. running as root); nothing to exercise.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("Restore perms");
        eprintln!("skipping: {} is still readable after chmod 000", locked.display());
        return;
    }

    let locator = SourceLocator::new(project.path(), LayoutConvention::default());
    let id = SourceIdentifier::new("OrderService").with_classification(Classification::Main);
    let hit = locator.locate(&id);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("Restore perms");

    let hit = hit.expect("Locked branch must not fail the search");
    assert_eq!(
        hit.relative_path(),
        Some("src/main/java/com/acme/orders/OrderService.java")
    );
}

#[test]
fn test_persist_and_create() {
    let project = maven_project();
    let locator = SourceLocator::new(project.path(), LayoutConvention::default());

    let relative = "src/main/java/com/acme/orders/OrderService.java";
    locator
        .persist(relative, "public class OrderService { }\n")
        .expect("Persist");
    assert_eq!(
        fs::read_to_string(locator.absolute(relative)).expect("Read back"),
        "public class OrderService { }\n"
    );

    let id = SourceIdentifier::new("Invoice")
        .with_classification(Classification::Main)
        .with_package("com.acme.billing");
    let created = locator.create(&id, "class Invoice {}\n").expect("Create");
    assert_eq!(created, "src/main/java/com/acme/billing/Invoice.java");
    assert!(matches!(
        locator.create(&id, "class Invoice {}\n"),
        Err(LocateError::Io(javasmith_io::IoError::AlreadyExists(_)))
    ));
}

#[test]
fn test_persist_missing_file_is_io_error() {
    let project = maven_project();
    let locator = SourceLocator::new(project.path(), LayoutConvention::default());
    assert!(matches!(
        locator.persist("src/main/java/Gone.java", "class Gone {}"),
        Err(LocateError::Io(javasmith_io::IoError::NotFound(_)))
    ));
}
