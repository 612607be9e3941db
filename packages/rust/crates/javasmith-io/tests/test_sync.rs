//! Tests for sync module - synchronous file operations.

use std::io::Write;
use tempfile::TempDir;

use javasmith_io::{IoError, create_text_new, read_text_safe, write_text_existing};

#[test]
fn test_sync_read() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("Foo.java");
    std::fs::write(&p, "public class Foo {}\n").unwrap();
    assert_eq!(read_text_safe(&p, 1024).unwrap(), "public class Foo {}\n");
}

#[test]
fn test_sync_binary() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("Foo.class");
    let mut file = std::fs::File::create(&p).unwrap();
    file.write_all(b"\x00\x01\x02\x03").unwrap();
    assert!(matches!(read_text_safe(&p, 1024), Err(IoError::BinaryFile)));
}

#[test]
fn test_file_too_large() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("Large.java");
    std::fs::write(&p, "12345678901234567890").unwrap();
    assert!(matches!(
        read_text_safe(&p, 10),
        Err(IoError::TooLarge(20, 10))
    ));
}

#[test]
fn test_file_not_found() {
    let result = read_text_safe("/nonexistent/Foo.java", 1024);
    assert!(matches!(result, Err(IoError::NotFound(_))));
}

#[test]
fn test_write_back_then_read() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("Foo.java");
    std::fs::write(&p, "class Foo { int x; }").unwrap();

    write_text_existing(&p, "class Foo { int x, y; }").unwrap();
    assert_eq!(read_text_safe(&p, 1024).unwrap(), "class Foo { int x, y; }");
}

#[test]
fn test_write_back_never_creates() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("Missing.java");
    assert!(matches!(
        write_text_existing(&p, "class Missing {}"),
        Err(IoError::NotFound(_))
    ));
    assert!(!p.exists());
}

#[test]
fn test_create_makes_parent_directories() {
    let dir = TempDir::new().unwrap();
    let p = dir.path().join("src/main/java/com/acme/Foo.java");
    create_text_new(&p, "package com.acme;\n").unwrap();
    assert!(p.is_file());
}
