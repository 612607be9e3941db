//! Tests for detect module - binary detection and text decoding.

use javasmith_io::{IoError, decode_buffer, is_binary};

#[test]
fn test_class_file_is_binary() {
    // Compiled class header: magic, minor, major version.
    assert!(is_binary(b"\xca\xfe\xba\xbe\x00\x00\x00\x41"));
    assert!(!is_binary(b"public class Foo {}"));
    assert!(!is_binary(b""));
}

#[test]
fn test_null_past_probe_window_is_text() {
    let mut buffer = vec![b'a'; 9000];
    buffer.push(0);
    assert!(!is_binary(&buffer));
}

#[test]
fn test_decode_source() -> Result<(), Box<dyn std::error::Error>> {
    let result = decode_buffer(b"String s = \"caf\xc3\xa9\";".to_vec())?;
    assert_eq!(result, "String s = \"café\";");
    Ok(())
}

#[test]
fn test_decode_binary() {
    let result = decode_buffer(b"\x00\x01\x02".to_vec());
    assert!(matches!(result, Err(IoError::BinaryFile)));
}

#[test]
fn test_decode_latin1_is_lossy() -> Result<(), Box<dyn std::error::Error>> {
    let result = decode_buffer(vec![b'c', b'a', b'f', 0xe9])?;
    assert_eq!(result, "caf\u{FFFD}");
    Ok(())
}
