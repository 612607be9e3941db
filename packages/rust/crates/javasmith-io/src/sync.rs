//! Synchronous file I/O operations.
//!
//! Used by the locator and the patch engine, which run to completion inside
//! a single request.

use std::fs as std_fs;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use crate::detect::decode_buffer;
use crate::error::IoError;

/// Read text from a file with size and binary checks (synchronous).
///
/// # Arguments
/// * `path` - Path to the file
/// * `max_bytes` - Maximum file size in bytes
///
/// # Returns
/// Decoded text content or an error.
///
/// # Example
///
/// ```rust,ignore
/// use javasmith_io::read_text_safe;
///
/// let content = read_text_safe("src/main/java/Foo.java", 1024 * 1024)?;
/// ```
pub fn read_text_safe<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<String, IoError> {
    let path = path.as_ref();

    let metadata = std_fs::metadata(path)
        .map_err(|_| IoError::NotFound(path.to_string_lossy().to_string()))?;

    if metadata.len() > max_bytes {
        return Err(IoError::TooLarge(metadata.len(), max_bytes));
    }

    let mut file = std_fs::File::open(path)?;
    let mut buffer = Vec::with_capacity(usize::try_from(metadata.len()).unwrap_or_default());
    file.read_to_end(&mut buffer)?;

    decode_buffer(buffer)
}

/// Replace the content of a file that must already exist.
///
/// The file is opened without `create`, so a source that vanished between
/// locate and write-back surfaces as [`IoError::NotFound`] instead of being
/// recreated.
///
/// # Errors
/// `NotFound` when the file is missing, `System` for any other failure.
pub fn write_text_existing<P: AsRef<Path>>(path: P, content: &str) -> Result<(), IoError> {
    let path = path.as_ref();

    let mut file = std_fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => IoError::NotFound(path.to_string_lossy().to_string()),
            _ => IoError::System(e),
        })?;
    file.write_all(content.as_bytes())?;
    file.flush()?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Create a new file (and its parent directories) with `content`.
///
/// # Errors
/// `AlreadyExists` when something is already at `path`.
pub fn create_text_new<P: AsRef<Path>>(path: P, content: &str) -> Result<(), IoError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std_fs::create_dir_all(parent)?;
    }

    let mut file = std_fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => IoError::AlreadyExists(path.to_string_lossy().to_string()),
            _ => IoError::System(e),
        })?;
    file.write_all(content.as_bytes())?;
    file.flush()?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "created file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sync_read() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("Sync.java");
        std_fs::write(&p, "class Sync {}").unwrap();
        assert_eq!(read_text_safe(&p, 1024).unwrap(), "class Sync {}");
    }

    #[test]
    fn test_sync_binary() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("Sync.class");
        let mut file = std_fs::File::create(&p).unwrap();
        file.write_all(b"\xca\xfe\xba\xbe\x00\x00").unwrap();
        assert!(matches!(read_text_safe(&p, 1024), Err(IoError::BinaryFile)));
    }

    #[test]
    fn test_write_existing_replaces_content() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("A.java");
        std_fs::write(&p, "class A { int x; }").unwrap();
        write_text_existing(&p, "class A {}").unwrap();
        assert_eq!(std_fs::read_to_string(&p).unwrap(), "class A {}");
    }

    #[test]
    fn test_write_existing_missing_file() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("Gone.java");
        assert!(matches!(
            write_text_existing(&p, "class Gone {}"),
            Err(IoError::NotFound(_))
        ));
        assert!(!p.exists());
    }

    #[test]
    fn test_create_new_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("com/acme/New.java");
        create_text_new(&p, "class New {}").unwrap();
        assert_eq!(std_fs::read_to_string(&p).unwrap(), "class New {}");
        assert!(matches!(
            create_text_new(&p, "class Other {}"),
            Err(IoError::AlreadyExists(_))
        ));
    }
}
