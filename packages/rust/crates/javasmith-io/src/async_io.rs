//! Asynchronous log tailing.
//!
//! Powered by Tokio for non-blocking I/O.

use std::io::SeekFrom;
use std::path::Path;

use tokio::fs as tokio_fs;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

use crate::detect::decode_buffer;
use crate::error::IoError;

/// Return the last `lines` lines of a (log) file.
///
/// Only the trailing `max_bytes` of the file are read. When that window
/// starts mid-file the first, possibly partial, line is dropped.
///
/// # Example
///
/// ```rust,ignore
/// use javasmith_io::tail_lines_async;
///
/// let recent = tail_lines_async("target/run.log", 100, 256 * 1024).await?;
/// ```
///
/// # Errors
/// `NotFound` when the file is missing, `BinaryFile` when the window holds NULL bytes.
pub async fn tail_lines_async<P: AsRef<Path>>(
    path: P,
    lines: usize,
    max_bytes: u64,
) -> Result<String, IoError> {
    let path = path.as_ref();

    let metadata = tokio_fs::metadata(path)
        .await
        .map_err(|_| IoError::NotFound(path.to_string_lossy().to_string()))?;

    let start = metadata.len().saturating_sub(max_bytes);
    let mut file = tokio_fs::File::open(path).await?;
    file.seek(SeekFrom::Start(start)).await?;

    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer).await?;
    let text = decode_buffer(buffer)?;

    let window = if start > 0 {
        text.split_once('\n').map_or("", |(_, rest)| rest)
    } else {
        text.as_str()
    };

    let all: Vec<&str> = window.lines().collect();
    let skip = all.len().saturating_sub(lines);

    tracing::debug!(
        path = %path.display(),
        window_start = start,
        returned = all.len() - skip,
        "tailed file"
    );

    Ok(all[skip..].join("\n"))
}
