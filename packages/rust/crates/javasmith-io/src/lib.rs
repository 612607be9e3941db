#![allow(clippy::doc_markdown)]

//! javasmith-io - Safe file I/O for the javasmith source editor
//!
//! Bounded, binary-aware text reads, write-back of existing sources and
//! log tailing.
//!
//! # Features
//!
//! - **Dual API**: Sync (std::fs) for the locator, Async (tokio::fs) for log tailing
//! - **Safety**: Binary detection & Size limits
//! - **Write-back**: Persisting never creates a file by accident
//! - **Tailing**: Last N lines of a log without reading the whole file
//!
//! # Architecture
//!
//! ```text
//! javasmith-io/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # IoError enum
//! ├── detect.rs   # Binary detection & decoding
//! ├── sync.rs     # Synchronous read / write-back / create
//! └── async_io.rs # Asynchronous log tail (Tokio)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use javasmith_io::{read_text_safe, write_text_existing, tail_lines_async};
//!
//! let content = read_text_safe("src/main/java/Foo.java", 1024 * 1024)?;
//! write_text_existing("src/main/java/Foo.java", &content.replace("x", "y"))?;
//! let recent = tail_lines_async("build.log", 50, 64 * 1024).await?;
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod async_io;
mod detect;
mod error;
mod sync;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use async_io::tail_lines_async;
pub use error::IoError;
pub use sync::{create_text_new, read_text_safe, write_text_existing};

// Re-export detection utilities for advanced use
pub use detect::{decode_buffer, is_binary};
