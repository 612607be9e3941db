#![allow(clippy::doc_markdown)]

//! javasmith-locate - Convention-based source locator
//!
//! Maps a logical identifier (class name, optional package path, main/test
//! classification) onto a file under a Maven-style source layout, without the
//! caller knowing that layout.
//!
//! # Architecture
//!
//! ```text
//! javasmith-locate/src/
//! ├── lib.rs        # Re-exports (this file)
//! ├── error.rs      # LocateError enum (thiserror)
//! ├── convention.rs # LayoutConvention, PackagePolicy
//! ├── locator.rs    # SourceLocator: resolve_root / find / persist / create
//! └── scaffold.rs   # Skeleton text for newly created sources
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use javasmith_locate::{LayoutConvention, SourceLocator};
//! use javasmith_types::{Classification, SourceIdentifier};
//!
//! let locator = SourceLocator::new("/work/shop", LayoutConvention::default());
//! let id = SourceIdentifier::new("OrderService")
//!     .with_classification(Classification::Main)
//!     .with_package("com.acme.orders");
//! let hit = locator.locate(&id)?;
//! ```

mod convention;
mod error;
mod locator;
mod scaffold;

pub use convention::{LayoutConvention, PackagePolicy};
pub use error::LocateError;
pub use locator::{SourceLocator, relative_slash_path};
pub use scaffold::skeleton_source;
