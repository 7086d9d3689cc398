//! Document discovery for docsite.
//!
//! This crate provides a [`DocumentSource`] trait for listing the documents a
//! site can link to, independent of where they are stored:
//!
//! - [`FsDocuments`] walks a directory of `.md`/`.mdx` files and reads their
//!   YAML front matter
//! - [`MockDocuments`] holds documents in memory (behind the `mock` feature)
//!
//! Scanned documents are collected into a [`DocumentCatalog`] for lookup by
//! document identifier.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use docsite_docs::{DocumentSource, FsDocuments};
//!
//! let source = FsDocuments::new(PathBuf::from("docs"));
//! let catalog = source.catalog()?;
//! if let Some(doc) = catalog.get("intro") {
//!     assert_eq!(doc.id, "intro");
//! }
//! # Ok(())
//! # }
//! ```

mod document;
mod front_matter;
mod fs;
#[cfg(feature = "mock")]
mod mock;
mod source;

pub use document::{Document, DocumentCatalog};
pub use fs::FsDocuments;
#[cfg(feature = "mock")]
pub use mock::MockDocuments;
pub use source::{DocumentSource, SourceError};
