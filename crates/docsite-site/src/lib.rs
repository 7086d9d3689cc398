//! Site structure and navigation for docsite.
//!
//! This crate provides:
//! - [`SiteStructure`]: cross-checked descriptor, sidebars and documents
//! - Resolved navigation views ([`NavItem`], [`Navbar`], [`Footer`],
//!   [`Pagination`]) for a renderer to draw
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use docsite_config::SiteDescriptor;
//! use docsite_docs::{DocumentSource, FsDocuments};
//! use docsite_site::SiteStructure;
//!
//! let descriptor = SiteDescriptor::load(None, None)?;
//! let sidebars = descriptor.load_sidebars()?;
//! let catalog = FsDocuments::new(descriptor.docs_resolved.source_dir.clone()).catalog()?;
//! let site = SiteStructure::build(descriptor, sidebars, catalog)?;
//!
//! let nav = site.sidebar("tutorial");
//! let navbar = site.navbar();
//! # Ok(())
//! # }
//! ```

mod diagnostic;
mod navigation;
mod route;
mod structure;

pub use diagnostic::{Diagnostic, Severity};
pub use navigation::{Footer, FooterColumn, NavItem, Navbar, PageLink, Pagination};
pub use structure::{SiteError, SiteStructure};
