//! In-memory document source for tests.

use std::path::PathBuf;

use crate::document::Document;
use crate::source::{DocumentSource, SourceError};

/// Document source backed by a `Vec`.
///
/// # Example
///
/// ```ignore
/// use docsite_docs::{DocumentSource, MockDocuments};
///
/// let source = MockDocuments::new()
///     .with_document("intro", "Getting Started")
///     .with_slug("intro", "/");
/// let catalog = source.catalog().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockDocuments {
    documents: Vec<Document>,
}

impl MockDocuments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document; its source path is `<id>.md`.
    #[must_use]
    pub fn with_document(mut self, id: impl Into<String>, title: impl Into<String>) -> Self {
        let id = id.into();
        self.documents.push(Document {
            source_path: PathBuf::from(format!("{id}.md")),
            id,
            title: title.into(),
            slug: None,
            sidebar_label: None,
        });
        self
    }

    /// Set the slug of a previously added document.
    #[must_use]
    pub fn with_slug(mut self, id: &str, slug: impl Into<String>) -> Self {
        if let Some(doc) = self.documents.iter_mut().find(|d| d.id == id) {
            doc.slug = Some(slug.into());
        }
        self
    }

    /// Set the sidebar label of a previously added document.
    #[must_use]
    pub fn with_sidebar_label(mut self, id: &str, label: impl Into<String>) -> Self {
        if let Some(doc) = self.documents.iter_mut().find(|d| d.id == id) {
            doc.sidebar_label = Some(label.into());
        }
        self
    }
}

impl DocumentSource for MockDocuments {
    fn scan(&self) -> Result<Vec<Document>, SourceError> {
        Ok(self.documents.clone())
    }
}
