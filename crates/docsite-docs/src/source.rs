//! Document source trait and error type.

use std::path::PathBuf;

use crate::document::{Document, DocumentCatalog};

/// Error returned when documents cannot be listed.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// I/O error while reading the docs directory.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Front matter block that isn't valid YAML.
    #[error("Invalid front matter in {}: {message}", path.display())]
    FrontMatter { path: PathBuf, message: String },
}

/// Lists the documents available to a site.
pub trait DocumentSource: Send + Sync {
    /// Return every document, in a stable order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store can't be read.
    fn scan(&self) -> Result<Vec<Document>, SourceError>;

    /// Scan and index documents by identifier.
    ///
    /// # Errors
    ///
    /// See [`DocumentSource::scan`].
    fn catalog(&self) -> Result<DocumentCatalog, SourceError> {
        let documents = self.scan()?;
        tracing::debug!(count = documents.len(), "Scanned documents");
        Ok(DocumentCatalog::new(documents))
    }
}
