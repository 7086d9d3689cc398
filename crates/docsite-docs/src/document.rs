//! Documents and the identifier index built over them.

use std::collections::HashMap;
use std::path::PathBuf;

/// A content file the site can link to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Document identifier (e.g. "intro", "guides/setup").
    pub id: String,
    /// Source file path relative to the docs directory.
    pub source_path: PathBuf,
    /// Title (front matter > first H1 > file name).
    pub title: String,
    /// Route override from front matter.
    pub slug: Option<String>,
    /// Sidebar label override from front matter.
    pub sidebar_label: Option<String>,
}

impl Document {
    /// Label to show in navigation when the item doesn't set one.
    #[must_use]
    pub fn nav_label(&self) -> &str {
        self.sidebar_label.as_deref().unwrap_or(&self.title)
    }
}

/// Documents indexed by identifier, in scan order.
///
/// When two documents share an identifier the first one wins and the later
/// one is recorded in [`DocumentCatalog::duplicates`].
#[derive(Debug, Default)]
pub struct DocumentCatalog {
    documents: Vec<Document>,
    index: HashMap<String, usize>,
    duplicates: Vec<Document>,
}

impl DocumentCatalog {
    /// Index documents by identifier.
    #[must_use]
    pub fn new(documents: Vec<Document>) -> Self {
        let mut catalog = Self::default();
        for doc in documents {
            if catalog.index.contains_key(&doc.id) {
                catalog.duplicates.push(doc);
                continue;
            }
            catalog.index.insert(doc.id.clone(), catalog.documents.len());
            catalog.documents.push(doc);
        }
        catalog
    }

    /// Look up a document by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.index.get(id).map(|&i| &self.documents[i])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Documents in scan order.
    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// Documents whose identifier was already taken.
    #[must_use]
    pub fn duplicates(&self) -> &[Document] {
        &self.duplicates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
