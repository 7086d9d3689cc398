//! Filesystem document source.
//!
//! Walks the docs directory and turns every `.md`/`.mdx` file into a
//! [`Document`]:
//!
//! - identifier: path relative to the docs directory, without extension;
//!   front matter `id` replaces the last segment
//! - title: front matter `title`, else first `# ` heading, else file name
//!
//! Hidden files and directories are skipped. Entries are visited in name
//! order so identifiers and scan order are stable across platforms.

use std::fs;
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::front_matter;
use crate::source::{DocumentSource, SourceError};

/// Extensions recognised as documents.
const EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Documents read from a directory tree.
#[derive(Debug)]
pub struct FsDocuments {
    source_dir: PathBuf,
}

impl FsDocuments {
    /// Create a source rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Root directory being scanned.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    fn scan_directory(&self, dir: &Path, out: &mut Vec<Document>) -> Result<(), SourceError> {
        let entries = fs::read_dir(dir).map_err(|source| SourceError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut entries: Vec<_> = entries
            .filter_map(Result::ok)
            .filter(|e| !e.file_name().to_string_lossy().starts_with('.'))
            .map(|e| {
                let is_dir = e.file_type().is_ok_and(|t| t.is_dir());
                (e.path(), is_dir)
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        for (path, is_dir) in entries {
            if is_dir {
                self.scan_directory(&path, out)?;
            } else if path
                .extension()
                .is_some_and(|ext| EXTENSIONS.iter().any(|e| ext == *e))
            {
                out.push(self.read_document(&path)?);
            }
        }
        Ok(())
    }

    fn read_document(&self, path: &Path) -> Result<Document, SourceError> {
        let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let (meta, body) =
            front_matter::parse(&content).map_err(|e| SourceError::FrontMatter {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let relative = path
            .strip_prefix(&self.source_dir)
            .unwrap_or(path)
            .to_path_buf();
        let id = document_id(&relative, meta.id.as_deref());
        let title = meta
            .title
            .or_else(|| front_matter::first_heading(body).map(str::to_owned))
            .unwrap_or_else(|| title_from_id(&id));

        Ok(Document {
            id,
            source_path: relative,
            title,
            slug: meta.slug,
            sidebar_label: meta.sidebar_label,
        })
    }
}

impl DocumentSource for FsDocuments {
    /// Scan the docs directory. A missing directory yields no documents.
    fn scan(&self) -> Result<Vec<Document>, SourceError> {
        let mut documents = Vec::new();
        if !self.source_dir.exists() {
            tracing::debug!(dir = %self.source_dir.display(), "Docs directory does not exist");
            return Ok(documents);
        }
        self.scan_directory(&self.source_dir, &mut documents)?;
        Ok(documents)
    }
}

/// Build the document identifier from a relative source path.
fn document_id(relative: &Path, override_id: Option<&str>) -> String {
    let mut segments: Vec<String> = relative
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    let stem = relative
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    segments.push(override_id.map_or(stem, str::to_owned));
    segments.join("/")
}

/// Fallback title from the last identifier segment ("network-configuration"
/// becomes "Network configuration").
fn title_from_id(id: &str) -> String {
    let name = id.rsplit('/').next().unwrap_or(id).replace(['-', '_'], " ");
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write(root: &Path, path: &str, content: &str) {
        let full = root.join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }

    #[test]
    fn test_document_id() {
        assert_eq!(document_id(Path::new("intro.md"), None), "intro");
        assert_eq!(
            document_id(Path::new("guides/setup.mdx"), None),
            "guides/setup"
        );
        assert_eq!(
            document_id(Path::new("guides/setup.md"), Some("install")),
            "guides/install"
        );
    }

    #[test]
    fn test_document_id_keeps_numeric_segments() {
        assert_eq!(document_id(Path::new("404-errors.md"), None), "404-errors");
        assert_eq!(
            document_id(Path::new("blog/2024-01-15-release.md"), None),
            "blog/2024-01-15-release"
        );
        assert_eq!(
            document_id(Path::new("02-deploy/3.5-upgrade.md"), None),
            "02-deploy/3.5-upgrade"
        );
    }

    #[test]
    fn test_title_from_id() {
        assert_eq!(title_from_id("guides/network-configuration"), "Network configuration");
        assert_eq!(title_from_id(""), "");
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let source = FsDocuments::new(dir.path().join("docs"));
        assert!(source.scan().unwrap().is_empty());
    }

    #[test]
    fn test_scan_reads_titles_and_front_matter() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "intro.md", "---\nslug: /\ntitle: Getting Started\n---\n# Ignored\n");
        write(root, "troubleshooting.md", "# Troubleshooting\n\nText.");
        write(root, "persistence.mdx", "No heading here.");
        write(root, "notes.txt", "# Not a document");
        write(root, ".hidden.md", "# Hidden");
        write(root, ".drafts/draft.md", "# Draft");

        let docs = FsDocuments::new(root.to_path_buf()).scan().unwrap();

        let summary: Vec<_> = docs
            .iter()
            .map(|d| (d.id.as_str(), d.title.as_str(), d.slug.as_deref()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("intro", "Getting Started", Some("/")),
                ("persistence", "Persistence", None),
                ("troubleshooting", "Troubleshooting", None),
            ]
        );
        assert_eq!(docs[1].source_path, PathBuf::from("persistence.mdx"));
    }

    #[test]
    fn test_scan_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "02-deploy/01-standalone.md", "# Standalone Agent Deployment");
        write(root, "02-deploy/network.md", "---\nid: networking\nsidebar_label: Network\n---\n");
        write(root, "01-intro.md", "# Intro");

        let docs = FsDocuments::new(root.to_path_buf()).scan().unwrap();

        let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["01-intro", "02-deploy/01-standalone", "02-deploy/networking"]
        );
        assert_eq!(docs[2].sidebar_label.as_deref(), Some("Network"));
        assert_eq!(docs[2].title, "Networking");
        assert_eq!(
            docs[1].source_path,
            PathBuf::from("02-deploy").join("01-standalone.md")
        );
    }

    #[test]
    fn test_invalid_front_matter_is_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "broken.md", "---\ntitle: [oops\n---\n");

        let err = FsDocuments::new(dir.path().to_path_buf()).scan().unwrap_err();

        assert!(matches!(err, SourceError::FrontMatter { .. }));
        assert!(err.to_string().contains("broken.md"));
    }

    #[test]
    fn test_catalog_records_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.md", "# A");
        write(dir.path(), "b.md", "---\nid: a\n---\n# B");

        let catalog = FsDocuments::new(dir.path().to_path_buf()).catalog().unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("a").unwrap().title, "A");
        assert_eq!(catalog.duplicates()[0].title, "B");
    }
}
