//! Sidebar trees loaded from `sidebars.toml`.
//!
//! Each top-level key names a sidebar; its value is the ordered item list:
//!
//! ```toml
//! guide = [
//!     { type = "doc", id = "intro", label = "Getting Started" },
//!     { type = "doc", id = "troubleshooting" },
//! ]
//! ```
//!
//! Sidebars keep the order in which they appear in the file.

use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::ConfigError;
use crate::nav::NavigationItem;

/// Ordered navigation tree under a sidebar identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarTree {
    pub id: String,
    pub items: Vec<NavigationItem>,
}

impl SidebarTree {
    /// Document identifiers in reading order.
    #[must_use]
    pub fn doc_ids(&self) -> Vec<&str> {
        self.items.iter().flat_map(NavigationItem::doc_ids).collect()
    }
}

/// All sidebars of a site, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sidebars {
    trees: Vec<SidebarTree>,
}

impl Sidebars {
    /// Create sidebars from already-built trees.
    #[must_use]
    pub fn new(trees: Vec<SidebarTree>) -> Self {
        Self { trees }
    }

    /// Read and parse a sidebars file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file is missing, and parse or
    /// validation errors for malformed content.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let sidebars = Self::from_toml(&content)?;
        tracing::debug!(
            path = %path.display(),
            count = sidebars.trees.len(),
            "Loaded sidebars"
        );
        Ok(sidebars)
    }

    /// Parse sidebars from TOML source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or items, and
    /// `ConfigError::Validation` for an empty sidebar identifier.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let sidebars: Self = toml::from_str(content)?;
        if sidebars.trees.iter().any(|t| t.id.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "sidebar identifier cannot be empty".to_owned(),
            ));
        }
        Ok(sidebars)
    }

    /// Look up a sidebar by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SidebarTree> {
        self.trees.iter().find(|t| t.id == id)
    }

    /// Sidebar identifiers in file order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.trees.iter().map(|t| t.id.as_str())
    }

    /// Iterate over the trees in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, SidebarTree> {
        self.trees.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

impl<'a> IntoIterator for &'a Sidebars {
    type Item = &'a SidebarTree;
    type IntoIter = std::slice::Iter<'a, SidebarTree>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de> Deserialize<'de> for Sidebars {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SidebarsVisitor;

        impl<'de> Visitor<'de> for SidebarsVisitor {
            type Value = Sidebars;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of sidebar identifiers to item arrays")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Sidebars, A::Error> {
                let mut trees = Vec::new();
                while let Some((id, items)) = map.next_entry::<String, Vec<NavigationItem>>()? {
                    trees.push(SidebarTree { id, items });
                }
                Ok(Sidebars { trees })
            }
        }

        deserializer.deserialize_map(SidebarsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TUTORIAL: &str = r#"
tutorial = [
    { type = "doc", id = "intro", label = "Getting Started" },
    { type = "doc", id = "network-configuration", label = "Network Configuration" },
    { type = "doc", id = "troubleshooting" },
]
"#;

    #[test]
    fn test_parse_single_sidebar() {
        let sidebars = Sidebars::from_toml(TUTORIAL).unwrap();
        assert_eq!(sidebars.len(), 1);
        let tree = sidebars.get("tutorial").unwrap();
        assert_eq!(
            tree.doc_ids(),
            vec!["intro", "network-configuration", "troubleshooting"]
        );
    }

    #[test]
    fn test_sidebars_keep_file_order() {
        let toml = r#"
zeta = [{ type = "doc", id = "z" }]
alpha = [{ type = "doc", id = "a" }]
mid = [{ type = "doc", id = "m" }]
"#;
        let sidebars = Sidebars::from_toml(toml).unwrap();
        assert_eq!(sidebars.ids().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_empty_file_has_no_sidebars() {
        let sidebars = Sidebars::from_toml("").unwrap();
        assert!(sidebars.is_empty());
        assert!(sidebars.get("tutorial").is_none());
    }

    #[test]
    fn test_empty_sidebar_id_is_rejected() {
        let err = Sidebars::from_toml(r#""" = [{ type = "doc", id = "a" }]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_invalid_item_is_parse_error() {
        let err = Sidebars::from_toml(r#"tutorial = [{ type = "doc" }]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("requires `id`"));
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Sidebars::load(&dir.path().join("sidebars.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sidebars.toml");
        std::fs::write(&path, TUTORIAL).unwrap();

        let sidebars = Sidebars::load(&path).unwrap();

        assert_eq!(sidebars.ids().collect::<Vec<_>>(), vec!["tutorial"]);
    }
}
