//! Navigation items shared by sidebars, the navbar and footer sections.
//!
//! Items are written as TOML tables discriminated by a `type` key:
//!
//! ```toml
//! { type = "doc", id = "intro", label = "Getting Started" }
//! { type = "doc_sidebar", sidebar_id = "guide", label = "Docs", position = "left" }
//! { type = "category", label = "Setup", items = [ ... ], collapsed = false }
//! { label = "GitHub", href = "https://github.com/acme/docs", position = "right" }
//! { label = "Troubleshooting", to = "/troubleshooting" }
//! ```
//!
//! A table without `type` is a link and must carry exactly one of `href`
//! (external URL) or `to` (site route).

use serde::Deserialize;

/// Side of the navbar an item is placed on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Left,
    Right,
}

/// Destination of a link item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// Absolute URL outside the site.
    External(String),
    /// Route path inside the site (e.g. `/troubleshooting`).
    Route(String),
}

/// One entry of a navigation sequence.
///
/// Order inside the containing sequence is significant.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawItem")]
pub enum NavigationItem {
    /// Link to a document by identifier.
    Doc {
        id: String,
        /// Display label; the document's own label is used when absent.
        label: Option<String>,
        position: Position,
    },
    /// Link to the first document of a sidebar.
    DocSidebar {
        sidebar_id: String,
        label: String,
        position: Position,
    },
    /// Hyperlink to a route or an external URL.
    Link {
        target: LinkTarget,
        label: String,
        position: Position,
    },
    /// Labelled group of nested items.
    Category {
        label: String,
        items: Vec<NavigationItem>,
        collapsed: bool,
    },
}

impl NavigationItem {
    /// Explicit display label, if the item has one.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Doc { label, .. } => label.as_deref(),
            Self::DocSidebar { label, .. }
            | Self::Link { label, .. }
            | Self::Category { label, .. } => Some(label),
        }
    }

    /// Navbar placement. Categories are always placed left.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::Doc { position, .. }
            | Self::DocSidebar { position, .. }
            | Self::Link { position, .. } => *position,
            Self::Category { .. } => Position::Left,
        }
    }

    /// Document identifiers referenced by this item, depth-first.
    #[must_use]
    pub fn doc_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.collect_doc_ids(&mut ids);
        ids
    }

    fn collect_doc_ids<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Doc { id, .. } => out.push(id),
            Self::Category { items, .. } => {
                for item in items {
                    item.collect_doc_ids(out);
                }
            }
            Self::DocSidebar { .. } | Self::Link { .. } => {}
        }
    }
}

/// Item table as written in TOML, before the `type` key is interpreted.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawItem {
    #[serde(rename = "type")]
    kind: Option<String>,
    id: Option<String>,
    sidebar_id: Option<String>,
    label: Option<String>,
    href: Option<String>,
    to: Option<String>,
    position: Option<Position>,
    items: Option<Vec<NavigationItem>>,
    collapsed: Option<bool>,
}

impl RawItem {
    /// Reject keys that have no meaning for the item's type.
    fn reject(&self, kind: &str, allowed: &[&str]) -> Result<(), String> {
        let present = [
            ("id", self.id.is_some()),
            ("sidebar_id", self.sidebar_id.is_some()),
            ("href", self.href.is_some()),
            ("to", self.to.is_some()),
            ("position", self.position.is_some()),
            ("items", self.items.is_some()),
            ("collapsed", self.collapsed.is_some()),
        ];
        match present
            .iter()
            .find(|(key, set)| *set && !allowed.contains(key))
        {
            Some((key, _)) => Err(format!("`{key}` is not valid for `{kind}` items")),
            None => Ok(()),
        }
    }
}

fn required(value: Option<String>, kind: &str, key: &str) -> Result<String, String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(format!("`{kind}` item has an empty `{key}`")),
        None => Err(format!("`{kind}` item requires `{key}`")),
    }
}

impl TryFrom<RawItem> for NavigationItem {
    type Error = String;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        let kind = raw.kind.clone().unwrap_or_else(|| "link".to_owned());
        match kind.as_str() {
            "doc" => {
                raw.reject("doc", &["id", "position"])?;
                if raw.label.as_deref().is_some_and(|l| l.trim().is_empty()) {
                    return Err("`doc` item has an empty `label`".to_owned());
                }
                Ok(Self::Doc {
                    id: required(raw.id, "doc", "id")?,
                    label: raw.label,
                    position: raw.position.unwrap_or_default(),
                })
            }
            "doc_sidebar" => {
                raw.reject("doc_sidebar", &["sidebar_id", "position"])?;
                Ok(Self::DocSidebar {
                    sidebar_id: required(raw.sidebar_id, "doc_sidebar", "sidebar_id")?,
                    label: required(raw.label, "doc_sidebar", "label")?,
                    position: raw.position.unwrap_or_default(),
                })
            }
            "link" => {
                raw.reject("link", &["href", "to", "position"])?;
                let target = match (raw.href, raw.to) {
                    (Some(href), None) => LinkTarget::External(href),
                    (None, Some(to)) => LinkTarget::Route(to),
                    (Some(_), Some(_)) => {
                        return Err("`link` item cannot have both `href` and `to`".to_owned());
                    }
                    (None, None) => return Err("`link` item requires `href` or `to`".to_owned()),
                };
                Ok(Self::Link {
                    target,
                    label: required(raw.label, "link", "label")?,
                    position: raw.position.unwrap_or_default(),
                })
            }
            "category" => {
                raw.reject("category", &["items", "collapsed"])?;
                let items = raw.items.unwrap_or_default();
                if items.is_empty() {
                    return Err("`category` item must contain at least one item".to_owned());
                }
                Ok(Self::Category {
                    label: required(raw.label, "category", "label")?,
                    items,
                    collapsed: raw.collapsed.unwrap_or(true),
                })
            }
            other => Err(format!("unknown navigation item type `{other}`")),
        }
    }
}
