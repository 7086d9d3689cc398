//! Resolved navigation views handed to a renderer.
//!
//! These are the flattened forms of the descriptor's navigation items:
//! document identifiers are replaced by routes and titles, sidebars by the
//! route of their first document.

use docsite_config::{FooterStyle, Logo};
use serde::Serialize;

/// Navigation entry with children for UI trees.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Link target (route or external URL). `None` for categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// True when `path` leaves the site.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
    /// Initial collapsed state, set for categories only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub(crate) fn link(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: Some(path.into()),
            external: false,
            collapsed: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn external(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            external: true,
            ..Self::link(title, url)
        }
    }

    pub(crate) fn category(title: impl Into<String>, collapsed: bool, children: Vec<Self>) -> Self {
        Self {
            title: title.into(),
            path: None,
            external: false,
            collapsed: Some(collapsed),
            children,
        }
    }
}

/// Navbar split by placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Navbar {
    /// Navbar title (falls back to the site title).
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    pub left: Vec<NavItem>,
    pub right: Vec<NavItem>,
}

/// Footer with resolved link columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub style: FooterStyle,
    pub sections: Vec<FooterColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// One footer column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    pub title: String,
    pub items: Vec<NavItem>,
}

/// Link to a neighbouring document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub title: String,
    pub path: String,
}

/// Previous/next links within a sidebar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PageLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageLink>,
}
