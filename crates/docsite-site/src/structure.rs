//! Cross-checked site structure.
//!
//! [`SiteStructure`] ties a [`SiteDescriptor`], its [`Sidebars`] and the
//! [`DocumentCatalog`] together. Building it checks every reference between
//! them; afterwards it answers navigation queries.
//!
//! # Checks
//!
//! - sidebar, navbar and footer `doc` items name an existing document
//! - `doc_sidebar` items name an existing sidebar with at least one document
//! - route links (`to`) resolve to a document route
//! - document identifiers and routes are unique
//!
//! Broken references are errors, warnings or dropped depending on
//! `on_broken_links`. Duplicate identifiers and routes are always errors.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};
use docsite_config::{LinkTarget, NavigationItem, Position, SidebarTree, Sidebars, SiteDescriptor};
use docsite_docs::{Document, DocumentCatalog};

use crate::diagnostic::{Diagnostic, Diagnostics, Severity};
use crate::navigation::{Footer, FooterColumn, NavItem, Navbar, PageLink, Pagination};
use crate::route;

/// Error returned when a site has broken references.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Error-severity diagnostics were found. Carries every diagnostic,
    /// warnings included.
    #[error("Site has {} broken reference(s)", error_count(.0))]
    Broken(Vec<Diagnostic>),
}

fn error_count(diagnostics: &[Diagnostic]) -> usize {
    diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count()
}

/// Validated site structure.
///
/// Immutable once built.
#[derive(Debug)]
pub struct SiteStructure {
    descriptor: SiteDescriptor,
    sidebars: Sidebars,
    catalog: DocumentCatalog,
    /// Document identifier to route.
    routes: HashMap<String, String>,
    /// Route to document identifier.
    route_index: HashMap<String, String>,
    diagnostics: Vec<Diagnostic>,
}

impl SiteStructure {
    /// Cross-check the descriptor, sidebars and documents.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Broken`] if any error-severity diagnostic is found.
    pub fn build(
        descriptor: SiteDescriptor,
        sidebars: Sidebars,
        catalog: DocumentCatalog,
    ) -> Result<Self, SiteError> {
        let mut diagnostics = Diagnostics::new(descriptor.on_broken_links);

        let docs_base = route::join(&[
            descriptor.base_url.as_str(),
            descriptor.docs_resolved.route_base_path.as_str(),
        ]);
        let mut routes = HashMap::new();
        let mut route_index: HashMap<String, String> = HashMap::new();
        for doc in catalog.iter() {
            let doc_route = route::doc_route(&docs_base, &doc.id, doc.slug.as_deref());
            if let Some(owner) = route_index.get(&doc_route) {
                diagnostics.error(
                    &location_of(doc),
                    format!("route `{doc_route}` is already used by document `{owner}`"),
                );
            } else {
                route_index.insert(doc_route.clone(), doc.id.clone());
            }
            routes.insert(doc.id.clone(), doc_route);
        }

        for dup in catalog.duplicates() {
            let first = catalog
                .get(&dup.id)
                .map(|d| d.source_path.display().to_string())
                .unwrap_or_default();
            diagnostics.error(
                &location_of(dup),
                format!("duplicate document id `{}` (first defined in {first})", dup.id),
            );
        }

        let mut structure = Self {
            descriptor,
            sidebars,
            catalog,
            routes,
            route_index,
            diagnostics: Vec::new(),
        };
        structure.check(&mut diagnostics);

        if diagnostics.has_errors() {
            return Err(SiteError::Broken(diagnostics.into_vec()));
        }
        structure.diagnostics = diagnostics.into_vec();

        tracing::debug!(
            documents = structure.catalog.len(),
            sidebars = structure.sidebars.len(),
            warnings = structure.diagnostics.len(),
            "Built site structure"
        );
        Ok(structure)
    }

    fn check(&self, diagnostics: &mut Diagnostics) {
        for tree in &self.sidebars {
            self.check_items(&tree.items, &format!("sidebars.{}", tree.id), diagnostics);
        }
        self.check_items(
            &self.descriptor.theme.navbar.items,
            "theme.navbar.items",
            diagnostics,
        );
        for (i, section) in self.descriptor.theme.footer.links.iter().enumerate() {
            self.check_items(
                &section.items,
                &format!("theme.footer.links[{i}].items"),
                diagnostics,
            );
        }
    }

    fn check_items(&self, items: &[NavigationItem], prefix: &str, diagnostics: &mut Diagnostics) {
        for (i, item) in items.iter().enumerate() {
            let location = format!("{prefix}[{i}]");
            match item {
                NavigationItem::Doc { id, .. } => {
                    if !self.catalog.contains(id) {
                        diagnostics.broken(&location, format!("unknown document `{id}`"));
                    }
                }
                NavigationItem::DocSidebar { sidebar_id, .. } => {
                    match self.sidebars.get(sidebar_id) {
                        None => diagnostics
                            .broken(&location, format!("unknown sidebar `{sidebar_id}`")),
                        Some(tree) if self.first_doc(tree).is_none() => diagnostics.broken(
                            &location,
                            format!("sidebar `{sidebar_id}` has no documents to link to"),
                        ),
                        Some(_) => {}
                    }
                }
                NavigationItem::Link {
                    target: LinkTarget::Route(to),
                    ..
                } => {
                    if !self.route_exists(to) {
                        diagnostics.broken(
                            &location,
                            format!("route `{to}` does not match any document"),
                        );
                    }
                }
                NavigationItem::Link {
                    target: LinkTarget::External(_),
                    ..
                } => {}
                NavigationItem::Category { items, .. } => {
                    self.check_items(items, &format!("{location}.items"), diagnostics);
                }
            }
        }
    }

    /// Absolute route for a `to` link (relative to the base URL).
    fn route_path(&self, to: &str) -> String {
        route::join(&[self.descriptor.base_url.as_str(), to])
    }

    /// Whether a `to` link lands on a known page.
    fn route_exists(&self, to: &str) -> bool {
        let to = to.split(['#', '?']).next().unwrap_or(to);
        let path = self.route_path(to);
        if self.route_index.contains_key(&path) {
            return true;
        }
        let blog = route::join(&[self.descriptor.base_url.as_str(), "blog"]);
        self.descriptor.blog && (path == blog || path.starts_with(&format!("{blog}/")))
    }

    fn first_doc(&self, tree: &SidebarTree) -> Option<&Document> {
        tree.doc_ids()
            .into_iter()
            .find_map(|id| self.catalog.get(id))
    }

    /// Site descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &SiteDescriptor {
        &self.descriptor
    }

    #[must_use]
    pub fn sidebars(&self) -> &Sidebars {
        &self.sidebars
    }

    #[must_use]
    pub fn catalog(&self) -> &DocumentCatalog {
        &self.catalog
    }

    /// Warnings recorded while building.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Route of a document, e.g. `/docs/guides/setup`.
    #[must_use]
    pub fn doc_route(&self, id: &str) -> Option<&str> {
        self.routes.get(id).map(String::as_str)
    }

    /// Resolved navigation tree of a sidebar.
    ///
    /// Items pointing at missing documents are left out, as are categories
    /// left with no children.
    #[must_use]
    pub fn sidebar(&self, id: &str) -> Option<Vec<NavItem>> {
        self.sidebars.get(id).map(|tree| self.nav_items(&tree.items))
    }

    fn nav_items(&self, items: &[NavigationItem]) -> Vec<NavItem> {
        items.iter().filter_map(|item| self.nav_item(item)).collect()
    }

    fn nav_item(&self, item: &NavigationItem) -> Option<NavItem> {
        match item {
            NavigationItem::Doc { id, label, .. } => {
                let doc = self.catalog.get(id)?;
                let title = label.as_deref().unwrap_or_else(|| doc.nav_label());
                Some(NavItem::link(title, self.doc_route(id)?))
            }
            NavigationItem::DocSidebar {
                sidebar_id, label, ..
            } => {
                let doc = self.first_doc(self.sidebars.get(sidebar_id)?)?;
                Some(NavItem::link(label.as_str(), self.doc_route(&doc.id)?))
            }
            NavigationItem::Link {
                target: LinkTarget::External(href),
                label,
                ..
            } => Some(NavItem::external(label.as_str(), href.as_str())),
            NavigationItem::Link {
                target: LinkTarget::Route(to),
                label,
                ..
            } => Some(NavItem::link(label.as_str(), self.route_path(to))),
            NavigationItem::Category {
                label,
                items,
                collapsed,
            } => {
                let children = self.nav_items(items);
                if children.is_empty() {
                    return None;
                }
                Some(NavItem::category(label.as_str(), *collapsed, children))
            }
        }
    }

    /// Resolved navbar.
    #[must_use]
    pub fn navbar(&self) -> Navbar {
        let config = &self.descriptor.theme.navbar;
        let mut left = Vec::new();
        let mut right = Vec::new();
        for item in &config.items {
            let Some(nav) = self.nav_item(item) else {
                continue;
            };
            match item.position() {
                Position::Left => left.push(nav),
                Position::Right => right.push(nav),
            }
        }

        Navbar {
            title: config
                .title
                .clone()
                .unwrap_or_else(|| self.descriptor.title.clone()),
            logo: config.logo.clone(),
            left,
            right,
        }
    }

    /// Resolved footer.
    #[must_use]
    pub fn footer(&self) -> Footer {
        let config = &self.descriptor.theme.footer;
        Footer {
            style: config.style,
            sections: config
                .links
                .iter()
                .map(|section| FooterColumn {
                    title: section.title.clone(),
                    items: self.nav_items(&section.items),
                })
                .collect(),
            copyright: config
                .copyright
                .as_deref()
                .map(|text| expand_year(text, Local::now().year())),
        }
    }

    /// Documents of a sidebar in reading order, with their sidebar titles.
    fn pages(&self, tree: &SidebarTree) -> Vec<(String, PageLink)> {
        fn walk(
            site: &SiteStructure,
            items: &[NavigationItem],
            out: &mut Vec<(String, PageLink)>,
        ) {
            for item in items {
                match item {
                    NavigationItem::Doc { id, label, .. } => {
                        let (Some(doc), Some(path)) = (site.catalog.get(id), site.doc_route(id))
                        else {
                            continue;
                        };
                        let title = label.as_deref().unwrap_or_else(|| doc.nav_label());
                        out.push((
                            id.clone(),
                            PageLink {
                                title: title.to_owned(),
                                path: path.to_owned(),
                            },
                        ));
                    }
                    NavigationItem::Category { items, .. } => walk(site, items, out),
                    NavigationItem::DocSidebar { .. } | NavigationItem::Link { .. } => {}
                }
            }
        }

        let mut out = Vec::new();
        walk(self, &tree.items, &mut out);
        out
    }

    /// Existing document identifiers of a sidebar, in reading order.
    #[must_use]
    pub fn flatten(&self, sidebar_id: &str) -> Option<Vec<String>> {
        let tree = self.sidebars.get(sidebar_id)?;
        Some(self.pages(tree).into_iter().map(|(id, _)| id).collect())
    }

    /// First sidebar (in file order) that lists the document.
    #[must_use]
    pub fn sidebar_for_doc(&self, doc_id: &str) -> Option<&str> {
        self.sidebars
            .iter()
            .find(|tree| tree.doc_ids().contains(&doc_id))
            .map(|tree| tree.id.as_str())
    }

    /// Previous/next links for a document within its sidebar.
    ///
    /// Returns `None` for documents not listed in any sidebar.
    #[must_use]
    pub fn pagination(&self, doc_id: &str) -> Option<Pagination> {
        let tree = self.sidebars.get(self.sidebar_for_doc(doc_id)?)?;
        let pages = self.pages(tree);
        let pos = pages.iter().position(|(id, _)| id == doc_id)?;

        Some(Pagination {
            previous: pos
                .checked_sub(1)
                .and_then(|i| pages.get(i))
                .map(|(_, link)| link.clone()),
            next: pages.get(pos + 1).map(|(_, link)| link.clone()),
        })
    }

    /// "Edit this page" URL for a document.
    ///
    /// Joins `docs.edit_url` with the source path relative to the directory
    /// holding the descriptor, e.g. `https://github.com/acme/site/edit/main/docs/intro.md`.
    #[must_use]
    pub fn edit_url(&self, doc_id: &str) -> Option<String> {
        let base = self.descriptor.docs_resolved.edit_url.as_deref()?;
        let doc = self.catalog.get(doc_id)?;

        let source_dir = &self.descriptor.docs_resolved.source_dir;
        let dir = self
            .descriptor
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .and_then(|root| source_dir.strip_prefix(root).ok())
            .map_or_else(
                || source_dir.file_name().map(PathBuf::from).unwrap_or_default(),
                Path::to_path_buf,
            );
        let relative: Vec<String> = dir
            .join(&doc.source_path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        Some(format!(
            "{}/{}",
            base.trim_end_matches('/'),
            relative.join("/")
        ))
    }

    /// Documents that no sidebar lists.
    #[must_use]
    pub fn unlisted_documents(&self) -> Vec<&Document> {
        self.catalog
            .iter()
            .filter(|doc| self.sidebar_for_doc(&doc.id).is_none())
            .collect()
    }
}

/// Location string for a document diagnostic.
fn location_of(doc: &Document) -> String {
    doc.source_path.display().to_string()
}

/// Replace `{year}` in footer text with `year`.
fn expand_year(text: &str, year: i32) -> String {
    text.replace("{year}", &year.to_string())
}
