//! `docsite nav` command implementation.

use clap::Args;
use docsite_site::{Footer, NavItem, Navbar, Pagination, SiteStructure};
use serde::Serialize;

use super::site::{SiteArgs, build_site};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Only print this sidebar (default: all sidebars).
    #[arg(long)]
    sidebar: Option<String>,

    /// Include the navbar.
    #[arg(long)]
    navbar: bool,

    /// Include the footer.
    #[arg(long)]
    footer: bool,

    /// Print route, pagination and edit link of one document instead.
    #[arg(long, conflicts_with_all = ["sidebar", "navbar", "footer"])]
    doc: Option<String>,
}

/// Navigation printed by the nav command.
#[derive(Serialize)]
struct NavOutput {
    sidebars: Vec<SidebarOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    navbar: Option<Navbar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    footer: Option<Footer>,
}

/// One resolved sidebar.
#[derive(Serialize)]
struct SidebarOutput {
    id: String,
    items: Vec<NavItem>,
}

/// Placement of a single document.
#[derive(Serialize)]
struct DocOutput {
    id: String,
    route: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sidebar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination: Option<Pagination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    edit_url: Option<String>,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site fails to load or a requested sidebar or
    /// document doesn't exist.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = build_site(self.site.load_descriptor()?)?;

        let json = match &self.doc {
            Some(id) => serde_json::to_string_pretty(&doc_output(&site, id)?)?,
            None => serde_json::to_string_pretty(&self.nav_output(&site)?)?,
        };
        output.data(&json)?;
        Ok(())
    }

    fn nav_output(&self, site: &SiteStructure) -> Result<NavOutput, CliError> {
        let sidebars = match &self.sidebar {
            Some(id) => {
                let items = site
                    .sidebar(id)
                    .ok_or_else(|| CliError::Validation(format!("Unknown sidebar: {id}")))?;
                vec![SidebarOutput {
                    id: id.clone(),
                    items,
                }]
            }
            None => site
                .sidebars()
                .iter()
                .filter_map(|tree| {
                    site.sidebar(&tree.id).map(|items| SidebarOutput {
                        id: tree.id.clone(),
                        items,
                    })
                })
                .collect(),
        };

        Ok(NavOutput {
            sidebars,
            navbar: self.navbar.then(|| site.navbar()),
            footer: self.footer.then(|| site.footer()),
        })
    }
}

fn doc_output(site: &SiteStructure, id: &str) -> Result<DocOutput, CliError> {
    let route = site
        .doc_route(id)
        .ok_or_else(|| CliError::Validation(format!("Unknown document: {id}")))?;

    Ok(DocOutput {
        id: id.to_owned(),
        route: route.to_owned(),
        sidebar: site.sidebar_for_doc(id).map(str::to_owned),
        pagination: site.pagination(id),
        edit_url: site.edit_url(id),
    })
}
