//! Arguments shared by every command that loads a site.

use std::path::PathBuf;

use clap::Args;
use docsite_config::{BrokenLinkPolicy, CliSettings, SiteDescriptor};
use docsite_docs::{DocumentSource, FsDocuments};
use docsite_site::SiteStructure;

use crate::error::CliError;

/// Site loading arguments.
#[derive(Args, Default)]
pub(crate) struct SiteArgs {
    /// Path to descriptor file (default: auto-discover docsite.toml).
    #[arg(short, long, env = "DOCSITE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Documentation source directory (overrides descriptor).
    #[arg(short, long)]
    pub source_dir: Option<PathBuf>,

    /// Base URL the site is served from (overrides descriptor).
    #[arg(long)]
    pub base_url: Option<String>,

    /// Broken link policy: throw, warn or ignore (overrides descriptor).
    #[arg(long)]
    pub on_broken_links: Option<BrokenLinkPolicy>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl SiteArgs {
    /// Load the descriptor, applying CLI overrides.
    pub(crate) fn load_descriptor(&self) -> Result<SiteDescriptor, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            base_url: self.base_url.clone(),
            on_broken_links: self.on_broken_links,
        };
        Ok(SiteDescriptor::load(
            self.config.as_deref(),
            Some(&cli_settings),
        )?)
    }
}

/// Load sidebars and documents for a descriptor and cross-check them.
pub(crate) fn build_site(descriptor: SiteDescriptor) -> Result<SiteStructure, CliError> {
    let sidebars = descriptor.load_sidebars()?;
    let source = FsDocuments::new(descriptor.docs_resolved.source_dir.clone());
    let catalog = source.catalog()?;
    tracing::info!(
        documents = catalog.len(),
        sidebars = sidebars.len(),
        source_dir = %source.source_dir().display(),
        "Loaded site inputs"
    );
    Ok(SiteStructure::build(descriptor, sidebars, catalog)?)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn write_site(dir: &TempDir, navbar_sidebar: &str) -> PathBuf {
        let config = dir.path().join("docsite.toml");
        fs::write(
            &config,
            format!(
                r#"
title = "Acme"
url = "https://acme.io"

[[theme.navbar.items]]
type = "doc_sidebar"
sidebar_id = "{navbar_sidebar}"
label = "Docs"
"#
            ),
        )
        .unwrap();
        fs::write(
            dir.path().join("sidebars.toml"),
            "guide = [{ type = \"doc\", id = \"intro\" }]\n",
        )
        .unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/intro.md"), "# Introduction\n").unwrap();
        config
    }

    const AGENT_MESH_DESCRIPTOR: &str = r#"
title = "Solace Agent Mesh"
tagline = "Helm Chart & Documentation"
favicon = "img/favicon.png"
url = "https://solaceproducts.github.io"
base_url = "/solace-agent-mesh-helm-quickstart/docs/"
organization_name = "SolaceProducts"
project_name = "solace-agent-mesh-helm-quickstart"
on_broken_links = "throw"
blog = false

[i18n]
default_locale = "en"
locales = ["en"]

[docs]
route_base_path = "/"
sidebar_path = "sidebars.toml"
edit_url = "https://github.com/SolaceProducts/solace-agent-mesh-helm-quickstart/edit/main/"

[theme]
custom_css = "src/css/custom.css"
image = "img/docusaurus-social-card.jpg"

[theme.color_mode]
respect_prefers_color_scheme = true

[theme.prism]
theme = "github"
dark_theme = "dracula"

[theme.navbar]
title = "Solace Agent Mesh"
logo = { alt = "Solace Logo", src = "img/logo.png" }

[[theme.navbar.items]]
type = "doc_sidebar"
sidebar_id = "tutorialSidebar"
position = "left"
label = "Documentation"

[[theme.navbar.items]]
href = "https://github.com/SolaceProducts/solace-agent-mesh-helm-quickstart"
label = "GitHub"
position = "right"

[theme.footer]
style = "dark"
copyright = "Copyright © {year} Solace. Built with Docusaurus."

[[theme.footer.links]]
title = "Documentation"
items = [
    { label = "Getting Started", to = "/" },
    { label = "Network Configuration", to = "/network-configuration" },
    { label = "Troubleshooting", to = "/troubleshooting" },
]

[[theme.footer.links]]
title = "Resources"
items = [
    { label = "Solace Docs", href = "https://docs.solace.com/" },
    { label = "GitHub Repository", href = "https://github.com/SolaceProducts/solace-agent-mesh-helm-quickstart" },
]

[[theme.footer.links]]
title = "Helm Repository"
items = [
    { label = "Chart Index", href = "https://solaceproducts.github.io/solace-agent-mesh-helm-quickstart/index.yaml" },
    { label = "Report Issues", href = "https://github.com/SolaceProducts/solace-agent-mesh-helm-quickstart/issues" },
]
"#;

    const AGENT_MESH_SIDEBARS: &str = r#"
tutorialSidebar = [
    { type = "doc", id = "intro", label = "Getting Started" },
    { type = "doc", id = "network-configuration", label = "Network Configuration" },
    { type = "doc", id = "persistence", label = "Persistence Configuration" },
    { type = "doc", id = "standalone-agent-deployment", label = "Standalone Agent Deployment" },
    { type = "doc", id = "troubleshooting", label = "Troubleshooting" },
]
"#;

    #[test]
    fn test_agent_mesh_site() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("docsite.toml");
        fs::write(&config, AGENT_MESH_DESCRIPTOR).unwrap();
        fs::write(dir.path().join("sidebars.toml"), AGENT_MESH_SIDEBARS).unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir(&docs).unwrap();
        fs::write(docs.join("intro.md"), "---\nslug: /\n---\n# Solace Agent Mesh\n").unwrap();
        for id in [
            "network-configuration",
            "persistence",
            "standalone-agent-deployment",
            "troubleshooting",
        ] {
            fs::write(docs.join(format!("{id}.md")), format!("# {id}\n")).unwrap();
        }

        let site = build_site(args(config).load_descriptor().unwrap()).unwrap();

        assert!(site.diagnostics().is_empty());
        assert!(site.unlisted_documents().is_empty());
        assert_eq!(
            site.doc_route("intro"),
            Some("/solace-agent-mesh-helm-quickstart/docs")
        );
        assert_eq!(
            site.doc_route("persistence"),
            Some("/solace-agent-mesh-helm-quickstart/docs/persistence")
        );

        let navbar = site.navbar();
        assert_eq!(
            navbar.left[0].path.as_deref(),
            Some("/solace-agent-mesh-helm-quickstart/docs")
        );
        assert!(navbar.right[0].external);

        let footer = site.footer();
        let titles: Vec<_> = footer.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Documentation", "Resources", "Helm Repository"]);
        assert!(!footer.copyright.unwrap().contains("{year}"));

        let pagination = site.pagination("persistence").unwrap();
        assert_eq!(
            pagination.previous.map(|p| p.title),
            Some("Network Configuration".to_owned())
        );
        assert_eq!(
            pagination.next.map(|p| p.title),
            Some("Standalone Agent Deployment".to_owned())
        );
        assert_eq!(
            site.edit_url("troubleshooting").as_deref(),
            Some(
                "https://github.com/SolaceProducts/solace-agent-mesh-helm-quickstart/edit/main/docs/troubleshooting.md"
            )
        );
    }

    fn args(config: PathBuf) -> SiteArgs {
        SiteArgs {
            config: Some(config),
            ..SiteArgs::default()
        }
    }

    #[test]
    fn test_build_site_from_disk() {
        let dir = TempDir::new().unwrap();
        let args = args(write_site(&dir, "guide"));

        let site = build_site(args.load_descriptor().unwrap()).unwrap();

        assert_eq!(site.catalog().len(), 1);
        assert_eq!(site.doc_route("intro"), Some("/docs/intro"));
        assert!(site.diagnostics().is_empty());
    }

    #[test]
    fn test_build_site_reports_unknown_sidebar() {
        let dir = TempDir::new().unwrap();
        let args = args(write_site(&dir, "missing"));

        let err = build_site(args.load_descriptor().unwrap()).err().unwrap();

        assert!(matches!(err, CliError::Site(_)));
    }

    #[test]
    fn test_cli_policy_override_downgrades_to_warning() {
        let dir = TempDir::new().unwrap();
        let args = SiteArgs {
            on_broken_links: Some(BrokenLinkPolicy::Warn),
            ..args(write_site(&dir, "missing"))
        };

        let site = build_site(args.load_descriptor().unwrap()).unwrap();

        assert_eq!(site.diagnostics().len(), 1);
    }
}
