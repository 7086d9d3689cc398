//! `docsite check` command implementation.

use clap::Args;
use docsite_site::{Diagnostic, Severity, SiteError, SiteStructure};

use super::site::{SiteArgs, build_site};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Treat warnings as errors.
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or the site has broken references.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let descriptor = self.site.load_descriptor()?;
        output.info(&format!(
            "Site: {} ({}{})",
            descriptor.title, descriptor.url, descriptor.base_url
        ));
        if let Some(path) = &descriptor.config_path {
            output.detail(&format!("Descriptor: {}", path.display()));
        }

        let site = match build_site(descriptor) {
            Ok(site) => site,
            Err(CliError::Site(SiteError::Broken(diagnostics))) => {
                report(&output, &diagnostics);
                return Err(SiteError::Broken(diagnostics).into());
            }
            Err(err) => return Err(err),
        };

        summarize(&output, &site);
        report(&output, site.diagnostics());

        let warnings = site.diagnostics().len();
        if self.strict && warnings > 0 {
            return Err(CliError::Validation(format!(
                "{warnings} warning(s) with --strict"
            )));
        }

        output.success("No broken references");
        Ok(())
    }
}

/// Print document and sidebar counts.
fn summarize(output: &Output, site: &SiteStructure) {
    output.info(&format!("Documents: {}", site.catalog().len()));
    for tree in site.sidebars() {
        let count = site.flatten(&tree.id).map_or(0, |ids| ids.len());
        output.info(&format!("Sidebar {}: {count} document(s)", tree.id));
    }

    let unlisted: Vec<_> = site
        .unlisted_documents()
        .iter()
        .map(|doc| doc.id.as_str())
        .collect();
    if !unlisted.is_empty() {
        output.detail(&format!("Not in any sidebar: {}", unlisted.join(", ")));
    }
}

/// Print diagnostics, errors in red and warnings in yellow.
fn report(output: &Output, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        match diagnostic.severity {
            Severity::Error => output.error(&diagnostic.to_string()),
            Severity::Warning => output.warning(&diagnostic.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use docsite_config::BrokenLinkPolicy;
    use tempfile::TempDir;

    use super::*;

    /// Site whose navbar points at a sidebar that doesn't exist, plus one
    /// document no sidebar lists.
    fn write_site(dir: &TempDir) -> PathBuf {
        let config = dir.path().join("docsite.toml");
        fs::write(
            &config,
            r#"
title = "Acme"
url = "https://acme.io"

[[theme.navbar.items]]
type = "doc_sidebar"
sidebar_id = "api"
label = "API"
"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("sidebars.toml"),
            "guide = [{ type = \"doc\", id = \"intro\" }]\n",
        )
        .unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/intro.md"), "# Introduction\n").unwrap();
        fs::write(dir.path().join("docs/faq.md"), "# FAQ\n").unwrap();
        config
    }

    fn check_args(config: PathBuf, policy: BrokenLinkPolicy, strict: bool) -> CheckArgs {
        CheckArgs {
            site: SiteArgs {
                config: Some(config),
                on_broken_links: Some(policy),
                ..SiteArgs::default()
            },
            strict,
        }
    }

    #[test]
    fn test_warnings_pass_without_strict() {
        let dir = TempDir::new().unwrap();
        let config = write_site(&dir);

        assert!(check_args(config, BrokenLinkPolicy::Warn, false).execute().is_ok());
    }

    #[test]
    fn test_warnings_fail_with_strict() {
        let dir = TempDir::new().unwrap();
        let config = write_site(&dir);

        let err = check_args(config, BrokenLinkPolicy::Warn, true)
            .execute()
            .unwrap_err();

        assert!(matches!(err, CliError::Validation(_)));
        assert_eq!(err.to_string(), "1 warning(s) with --strict");
    }

    #[test]
    fn test_ignored_links_pass_with_strict() {
        let dir = TempDir::new().unwrap();
        let config = write_site(&dir);

        assert!(check_args(config, BrokenLinkPolicy::Ignore, true).execute().is_ok());
    }

    #[test]
    fn test_broken_links_fail_under_throw() {
        let dir = TempDir::new().unwrap();
        let config = write_site(&dir);

        let err = check_args(config, BrokenLinkPolicy::Throw, false)
            .execute()
            .unwrap_err();

        assert!(matches!(err, CliError::Site(SiteError::Broken(_))));
    }

    #[test]
    fn test_unlisted_documents_are_reported() {
        let dir = TempDir::new().unwrap();
        let config = write_site(&dir);
        let args = check_args(config, BrokenLinkPolicy::Warn, false);

        let site = build_site(args.site.load_descriptor().unwrap()).unwrap();
        let unlisted: Vec<_> = site
            .unlisted_documents()
            .iter()
            .map(|doc| doc.id.as_str())
            .collect();

        assert_eq!(unlisted, vec!["faq"]);
        summarize(&Output::new(), &site);
    }
}
