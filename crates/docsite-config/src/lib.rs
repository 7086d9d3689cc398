//! Site descriptor for docsite.
//!
//! Parses `docsite.toml` with serde and provides auto-discovery of the file
//! in parent directories. Sidebars live in a separate file referenced by
//! `docs.sidebar_path` and are parsed by [`Sidebars`].
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `url`
//! - `base_url`
//! - `docs.edit_url`

mod expand;
pub mod nav;
pub mod sidebars;
pub mod theme;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

pub use nav::{LinkTarget, NavigationItem, Position};
pub use sidebars::{SidebarTree, Sidebars};
pub use theme::{
    ColorMode, ColorModeConfig, FooterConfig, FooterSection, FooterStyle, Logo, NavbarConfig,
    PrismConfig, ThemeConfig,
};

/// CLI settings that override descriptor values.
///
/// Only non-None values override the loaded descriptor.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override base URL.
    pub base_url: Option<String>,
    /// Override broken link policy.
    pub on_broken_links: Option<BrokenLinkPolicy>,
}

/// Descriptor filename to search for.
const CONFIG_FILENAME: &str = "docsite.toml";

/// What to do when a navigation item points at something that doesn't exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    /// Fail the build.
    #[default]
    Throw,
    /// Report and continue.
    Warn,
    /// Drop silently.
    Ignore,
}

impl FromStr for BrokenLinkPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "throw" => Ok(Self::Throw),
            "warn" => Ok(Self::Warn),
            "ignore" => Ok(Self::Ignore),
            other => Err(format!(
                "unknown broken link policy `{other}` (expected throw, warn or ignore)"
            )),
        }
    }
}

/// Site descriptor.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteDescriptor {
    /// Site title, shown in the browser tab and navbar fallback.
    pub title: String,
    pub tagline: Option<String>,
    pub favicon: Option<String>,
    /// Production origin, e.g. `https://acme.github.io`.
    pub url: String,
    /// Path under `url` the site is served from; starts and ends with `/`.
    pub base_url: String,
    /// Hosting organization (e.g. GitHub user or org).
    pub organization_name: Option<String>,
    /// Hosting project (e.g. repository name).
    pub project_name: Option<String>,
    pub on_broken_links: BrokenLinkPolicy,
    /// Internationalization; enabled when the section is present.
    pub i18n: Option<I18nConfig>,
    /// Docs plugin configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Whether the blog plugin is enabled.
    pub blog: bool,
    pub theme: ThemeConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the descriptor file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for SiteDescriptor {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Locale settings.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct I18nConfig {
    pub default_locale: String,
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_owned(),
            locales: vec!["en".to_owned()],
        }
    }
}

/// Raw docs configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    route_base_path: Option<String>,
    sidebar_path: Option<String>,
    edit_url: Option<String>,
}

/// Resolved docs configuration with absolute paths.
#[derive(Debug)]
pub struct DocsConfig {
    /// Directory holding the markdown sources.
    pub source_dir: PathBuf,
    /// Sidebars file.
    pub sidebar_path: PathBuf,
    /// Route prefix for documents; `/` serves docs at the site root.
    pub route_base_path: String,
    /// Prefix for "edit this page" links.
    pub edit_url: Option<String>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self::with_base(Path::new("."))
    }
}

impl DocsConfig {
    fn with_base(base: &Path) -> Self {
        Self {
            source_dir: base.join("docs"),
            sidebar_path: base.join("sidebars.toml"),
            route_base_path: "docs".to_owned(),
            edit_url: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Descriptor key (e.g. "`docs.edit_url`").
        field: String,
        /// Error message (e.g. "${`EDIT_BASE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl SiteDescriptor {
    /// Load the descriptor from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `docsite.toml` in the current directory and parents.
    ///
    /// CLI settings are applied after path resolution and before validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no descriptor exists, or a parse,
    /// expansion or validation error.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) if path.exists() => path.to_path_buf(),
            Some(path) => return Err(ConfigError::NotFound(path.to_path_buf())),
            None => Self::discover_config().ok_or_else(|| {
                let cwd = std::env::current_dir().unwrap_or_default();
                ConfigError::NotFound(cwd.join(CONFIG_FILENAME))
            })?,
        };

        let mut descriptor = Self::parse_file(&path)?;
        if let Some(settings) = cli_settings {
            descriptor.apply_cli_settings(settings);
        }
        descriptor.validate()?;

        tracing::debug!(
            path = %path.display(),
            title = %descriptor.title,
            "Loaded site descriptor"
        );
        Ok(descriptor)
    }

    /// Parse a descriptor from TOML source, resolving paths against `base`.
    ///
    /// # Errors
    ///
    /// Returns parse, expansion or validation errors.
    pub fn from_toml(content: &str, base: &Path) -> Result<Self, ConfigError> {
        let mut descriptor: Self = toml::from_str(content)?;
        descriptor.expand_env_vars()?;
        descriptor.resolve_paths(base);
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Load the sidebars file referenced by `docs.sidebar_path`.
    ///
    /// # Errors
    ///
    /// See [`Sidebars::load`].
    pub fn load_sidebars(&self) -> Result<Sidebars, ConfigError> {
        Sidebars::load(&self.docs_resolved.sidebar_path)
    }

    /// Apply CLI settings to the descriptor.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(base_url) = &settings.base_url {
            self.base_url.clone_from(base_url);
        }
        if let Some(policy) = settings.on_broken_links {
            self.on_broken_links = policy;
        }
    }

    /// Search for the descriptor in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create a default descriptor with paths relative to `base`.
    fn default_with_base(base: &Path) -> Self {
        Self {
            title: String::new(),
            tagline: None,
            favicon: None,
            url: String::new(),
            base_url: "/".to_owned(),
            organization_name: None,
            project_name: None,
            on_broken_links: BrokenLinkPolicy::default(),
            i18n: None,
            docs: DocsConfigRaw::default(),
            blog: false,
            theme: ThemeConfig::default(),
            docs_resolved: DocsConfig::with_base(base),
            config_path: None,
        }
    }

    /// Parse a descriptor file without validating it.
    fn parse_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut descriptor: Self = toml::from_str(&content)?;

        descriptor.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        descriptor.resolve_paths(config_dir);
        descriptor.config_path = Some(path.to_path_buf());

        Ok(descriptor)
    }

    /// Validate descriptor values.
    ///
    /// Called automatically by [`SiteDescriptor::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_i18n()?;
        self.validate_docs()?;
        self.validate_theme()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.title, "title")?;
        require_non_empty(&self.url, "url")?;
        require_http_url(&self.url, "url")?;

        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "base_url must start and end with /".to_owned(),
            ));
        }

        Ok(())
    }

    fn validate_i18n(&self) -> Result<(), ConfigError> {
        let Some(i18n) = &self.i18n else {
            return Ok(());
        };

        if i18n.locales.is_empty() {
            return Err(ConfigError::Validation(
                "i18n.locales cannot be empty".to_owned(),
            ));
        }
        if let Some(locale) = i18n.locales.iter().find(|l| l.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "i18n.locales contains an empty locale: {locale:?}"
            )));
        }
        if !i18n.locales.contains(&i18n.default_locale) {
            return Err(ConfigError::Validation(format!(
                "i18n.default_locale `{}` must be listed in i18n.locales",
                i18n.default_locale
            )));
        }

        Ok(())
    }

    fn validate_docs(&self) -> Result<(), ConfigError> {
        if let Some(edit_url) = &self.docs_resolved.edit_url {
            require_non_empty(edit_url, "docs.edit_url")?;
            require_http_url(edit_url, "docs.edit_url")?;
        }
        Ok(())
    }

    fn validate_theme(&self) -> Result<(), ConfigError> {
        if let Some(logo) = &self.theme.navbar.logo {
            require_non_empty(&logo.src, "theme.navbar.logo.src")?;
        }
        for (i, section) in self.theme.footer.links.iter().enumerate() {
            require_non_empty(&section.title, &format!("theme.footer.links[{i}].title"))?;
        }
        Ok(())
    }

    /// Expand environment variable references in descriptor strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.url = expand::expand_env(&self.url, "url")?;
        self.base_url = expand::expand_env(&self.base_url, "base_url")?;
        self.docs.edit_url =
            expand::expand_env_opt(self.docs.edit_url.as_deref(), "docs.edit_url")?;
        Ok(())
    }

    /// Resolve relative paths against the descriptor's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
            sidebar_path: resolve(self.docs.sidebar_path.as_deref(), "sidebars.toml"),
            route_base_path: self
                .docs
                .route_base_path
                .clone()
                .unwrap_or_else(|| "docs".to_owned()),
            edit_url: self.docs.edit_url.clone(),
        };
    }
}
