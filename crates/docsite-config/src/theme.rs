//! `[theme]` section: navbar, footer, color mode and code highlighting.

use serde::{Deserialize, Serialize};

use crate::nav::NavigationItem;

/// Theme configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Stylesheet appended after the theme's own CSS.
    pub custom_css: Option<String>,
    /// Social card image path.
    pub image: Option<String>,
    pub color_mode: ColorModeConfig,
    pub prism: PrismConfig,
    pub navbar: NavbarConfig,
    pub footer: FooterConfig,
}

/// Light or dark palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// Color mode toggles.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorModeConfig {
    pub default_mode: ColorMode,
    /// Hide the light/dark switch in the navbar.
    pub disable_switch: bool,
    /// Follow the visitor's system preference over `default_mode`.
    pub respect_prefers_color_scheme: bool,
}

/// Syntax highlighting themes.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrismConfig {
    pub theme: String,
    pub dark_theme: Option<String>,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            theme: "github".to_owned(),
            dark_theme: None,
        }
    }
}

/// Top navigation bar.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavbarConfig {
    pub title: Option<String>,
    pub logo: Option<Logo>,
    pub items: Vec<NavigationItem>,
}

/// Navbar logo image.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Logo {
    #[serde(default)]
    pub alt: String,
    pub src: String,
}

/// Footer palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

/// Page footer.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    pub style: FooterStyle,
    /// Link columns, in display order.
    pub links: Vec<FooterSection>,
    /// Copyright line; `{year}` becomes the current year.
    pub copyright: Option<String>,
}

/// Titled column of footer links.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterSection {
    pub title: String,
    pub items: Vec<NavigationItem>,
}
