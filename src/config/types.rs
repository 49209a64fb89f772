// Configuration type definitions

use serde::Deserialize;

use crate::search::html_render::DEFAULT_HIGHLIGHT_CLASS;

/// Search section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_no_results_text")]
    pub no_results_text: String,
    /// CSS class of the highlight span in HTML output
    #[serde(default = "default_highlight_class")]
    pub highlight_class: String,
}

fn default_no_results_text() -> String {
    "No matching items found".to_string()
}

fn default_highlight_class() -> String {
    DEFAULT_HIGHLIGHT_CLASS.to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            no_results_text: default_no_results_text(),
            highlight_class: default_highlight_class(),
        }
    }
}

/// Navbar section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NavbarConfig {
    /// Rows scrolled before the header switches to its scrolled style
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: u16,
}

fn default_scroll_threshold() -> u16 {
    5
}

impl Default for NavbarConfig {
    fn default() -> Self {
        NavbarConfig {
            scroll_threshold: default_scroll_threshold(),
        }
    }
}

/// Scroll-spy section
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScrollSpyConfig {
    /// Share of the viewport, from the bottom, ignored when deciding which
    /// section is current
    #[serde(default = "default_bottom_margin_percent")]
    pub bottom_margin_percent: u8,
    #[serde(default = "default_threshold")]
    pub threshold: f32,
}

fn default_bottom_margin_percent() -> u8 {
    60
}

fn default_threshold() -> f32 {
    0.25
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        ScrollSpyConfig {
            bottom_margin_percent: default_bottom_margin_percent(),
            threshold: default_threshold(),
        }
    }
}

/// A notice that may be shown on startup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NoticeConfig {
    #[serde(default)]
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub autoshow: bool,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub navbar: NavbarConfig,
    #[serde(default)]
    pub scrollspy: ScrollSpyConfig,
    #[serde(default)]
    pub notices: Vec<NoticeConfig>,
}
