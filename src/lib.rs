//! combo-filter library - filterable list with live match highlighting
//!
//! This library exposes the core functionality of combo-filter for testing purposes.

pub mod app;
pub mod config;
pub mod entries;
pub mod error;
pub mod list;
pub mod navbar;
pub mod notices;
pub mod output;
pub mod scroll;
pub mod scrollspy;
pub mod search;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::{App, OutputMode};
pub use config::Config;
pub use entries::Catalog;
pub use error::ComboError;
pub use search::{FilterList, HtmlRenderer, Renderer};
