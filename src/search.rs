//! Search module
//!
//! Filters the entry list against a live query and highlights every match.
//! The filter owns entry state only; painting goes through a `Renderer`.

mod filter_state;
pub mod html_render;
mod pattern;
pub mod search_events;
mod search_input;
pub mod search_render;

pub use filter_state::{Entry, EntryId, FilterList, Highlight, Renderer, Segment};
pub use html_render::HtmlRenderer;
pub use pattern::{QueryPattern, normalize_query};
pub use search_input::SearchInput;
