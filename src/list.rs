//! Item list pane
//!
//! Paints filter results into styled terminal lines, groups them under
//! their section headers and tracks the scrolled window over them.

pub mod list_layout;
pub mod list_render;
pub mod list_view;

pub use list_layout::{ListLayout, RowKind};
pub use list_view::ListView;
