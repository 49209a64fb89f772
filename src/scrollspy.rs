//! Scroll-spy module
//!
//! Tracks which section is entering the top of the viewport and marks the
//! navigation link pointing at it. Only sections whose intersecting state
//! changed are reported on each update, the first update reports all.

pub mod spy_render;
mod spy_state;

pub use spy_render::render_sidebar;
pub use spy_state::{Intersection, ObserverOptions, ScrollSpy, SectionSpan, Viewport};
