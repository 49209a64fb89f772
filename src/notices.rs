//! Notices module
//!
//! Startup notices shown one at a time in a popup. Dismissing a notice
//! reveals the next one; hosts without popups print a joined fallback text.

mod notice_render;
mod notice_state;

pub use notice_render::render_notice;
pub use notice_state::{Notice, NoticeKind, NoticeQueue};
