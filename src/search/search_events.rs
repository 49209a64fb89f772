//! Search event handling
//!
//! Forwards keys to the search input and re-applies the filter whenever
//! the query text changes.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[cfg(debug_assertions)]
use log::debug;

use crate::app::App;

/// Handle a key aimed at the search input
/// Returns true if the query changed
pub fn handle_search_key(app: &mut App, key: KeyEvent) -> bool {
    let changed = match key.code {
        // Ctrl+U empties the query
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => app.search.clear(),
        _ => app.search.textarea_mut().input(key),
    };

    if changed {
        app.apply_query();

        #[cfg(debug_assertions)]
        debug!(
            "Search: query changed to '{}', {} of {} entries visible",
            app.search.query(),
            app.filter.visible_count(),
            app.filter.len()
        );
    }

    changed
}

#[cfg(test)]
#[path = "search_events_tests.rs"]
mod search_events_tests;
