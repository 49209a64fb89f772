//! Shared test utilities for combo-filter
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::entries::Catalog;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Test fixture catalog: one loose item and two sections
    pub const TEST_ENTRIES: &str = "Open gym\n\
## Group Classes\n\
Yoga class\n\
Zumba session\n\
## Coaching\n\
Personal training\n";

    /// Helper to create App from catalog text with default config
    pub fn test_app(entries: &str) -> App {
        App::new(Catalog::parse(entries).unwrap(), &Config::default())
    }

    /// Helper to create an App over many items split into sections of `per_section`
    pub fn long_app(sections: usize, per_section: usize) -> App {
        let mut text = String::new();
        for s in 0..sections {
            text.push_str(&format!("## Section {}\n", s));
            for i in 0..per_section {
                text.push_str(&format!("Item {}-{}\n", s, i));
            }
        }
        test_app(&text)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Helper to type text into the search input key by key
    pub fn type_query(app: &mut App, query: &str) {
        for ch in query.chars() {
            app.handle_key_event(key(KeyCode::Char(ch)));
        }
    }
}
