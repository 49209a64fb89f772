use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, OutputMode};
use crate::search::search_events::handle_search_key;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_paste_event(&mut self, text: String) {
        if self.notices.is_visible() {
            return;
        }
        if self.search.insert_str(&text) {
            self.apply_query();
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // An open notice swallows the key that dismisses it
        if self.notices.is_visible() {
            if is_quit_key(key) {
                self.should_quit = true;
            } else {
                self.notices.dismiss();
            }
            return;
        }

        if self.handle_global_keys(key) {
            return;
        }

        if self.handle_list_keys(key) {
            return;
        }

        handle_search_key(self, key);
    }

    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if is_quit_key(key) {
            self.should_quit = true;
            return true;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Enter => {
                if let Some(id) = self.selected_entry() {
                    self.output_mode = Some(OutputMode::Selected(id));
                    self.should_quit = true;
                }
                true
            }
            KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.output_mode = Some(OutputMode::Visible);
                self.should_quit = true;
                true
            }
            _ => false,
        }
    }

    fn handle_list_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Down => self.select_next(1),
            KeyCode::Up => self.select_previous(1),
            KeyCode::PageDown => {
                let step = usize::from(self.scroll.page_size());
                self.select_next(step);
            }
            KeyCode::PageUp => {
                let step = usize::from(self.scroll.page_size());
                self.select_previous(step);
            }
            _ => return false,
        }
        true
    }
}

fn is_quit_key(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
