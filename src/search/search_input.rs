use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

/// Single-line text input holding the raw query
pub struct SearchInput {
    textarea: TextArea<'static>,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchInput {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        Self { textarea }
    }

    /// Raw query text as typed
    pub fn query(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }

    /// Inserts pasted text with line breaks flattened to spaces
    pub fn insert_str(&mut self, text: &str) -> bool {
        let flattened = text.replace(['\r', '\n'], " ");
        self.textarea.insert_str(flattened)
    }

    /// Empties the input, returns true if there was anything to clear
    pub fn clear(&mut self) -> bool {
        if self.query().is_empty() {
            return false;
        }
        self.textarea.select_all();
        self.textarea.cut();
        true
    }
}
