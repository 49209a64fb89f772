use std::collections::HashMap;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::search::{Entry, EntryId, Renderer};

pub const MATCH_HIGHLIGHT_FG: Color = Color::Black;
pub const MATCH_HIGHLIGHT_BG: Color = Color::Yellow;

/// Terminal counterpart of the page: one styled line per entry plus the
/// "no results" indicator
#[derive(Debug, Default)]
pub struct ListView {
    rows: HashMap<EntryId, PaintedRow>,
    no_results: bool,
}

#[derive(Debug, Clone)]
struct PaintedRow {
    line: Line<'static>,
    visible: bool,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&self, id: EntryId) -> Option<&Line<'static>> {
        self.rows.get(&id).map(|row| &row.line)
    }

    pub fn is_visible(&self, id: EntryId) -> bool {
        self.rows.get(&id).is_some_and(|row| row.visible)
    }

    pub fn no_results(&self) -> bool {
        self.no_results
    }
}

impl Renderer for ListView {
    fn render_entry(&mut self, entry: &Entry) {
        let spans: Vec<Span<'static>> = entry
            .segments()
            .into_iter()
            .map(|segment| {
                if segment.highlighted {
                    Span::styled(
                        segment.text.to_string(),
                        Style::default()
                            .fg(MATCH_HIGHLIGHT_FG)
                            .bg(MATCH_HIGHLIGHT_BG)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::raw(segment.text.to_string())
                }
            })
            .collect();

        self.rows.insert(
            entry.id(),
            PaintedRow {
                line: Line::from(spans),
                visible: entry.is_visible(),
            },
        );
    }

    fn set_no_results(&mut self, shown: bool) {
        self.no_results = shown;
    }
}
