use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::list_layout::RowKind;
use crate::app::App;

const SELECTED_MARKER: &str = "> ";
const UNSELECTED_MARKER: &str = "  ";

/// Renders the scrolled item list. Updates the viewport height from the
/// area it is given before painting.
pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Items ")
        .border_style(Style::default().fg(Color::Cyan));

    if app.view.no_results() {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {} ", app.no_results_text),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
    }

    let inner = block.inner(area);
    app.set_viewport_height(inner.height);

    let selected_row = app.layout.item_rows.get(app.selected).copied();
    let start = usize::from(app.scroll.offset);
    let end = (start + usize::from(inner.height)).min(app.layout.rows.len());

    let lines: Vec<Line> = (start..end)
        .map(|row| match app.layout.rows[row] {
            RowKind::Header(index) => {
                let title = app
                    .catalog
                    .sections
                    .get(index)
                    .map(|section| section.title.as_str())
                    .unwrap_or_default();
                Line::from(Span::styled(
                    title.to_string(),
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ))
            }
            RowKind::Item(id) => {
                let is_selected = selected_row == Some(row);
                let marker = if is_selected {
                    SELECTED_MARKER
                } else {
                    UNSELECTED_MARKER
                };

                let mut spans = vec![Span::raw(marker)];
                if let Some(line) = app.view.line(id) {
                    spans.extend(line.spans.iter().cloned());
                }

                let line = Line::from(spans);
                if is_selected {
                    line.patch_style(Style::default().add_modifier(Modifier::REVERSED))
                } else {
                    line
                }
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
