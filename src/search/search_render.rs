use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::App;

pub const SEARCH_BAR_HEIGHT: u16 = 3;

pub fn render_bar(app: &mut App, frame: &mut Frame, area: Rect) {
    let visible = app.filter.visible_count();
    let total = app.filter.len();
    let no_results = app.view.no_results();

    let border_color = if no_results {
        Color::Red
    } else {
        Color::LightMagenta
    };

    let count_style = if no_results {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search: ")
        .title_top(
            Line::from(Span::styled(format!(" {}/{} ", visible, total), count_style))
                .alignment(Alignment::Right),
        )
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(Color::Black));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let textarea = app.search.textarea_mut();
    textarea.set_style(Style::default().fg(Color::White).bg(Color::Black));
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_widget(&*textarea, inner_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{TEST_ENTRIES, test_app, type_query};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, SEARCH_BAR_HEIGHT)).unwrap();
        terminal
            .draw(|f| render_bar(app, f, f.area()))
            .unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_bar_shows_query_and_count() {
        let mut app = test_app(TEST_ENTRIES);
        type_query(&mut app, "zu");

        let output = render(&mut app);
        assert!(output.contains("Search:"));
        assert!(output.contains("zu"));
        assert!(output.contains("1/4"));
    }

    #[test]
    fn test_bar_counts_all_when_empty() {
        let mut app = test_app(TEST_ENTRIES);
        assert!(render(&mut app).contains("4/4"));
    }

    #[test]
    fn test_bar_turns_red_without_results() {
        let mut app = test_app(TEST_ENTRIES);
        type_query(&mut app, "a.b");

        let mut terminal = Terminal::new(TestBackend::new(40, SEARCH_BAR_HEIGHT)).unwrap();
        terminal
            .draw(|f| render_bar(&mut app, f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].fg, Color::Red);
    }
}
