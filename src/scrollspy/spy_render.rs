use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::spy_state::ScrollSpy;
use crate::entries::Section;

pub const SIDEBAR_WIDTH: u16 = 24;

/// Renders the section navigation with the active link marked
pub fn render_sidebar(spy: &ScrollSpy, sections: &[Section], frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Sections ")
        .border_style(Style::default().fg(Color::DarkGray));

    let lines: Vec<Line> = sections
        .iter()
        .enumerate()
        .map(|(index, section)| {
            if spy.is_active(index) {
                Line::from(Span::styled(
                    format!("> {}", section.title),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", section.title),
                    Style::default().fg(Color::Gray),
                ))
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrollspy::{ObserverOptions, SectionSpan, Viewport};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn sections() -> Vec<Section> {
        vec![
            Section {
                id: "classes".to_string(),
                title: "Classes".to_string(),
            },
            Section {
                id: "coaching".to_string(),
                title: "Coaching".to_string(),
            },
        ]
    }

    fn render(spy: &ScrollSpy) -> String {
        let mut terminal = Terminal::new(TestBackend::new(SIDEBAR_WIDTH, 6)).unwrap();
        terminal
            .draw(|f| render_sidebar(spy, &sections(), f, f.area()))
            .unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_no_active_link_before_update() {
        let spy = ScrollSpy::new(["#classes", "#coaching"], ObserverOptions::default());
        let output = render(&spy);
        assert!(output.contains("  Classes"));
        assert!(output.contains("  Coaching"));
        assert!(!output.contains("> "));
    }

    #[test]
    fn test_active_link_is_marked() {
        let mut spy = ScrollSpy::new(["#classes", "#coaching"], ObserverOptions::default());
        let spans = vec![
            SectionSpan {
                id: "classes".to_string(),
                top: 0,
                height: 5,
            },
            SectionSpan {
                id: "coaching".to_string(),
                top: 5,
                height: 5,
            },
        ];
        spy.update(Viewport { top: 5, height: 10 }, &spans);

        let output = render(&spy);
        assert!(output.contains("> Coaching"));
        assert!(output.contains("  Classes"));
    }
}
