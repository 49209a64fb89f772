use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::list::list_render;
use crate::notices::render_notice;
use crate::scrollspy::render_sidebar;
use crate::scrollspy::spy_render::SIDEBAR_WIDTH;
use crate::search::search_render::{self, SEARCH_BAR_HEIGHT};

const APP_TITLE: &str = " combo-filter ";
const HELP_TEXT: &str = " ↑/↓ select  Enter pick  Ctrl+O print all  Ctrl+U clear  Esc quit";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [header_area, body_area, search_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let (sidebar_area, list_area) = if self.catalog.sections.is_empty() {
            (None, body_area)
        } else {
            let [sidebar_area, list_area] =
                Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
                    .areas(body_area);
            (Some(sidebar_area), list_area)
        };

        // List first: it sets the viewport the scroll-spy and navbar work from
        list_render::render_pane(self, frame, list_area);
        if let Some(sidebar_area) = sidebar_area {
            render_sidebar(&self.spy, &self.catalog.sections, frame, sidebar_area);
        }

        self.render_header(frame, header_area);
        search_render::render_bar(self, frame, search_area);
        render_help(frame, help_area);
        render_notice(frame, &self.notices);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let style = if self.navbar.is_scrolled() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        };

        let count = format!(
            " {}/{} items ",
            self.filter.visible_count(),
            self.filter.len()
        );

        let [title_area, count_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(count.chars().count() as u16),
        ])
        .areas(area);

        frame.render_widget(Paragraph::new(APP_TITLE).style(style), title_area);
        frame.render_widget(
            Paragraph::new(count)
                .style(style)
                .alignment(Alignment::Right),
            count_area,
        );
    }
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)));
    frame.render_widget(Paragraph::new(help), area);
}
