//! Notice popup rendering

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::notice_state::NoticeQueue;

const MAX_POPUP_WIDTH: u16 = 60;
const MIN_POPUP_WIDTH: u16 = 20;

/// Render the current notice centered over the frame
///
/// Call after everything else so the popup lands on top. Returns the
/// popup area when something was drawn.
pub fn render_notice(frame: &mut Frame, queue: &NoticeQueue) -> Option<Rect> {
    let notice = queue.current()?;
    let frame_area = frame.area();

    let width = MAX_POPUP_WIDTH.min(frame_area.width.saturating_sub(4));
    if width < MIN_POPUP_WIDTH {
        return None;
    }

    // Borders plus one column of padding on each side
    let text_width = usize::from(width.saturating_sub(4)).max(1);
    let body_rows: usize = notice
        .body
        .trim()
        .lines()
        .map(|line| line.chars().count().max(1).div_ceil(text_width))
        .sum();
    let height = (body_rows as u16).saturating_add(2).min(frame_area.height);
    if height < 3 {
        return None;
    }

    let area = centered(frame_area, width, height);
    frame.render_widget(Clear, area);

    let mut title = format!(" {} ", notice.title);
    if let Some((index, total)) = queue.position()
        && total > 1
    {
        title = format!(" {} ({}/{}) ", notice.title, index, total);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default()
                .fg(notice.kind.title_color())
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(" any key to dismiss ").alignment(Alignment::Right))
        .border_style(Style::default().fg(notice.kind.border_color()));

    let lines: Vec<Line> = notice
        .body
        .trim()
        .lines()
        .map(|line| Line::from(format!(" {}", line)))
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);

    Some(area)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
