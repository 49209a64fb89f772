//! Notice queue state

use ratatui::style::Color;

use crate::config::NoticeConfig;

/// Determines the popup colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeKind {
    /// Configured notice (blue)
    #[default]
    Info,
    /// Problem found while starting up, e.g. invalid config (yellow)
    Warning,
}

impl NoticeKind {
    pub fn border_color(self) -> Color {
        match self {
            NoticeKind::Info => Color::LightBlue,
            NoticeKind::Warning => Color::Yellow,
        }
    }

    pub fn title_color(self) -> Color {
        match self {
            NoticeKind::Info => Color::White,
            NoticeKind::Warning => Color::Yellow,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn warning(body: &str) -> Self {
        Self {
            title: "Warning".to_string(),
            body: body.to_string(),
            kind: NoticeKind::Warning,
        }
    }
}

/// Ordered notices with at most one shown at a time
#[derive(Debug, Default)]
pub struct NoticeQueue {
    notices: Vec<Notice>,
    current: Option<usize>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the configured notices flagged `autoshow`, in order
    pub fn from_config(configured: &[NoticeConfig]) -> Self {
        let notices = configured
            .iter()
            .filter(|n| n.autoshow)
            .map(|n| Notice {
                title: n.title.clone(),
                body: n.body.clone(),
                kind: NoticeKind::Info,
            })
            .collect();

        Self {
            notices,
            current: None,
        }
    }

    /// Puts a notice ahead of everything not yet shown
    pub fn push_front(&mut self, notice: Notice) {
        self.notices.insert(0, notice);
        if let Some(index) = self.current.as_mut() {
            *index += 1;
        }
    }

    /// Shows the first notice. Does nothing once the queue has started.
    pub fn start(&mut self) {
        if self.current.is_none() && !self.notices.is_empty() {
            self.current = Some(0);

            #[cfg(debug_assertions)]
            log::debug!("Notices: showing 1/{}", self.notices.len());
        }
    }

    /// Hides the current notice and shows the next one, if any
    pub fn dismiss(&mut self) {
        let Some(index) = self.current else {
            return;
        };

        let next = index + 1;
        // Past the end means everything was shown
        self.current = Some(next.min(self.notices.len()));

        #[cfg(debug_assertions)]
        log::debug!(
            "Notices: dismissed {}/{}",
            index + 1,
            self.notices.len()
        );
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.and_then(|index| self.notices.get(index))
    }

    pub fn is_visible(&self) -> bool {
        self.current().is_some()
    }

    /// Position of the shown notice as (1-based index, total)
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current
            .filter(|&index| index < self.notices.len())
            .map(|index| (index + 1, self.notices.len()))
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// All bodies, trimmed, separated by a blank line
    pub fn fallback_text(&self) -> String {
        self.notices
            .iter()
            .map(|n| n.body.trim())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
#[path = "notice_state_tests.rs"]
mod notice_state_tests;
