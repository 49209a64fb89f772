/// Vertical scroll window over the list rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_bounds(&mut self, content_rows: u32, viewport_height: u16) {
        self.viewport_height = viewport_height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_rows
            .saturating_sub(viewport_height as u32)
            .min(u16::MAX as u32) as u16;

        self.offset = self.offset.min(self.max_offset);
    }

    /// Half a viewport, at least one row
    pub fn page_size(&self) -> u16 {
        (self.viewport_height / 2).max(1)
    }

    /// Scrolls the minimum needed for `row` to be inside the viewport
    pub fn ensure_visible(&mut self, row: usize) {
        let row = row.min(u16::MAX as usize) as u16;
        if row < self.offset {
            self.offset = row;
        } else if self.viewport_height > 0 && row >= self.offset.saturating_add(self.viewport_height) {
            self.offset = row.saturating_sub(self.viewport_height - 1);
        }
        self.offset = self.offset.min(self.max_offset);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
