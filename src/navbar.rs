/// Header style switch driven by how far the list is scrolled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarState {
    pub threshold: u16,
    scrolled: bool,
}

impl NavbarState {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    /// Returns true when the scrolled flag flipped
    pub fn on_scroll(&mut self, offset: u16) -> bool {
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;

        #[cfg(debug_assertions)]
        {
            if changed {
                log::debug!("Navbar: scrolled={} at offset {}", scrolled, offset);
            }
        }

        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

impl Default for NavbarState {
    fn default() -> Self {
        Self::new(crate::config::NavbarConfig::default().scroll_threshold)
    }
}
