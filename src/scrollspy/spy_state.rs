use std::collections::HashMap;

use crate::config::ScrollSpyConfig;

/// How the observed root is shrunk and when a section counts as visible
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Percentage of the viewport height cut from the bottom of the root
    pub bottom_margin_percent: u8,
    /// Minimum visible share of a section for it to intersect
    pub threshold: f32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self::from(&ScrollSpyConfig::default())
    }
}

impl From<&ScrollSpyConfig> for ObserverOptions {
    fn from(config: &ScrollSpyConfig) -> Self {
        Self {
            bottom_margin_percent: config.bottom_margin_percent.min(100),
            threshold: config.threshold.clamp(0.0, 1.0),
        }
    }
}

/// Visible window in rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub top: u32,
    pub height: u32,
}

/// Where a section sits in the scrolled content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: String,
    pub top: u32,
    pub height: u32,
}

/// A change report for one section
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    pub id: String,
    pub is_intersecting: bool,
    pub ratio: f32,
}

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    options: ObserverOptions,
    /// Section id to index of the nav link whose href is `#id`
    links: HashMap<String, usize>,
    link_count: usize,
    states: HashMap<String, bool>,
    active: Option<usize>,
}

impl ScrollSpy {
    /// Builds a spy for nav links given by href. Links that do not point at
    /// an in-page anchor are kept in the count but never activated.
    pub fn new<I, S>(hrefs: I, options: ObserverOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut links = HashMap::new();
        let mut link_count = 0;
        for (index, href) in hrefs.into_iter().enumerate() {
            if let Some(id) = href.as_ref().strip_prefix('#') {
                links.insert(id.to_string(), index);
            }
            link_count = index + 1;
        }

        Self {
            options,
            links,
            link_count,
            states: HashMap::new(),
            active: None,
        }
    }

    /// Index of the active nav link
    pub fn active_link(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, link: usize) -> bool {
        self.active == Some(link)
    }

    pub fn link_count(&self) -> usize {
        self.link_count
    }

    /// Forgets previous intersecting states so the next update reports
    /// every section again. Used when the section layout changes.
    pub fn reset(&mut self) {
        self.states.clear();
    }

    /// Recomputes intersections and applies them. Returns true when the
    /// active link changed.
    pub fn update(&mut self, viewport: Viewport, sections: &[SectionSpan]) -> bool {
        let before = self.active;
        let changed = self.observe(viewport, sections);
        self.on_intersect(&changed);
        before != self.active
    }

    /// Reports sections whose intersecting state differs from the last call
    pub fn observe(&mut self, viewport: Viewport, sections: &[SectionSpan]) -> Vec<Intersection> {
        let mut changed = Vec::new();

        for section in sections {
            let ratio = self.intersection_ratio(viewport, section);
            // Stricter than a browser observer, where any overlap intersects:
            // here the ratio must also reach the threshold.
            let is_intersecting = ratio > 0.0 && ratio >= self.options.threshold;

            let previous = self.states.insert(section.id.clone(), is_intersecting);
            if previous != Some(is_intersecting) {
                changed.push(Intersection {
                    id: section.id.clone(),
                    is_intersecting,
                    ratio,
                });
            }
        }

        changed
    }

    /// Marks the link of each intersecting section, last one wins
    pub fn on_intersect(&mut self, entries: &[Intersection]) {
        for entry in entries {
            if entry.is_intersecting {
                self.active = self.links.get(&entry.id).copied();

                #[cfg(debug_assertions)]
                log::debug!(
                    "ScrollSpy: section {:?} entered (ratio {:.2}), active link {:?}",
                    entry.id,
                    entry.ratio,
                    self.active
                );
            }
        }
    }

    /// Overlap with the root divided by the smaller of the section and root
    /// heights, not by the section height alone, so a section taller than
    /// the shrunk root can still reach the threshold.
    fn intersection_ratio(&self, viewport: Viewport, section: &SectionSpan) -> f32 {
        let keep = 100 - u32::from(self.options.bottom_margin_percent.min(100));
        let root_height = viewport.height as f32 * keep as f32 / 100.0;
        if root_height <= 0.0 || section.height == 0 {
            return 0.0;
        }

        let root_top = viewport.top as f32;
        let root_bottom = root_top + root_height;
        let section_top = section.top as f32;
        let section_bottom = section_top + section.height as f32;

        let overlap = root_bottom.min(section_bottom) - root_top.max(section_top);
        if overlap <= 0.0 {
            return 0.0;
        }

        overlap / root_height.min(section.height as f32)
    }
}

#[cfg(test)]
#[path = "spy_state_tests.rs"]
mod spy_state_tests;
