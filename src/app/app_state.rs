use crate::config::Config;
use crate::entries::Catalog;
use crate::list::{ListLayout, ListView, RowKind};
use crate::navbar::NavbarState;
use crate::notices::{Notice, NoticeQueue};
use crate::scroll::ScrollState;
use crate::scrollspy::{ObserverOptions, ScrollSpy, Viewport};
use crate::search::{EntryId, FilterList, SearchInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Print the selected entry
    Selected(EntryId),
    /// Print every visible entry
    Visible,
}

pub struct App {
    pub catalog: Catalog,
    pub filter: FilterList,
    pub view: ListView,
    pub layout: ListLayout,
    pub search: SearchInput,
    pub scroll: ScrollState,
    /// Position among visible items
    pub selected: usize,
    pub spy: ScrollSpy,
    pub navbar: NavbarState,
    pub notices: NoticeQueue,
    pub no_results_text: String,
    pub output_mode: Option<OutputMode>,
    pub should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        let mut filter = FilterList::new();
        filter.initialize(catalog.entry_texts());

        let mut view = ListView::new();
        filter.render_all(&mut view);

        let layout = ListLayout::build(&catalog, &filter);
        let hrefs: Vec<String> = catalog
            .sections
            .iter()
            .map(|section| format!("#{}", section.id))
            .collect();
        let spy = ScrollSpy::new(hrefs, ObserverOptions::from(&config.scrollspy));

        Self {
            catalog,
            filter,
            view,
            layout,
            search: SearchInput::new(),
            scroll: ScrollState::new(),
            selected: 0,
            spy,
            navbar: NavbarState::new(config.navbar.scroll_threshold),
            notices: NoticeQueue::from_config(&config.notices),
            no_results_text: config.search.no_results_text.clone(),
            output_mode: None,
            should_quit: false,
        }
    }

    /// Queues a startup warning ahead of the configured notices
    pub fn show_warning(&mut self, message: &str) {
        self.notices.push_front(Notice::warning(message));
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output_mode(&self) -> Option<OutputMode> {
        self.output_mode
    }

    pub fn query(&self) -> &str {
        self.search.query()
    }

    /// Re-runs the filter for the current input and rebuilds the rows
    pub fn apply_query(&mut self) {
        let query = self.search.query().to_string();
        self.filter.on_query_change(&query, &mut self.view);

        self.layout = ListLayout::build(&self.catalog, &self.filter);
        self.selected = 0;
        self.scroll.reset();
        self.spy.reset();
        self.sync_scroll();
    }

    pub fn selected_entry(&self) -> Option<EntryId> {
        self.layout.item_at(self.selected)
    }

    pub fn select_next(&mut self, step: usize) {
        let count = self.layout.item_count();
        if count == 0 {
            return;
        }
        self.selected = self.selected.saturating_add(step).min(count - 1);
        self.reveal_selected();
    }

    pub fn select_previous(&mut self, step: usize) {
        if self.layout.item_count() == 0 {
            return;
        }
        self.selected = self.selected.saturating_sub(step);
        self.reveal_selected();
    }

    fn reveal_selected(&mut self) {
        if let Some(&row) = self.layout.item_rows.get(self.selected) {
            // Keep the section header in view for the first item of a section
            if row > 0 && matches!(self.layout.rows[row - 1], RowKind::Header(_)) {
                self.scroll.ensure_visible(row - 1);
            }
            self.scroll.ensure_visible(row);
        }
        self.sync_scroll();
    }

    /// Updates the viewport after a resize and re-derives scroll effects
    pub fn set_viewport_height(&mut self, height: u16) {
        self.scroll.update_bounds(self.layout.row_count(), height);
        self.sync_scroll();
    }

    /// Feeds the scroll position to the navbar and the scroll-spy
    pub fn sync_scroll(&mut self) {
        self.scroll
            .update_bounds(self.layout.row_count(), self.scroll.viewport_height);
        self.navbar.on_scroll(self.scroll.offset);
        self.spy.update(
            Viewport {
                top: u32::from(self.scroll.offset),
                height: u32::from(self.scroll.viewport_height),
            },
            &self.layout.sections,
        );
    }

    /// Original texts of the entries to print on exit
    pub fn output_lines(&self) -> Vec<&str> {
        match self.output_mode {
            Some(OutputMode::Selected(id)) => self
                .filter
                .get(id)
                .map(|entry| vec![entry.original()])
                .unwrap_or_default(),
            Some(OutputMode::Visible) => {
                self.filter.visible().map(|entry| entry.original()).collect()
            }
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
