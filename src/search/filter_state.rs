use std::collections::HashMap;

#[cfg(debug_assertions)]
use log::debug;

use super::pattern::{QueryPattern, normalize_query};

/// Identifier the host assigns to each entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub usize);

/// One match inside an entry's original text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    /// Byte offset of the first matched character
    pub start: usize,
    /// Byte offset one past the last matched character
    pub end: usize,
}

/// A piece of an entry's displayed text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// A filterable item. The original text is captured once and never changes;
/// highlights are recomputed from it on every query change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: EntryId,
    original: String,
    visible: bool,
    highlights: Vec<Highlight>,
}

impl Entry {
    fn new(id: EntryId, original: String) -> Self {
        Self {
            id,
            original,
            visible: true,
            highlights: Vec::new(),
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Splits the original text into plain and highlighted runs
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut segments = Vec::with_capacity(self.highlights.len() * 2 + 1);
        let mut cursor = 0;

        for h in &self.highlights {
            if h.start > cursor {
                segments.push(Segment {
                    text: &self.original[cursor..h.start],
                    highlighted: false,
                });
            }
            segments.push(Segment {
                text: &self.original[h.start..h.end],
                highlighted: true,
            });
            cursor = h.end;
        }

        if cursor < self.original.len() {
            segments.push(Segment {
                text: &self.original[cursor..],
                highlighted: false,
            });
        }

        segments
    }

    /// Displayed text with each highlight wrapped in `open`/`close`
    pub fn marked_text(&self, open: &str, close: &str) -> String {
        let mut out = String::with_capacity(self.original.len());
        for segment in self.segments() {
            if segment.highlighted {
                out.push_str(open);
                out.push_str(segment.text);
                out.push_str(close);
            } else {
                out.push_str(segment.text);
            }
        }
        out
    }

    fn restore(&mut self, visible: bool) {
        self.highlights.clear();
        self.visible = visible;
    }

    /// Visibility is lowercase containment of the normalized query. Only
    /// visible entries get highlights, and a visible entry can have none
    /// when case folding and lowercasing disagree.
    fn apply(&mut self, query: &str, pattern: Option<&QueryPattern>) {
        if query.is_empty() {
            self.restore(true);
            return;
        }
        if !self.original.to_lowercase().contains(query) {
            self.restore(false);
            return;
        }

        self.visible = true;
        self.highlights = pattern
            .map(|pattern| pattern.find_all(&self.original))
            .unwrap_or_default();
    }
}

/// Paints whatever the filter computes. The filter never touches the
/// display itself.
pub trait Renderer {
    fn render_entry(&mut self, entry: &Entry);
    fn set_no_results(&mut self, shown: bool);
}

/// Owns the entry list and applies queries to it
#[derive(Debug, Default)]
pub struct FilterList {
    entries: Vec<Entry>,
    index: HashMap<EntryId, usize>,
    query: String,
    any_visible: bool,
}

impl FilterList {
    pub fn new() -> Self {
        Self {
            any_visible: true,
            ..Self::default()
        }
    }

    /// Captures the original text of each entry not seen before. Entries
    /// already captured keep their first original. New entries are filtered
    /// by the current query; call `render_all` afterwards to paint them.
    pub fn initialize<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (EntryId, S)>,
        S: Into<String>,
    {
        let pattern = compile_pattern(&self.query);

        for (id, text) in entries {
            if self.index.contains_key(&id) {
                continue;
            }
            let mut entry = Entry::new(id, text.into());
            entry.apply(&self.query, pattern.as_ref());

            self.index.insert(id, self.entries.len());
            self.entries.push(entry);
        }

        self.any_visible = self.query.is_empty() || self.entries.iter().any(|e| e.visible);

        #[cfg(debug_assertions)]
        debug!("Filter: initialized with {} entries", self.entries.len());
    }

    /// Applies a newly typed query and repaints every entry
    pub fn on_query_change<R: Renderer + ?Sized>(&mut self, raw_query: &str, renderer: &mut R) {
        self.query = normalize_query(raw_query);
        let pattern = compile_pattern(&self.query);

        for entry in &mut self.entries {
            entry.apply(&self.query, pattern.as_ref());
        }
        self.any_visible = self.query.is_empty() || self.entries.iter().any(|e| e.visible);

        #[cfg(debug_assertions)]
        debug!(
            "Filter: query changed to {:?}, {}/{} visible",
            self.query,
            self.visible_count(),
            self.entries.len()
        );

        self.render_all(renderer);
    }

    /// Paints the current state without recomputing it
    pub fn render_all<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for entry in &self.entries {
            renderer.render_entry(entry);
        }
        renderer.set_no_results(!self.any_visible);
    }

    /// Normalized query last applied
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn any_visible(&self) -> bool {
        self.any_visible
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.index.get(&id).map(|&i| &self.entries[i])
    }

    pub fn visible(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Highlight pattern for a normalized query. A query that fails to compile
/// still filters, it just gets no highlights.
fn compile_pattern(query: &str) -> Option<QueryPattern> {
    match QueryPattern::compile(query)? {
        Ok(pattern) => Some(pattern),
        Err(_e) => {
            #[cfg(debug_assertions)]
            log::warn!("Filter: could not compile query {:?}: {}", query, _e);
            None
        }
    }
}

#[cfg(test)]
#[path = "filter_state_tests.rs"]
mod filter_state_tests;
