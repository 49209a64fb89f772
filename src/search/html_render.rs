//! DOM-style rendering of the filter state
//!
//! Produces the markup a page would show: one `combo-item` block per entry,
//! hidden entries carrying `display: none`, matches wrapped in a highlight
//! span, and the `notFound` indicator toggled by the aggregate result.

use std::collections::BTreeMap;

use super::filter_state::{Entry, EntryId, Renderer};

pub const DEFAULT_HIGHLIGHT_CLASS: &str = "highlight";

/// Painted state of a single entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlItem {
    pub inner_html: String,
    pub visible: bool,
}

/// Renders entries to HTML fragments keyed by entry id
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    highlight_class: String,
    items: BTreeMap<EntryId, HtmlItem>,
    no_results_shown: bool,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHLIGHT_CLASS)
    }
}

impl HtmlRenderer {
    pub fn new(highlight_class: &str) -> Self {
        Self {
            highlight_class: escape_attr(highlight_class),
            items: BTreeMap::new(),
            no_results_shown: false,
        }
    }

    pub fn item(&self, id: EntryId) -> Option<&HtmlItem> {
        self.items.get(&id)
    }

    pub fn items(&self) -> impl Iterator<Item = (EntryId, &HtmlItem)> {
        self.items.iter().map(|(id, item)| (*id, item))
    }

    pub fn no_results_shown(&self) -> bool {
        self.no_results_shown
    }

    /// Full document fragment: every item followed by the indicator
    pub fn to_html(&self, no_results_text: &str) -> String {
        let mut out = String::new();
        for item in self.items.values() {
            if item.visible {
                out.push_str("<div class=\"combo-item\">");
            } else {
                out.push_str("<div class=\"combo-item\" style=\"display: none\">");
            }
            out.push_str("<p>");
            out.push_str(&item.inner_html);
            out.push_str("</p></div>\n");
        }

        let display = if self.no_results_shown { "block" } else { "none" };
        out.push_str(&format!(
            "<div id=\"notFound\" style=\"display: {}\">{}</div>\n",
            display,
            escape_text(no_results_text)
        ));
        out
    }

    fn entry_html(&self, entry: &Entry) -> String {
        let mut html = String::with_capacity(entry.original().len());
        for segment in entry.segments() {
            if segment.highlighted {
                html.push_str("<span class=\"");
                html.push_str(&self.highlight_class);
                html.push_str("\">");
                html.push_str(&escape_text(segment.text));
                html.push_str("</span>");
            } else {
                html.push_str(&escape_text(segment.text));
            }
        }
        html
    }
}

impl Renderer for HtmlRenderer {
    fn render_entry(&mut self, entry: &Entry) {
        let inner_html = self.entry_html(entry);
        self.items.insert(
            entry.id(),
            HtmlItem {
                inner_html,
                visible: entry.is_visible(),
            },
        );
    }

    fn set_no_results(&mut self, shown: bool) {
        self.no_results_shown = shown;
    }
}

pub(crate) fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
