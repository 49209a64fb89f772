//! Non-interactive output
//!
//! Applies a single query to the catalog and formats the painted result
//! for stdout, the way a page would show it after one keystroke.

use clap::ValueEnum;
use serde::Serialize;

use crate::config::SearchConfig;
use crate::entries::Catalog;
use crate::search::{FilterList, HtmlRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Visible entries, one per line
    #[default]
    Text,
    /// Item blocks with highlight spans and the not-found indicator
    Html,
    /// Every entry with its visibility and rendered markup
    Json,
}

/// What to print after running a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutput {
    pub stdout: String,
    /// Message for stderr when nothing matched in text mode
    pub stderr: Option<String>,
}

#[derive(Serialize)]
struct JsonItem<'a> {
    id: usize,
    text: &'a str,
    /// Anchor id of the entry's section
    section: Option<&'a str>,
    visible: bool,
    html: &'a str,
}

pub fn run_query(
    catalog: &Catalog,
    query: &str,
    format: OutputFormat,
    search: &SearchConfig,
) -> Result<QueryOutput, serde_json::Error> {
    let mut filter = FilterList::new();
    filter.initialize(catalog.entry_texts());

    let mut renderer = HtmlRenderer::new(&search.highlight_class);
    filter.render_all(&mut renderer);
    filter.on_query_change(query, &mut renderer);

    let output = match format {
        OutputFormat::Text => {
            let mut stdout = String::new();
            for entry in filter.visible() {
                stdout.push_str(entry.original());
                stdout.push('\n');
            }
            let stderr = (!filter.any_visible()).then(|| search.no_results_text.clone());
            QueryOutput { stdout, stderr }
        }
        OutputFormat::Html => QueryOutput {
            stdout: renderer.to_html(&search.no_results_text),
            stderr: None,
        },
        OutputFormat::Json => {
            let items: Vec<JsonItem> = renderer
                .items()
                .filter_map(|(id, item)| {
                    filter.get(id).map(|entry| JsonItem {
                        id: id.0,
                        text: entry.original(),
                        section: catalog.section_of(id).map(|s| s.id.as_str()),
                        visible: item.visible,
                        html: &item.inner_html,
                    })
                })
                .collect();
            let mut stdout = serde_json::to_string_pretty(&items)?;
            stdout.push('\n');
            QueryOutput {
                stdout,
                stderr: None,
            }
        }
    };

    #[cfg(debug_assertions)]
    log::debug!(
        "Output: query {:?} as {:?}, {} visible",
        filter.query(),
        format,
        filter.visible_count()
    );

    Ok(output)
}
