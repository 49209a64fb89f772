use regex::{Regex, RegexBuilder};

use super::filter_state::Highlight;

/// Escaped compiles can get large for long queries; a literal never needs
/// the default guard against pathological patterns.
const PATTERN_SIZE_LIMIT: usize = 1 << 28;

/// Trims and lowercases a raw query as typed into the search input
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A compiled, case-insensitive literal matcher for one query
#[derive(Debug, Clone)]
pub struct QueryPattern {
    regex: Regex,
}

impl QueryPattern {
    /// Compiles `query` as a literal. Every character with meaning in
    /// pattern syntax is escaped first, so `a.b` only matches `a.b`.
    ///
    /// Returns `None` for an empty query.
    pub fn compile(query: &str) -> Option<Result<Self, regex::Error>> {
        if query.is_empty() {
            return None;
        }

        let escaped = regex::escape(query);
        Some(
            RegexBuilder::new(&escaped)
                .case_insensitive(true)
                .size_limit(PATTERN_SIZE_LIMIT)
                .build()
                .map(|regex| Self { regex }),
        )
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Finds every non-overlapping occurrence, leftmost first
    pub fn find_all(&self, text: &str) -> Vec<Highlight> {
        self.regex
            .find_iter(text)
            .map(|m| Highlight {
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }

    /// The escaped pattern source, mainly for debug output
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
