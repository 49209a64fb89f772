//! Entry catalog loading
//!
//! Reads the list of filterable items, optionally grouped into sections,
//! from a file or stdin. Accepted formats:
//! - JSON array of strings
//! - JSON array of `{ "section": "...", "items": ["..."] }`
//! - plain text, one entry per line, `## Title` lines opening a section

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::ComboError;
use crate::search::EntryId;

const SECTION_PREFIX: &str = "## ";

/// A navigable group of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Anchor id derived from the title, unique within the catalog
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: EntryId,
    /// Index into `Catalog::sections`
    pub section: Option<usize>,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub sections: Vec<Section>,
    pub items: Vec<Item>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Flat(Vec<String>),
    Sectioned(Vec<JsonSection>),
}

#[derive(Deserialize)]
struct JsonSection {
    section: String,
    #[serde(default)]
    items: Vec<String>,
}

impl Catalog {
    /// Reads a catalog from `path`, or stdin when `None`
    pub fn read(path: Option<&Path>) -> Result<Self, ComboError> {
        let contents = match path {
            Some(file_path) => fs::read_to_string(file_path)?,
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ComboError> {
        let trimmed = contents.trim_start();
        let catalog = if trimmed.starts_with('[') {
            Self::parse_json(trimmed)?
        } else {
            Self::parse_text(contents)
        };

        if catalog.items.is_empty() {
            return Err(ComboError::EmptyInput);
        }

        #[cfg(debug_assertions)]
        log::debug!(
            "Catalog: {} items in {} sections",
            catalog.items.len(),
            catalog.sections.len()
        );

        Ok(catalog)
    }

    fn parse_json(contents: &str) -> Result<Self, ComboError> {
        let parsed: JsonCatalog = serde_json::from_str(contents)
            .map_err(|e| ComboError::InvalidEntries(e.to_string()))?;

        let mut catalog = Catalog::default();
        match parsed {
            JsonCatalog::Flat(items) => {
                for text in items {
                    catalog.push_item(None, text);
                }
            }
            JsonCatalog::Sectioned(sections) => {
                for section in sections {
                    let index = catalog.push_section(section.section);
                    for text in section.items {
                        catalog.push_item(Some(index), text);
                    }
                }
            }
        }
        Ok(catalog)
    }

    fn parse_text(contents: &str) -> Self {
        let mut catalog = Catalog::default();
        let mut current = None;

        for line in contents.lines() {
            if let Some(title) = line.strip_prefix(SECTION_PREFIX) {
                current = Some(catalog.push_section(title.trim().to_string()));
                continue;
            }
            if line.trim().is_empty() {
                continue;
            }
            catalog.push_item(current, line.trim_end().to_string());
        }

        catalog
    }

    fn push_section(&mut self, title: String) -> usize {
        let base = slugify(&title);
        let mut id = base.clone();
        let mut suffix = 2;
        while self.sections.iter().any(|s| s.id == id) {
            id = format!("{}-{}", base, suffix);
            suffix += 1;
        }

        self.sections.push(Section { id, title });
        self.sections.len() - 1
    }

    fn push_item(&mut self, section: Option<usize>, text: String) {
        let id = EntryId(self.items.len());
        self.items.push(Item { id, section, text });
    }

    /// Pairs of id and text in document order, ready for the filter
    pub fn entry_texts(&self) -> impl Iterator<Item = (EntryId, &str)> {
        self.items.iter().map(|item| (item.id, item.text.as_str()))
    }

    pub fn section_of(&self, id: EntryId) -> Option<&Section> {
        self.items
            .get(id.0)
            .and_then(|item| item.section)
            .and_then(|index| self.sections.get(index))
    }
}

/// Lowercase alphanumerics joined by single dashes
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        slug.push_str("section");
    }
    slug
}

#[cfg(test)]
#[path = "entries_tests.rs"]
mod entries_tests;
