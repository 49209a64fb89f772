use crate::entries::Catalog;
use crate::scrollspy::SectionSpan;
use crate::search::{EntryId, FilterList};

/// What occupies one row of the list pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Section header, index into `Catalog::sections`
    Header(usize),
    Item(EntryId),
}

/// Row arrangement of the visible entries. Items without a section come
/// first; every section keeps its header even when all its items are
/// hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListLayout {
    pub rows: Vec<RowKind>,
    /// Row span of every section, in document order
    pub sections: Vec<SectionSpan>,
    /// Row index of each visible item, in display order
    pub item_rows: Vec<usize>,
}

impl ListLayout {
    pub fn build(catalog: &Catalog, filter: &FilterList) -> Self {
        let mut layout = ListLayout::default();
        let is_shown = |id: EntryId| filter.get(id).is_some_and(|e| e.is_visible());

        for item in catalog.items.iter().filter(|item| item.section.is_none()) {
            if is_shown(item.id) {
                layout.push_item(item.id);
            }
        }

        for (index, section) in catalog.sections.iter().enumerate() {
            let top = layout.rows.len();
            layout.rows.push(RowKind::Header(index));

            for item in catalog.items.iter().filter(|item| item.section == Some(index)) {
                if is_shown(item.id) {
                    layout.push_item(item.id);
                }
            }

            layout.sections.push(SectionSpan {
                id: section.id.clone(),
                top: top as u32,
                height: (layout.rows.len() - top) as u32,
            });
        }

        layout
    }

    fn push_item(&mut self, id: EntryId) {
        self.item_rows.push(self.rows.len());
        self.rows.push(RowKind::Item(id));
    }

    pub fn row_count(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn item_count(&self) -> usize {
        self.item_rows.len()
    }

    /// Entry shown at the given position among visible items
    pub fn item_at(&self, position: usize) -> Option<EntryId> {
        let row = *self.item_rows.get(position)?;
        match self.rows[row] {
            RowKind::Item(id) => Some(id),
            RowKind::Header(_) => None,
        }
    }
}
