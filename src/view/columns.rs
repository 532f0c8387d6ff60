//! Per-column show/hide state for the document table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::query::SortKey;

/// Columns of the document table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnKey {
    Id,
    Title,
    Description,
    DocumentDate,
    Contributors,
    ArchiveName,
    UpdatedBy,
}

impl ColumnKey {
    pub fn all() -> [ColumnKey; 7] {
        [
            Self::Id,
            Self::Title,
            Self::Description,
            Self::DocumentDate,
            Self::Contributors,
            Self::ArchiveName,
            Self::UpdatedBy,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Title => "Number & Title",
            Self::Description => "Description",
            Self::DocumentDate => "Document Date",
            Self::Contributors => "Contributors",
            Self::ArchiveName => "Archive",
            Self::UpdatedBy => "Last Updated",
        }
    }

    /// The sort key behind this column's header, if it is sortable.
    pub fn sort_key(&self) -> Option<SortKey> {
        match self {
            Self::Id => Some(SortKey::Id),
            Self::Title => Some(SortKey::Title),
            Self::DocumentDate => Some(SortKey::DocumentDate),
            Self::ArchiveName => Some(SortKey::ArchiveName),
            Self::UpdatedBy => Some(SortKey::UpdatedBy),
            Self::Description | Self::Contributors => None,
        }
    }
}

/// The set of currently hidden columns.
///
/// Independent of the list query: hiding a column never changes which
/// rows come back or how they are ordered. State lives for the view
/// session and only an explicit [`reset`](Self::reset) restores it.
#[derive(Debug, Clone, Default)]
pub struct ColumnVisibility {
    hidden: HashSet<ColumnKey>,
}

impl ColumnVisibility {
    /// All columns visible.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hide(&mut self, key: ColumnKey) {
        self.hidden.insert(key);
    }

    pub fn show(&mut self, key: ColumnKey) {
        self.hidden.remove(&key);
    }

    pub fn toggle(&mut self, key: ColumnKey) {
        if !self.hidden.remove(&key) {
            self.hidden.insert(key);
        }
    }

    /// Back to all-visible.
    pub fn reset(&mut self) {
        self.hidden.clear();
    }

    pub fn is_visible(&self, key: ColumnKey) -> bool {
        !self.hidden.contains(&key)
    }

    pub fn hidden_count(&self) -> usize {
        self.hidden.len()
    }

    /// The visible columns, in table order.
    pub fn visible(&self) -> Vec<ColumnKey> {
        ColumnKey::all()
            .into_iter()
            .filter(|key| self.is_visible(*key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_all_visible() {
        let columns = ColumnVisibility::new();
        assert!(ColumnKey::all().iter().all(|k| columns.is_visible(*k)));
        assert_eq!(columns.hidden_count(), 0);
    }

    #[test]
    fn test_hide_and_reset() {
        let mut columns = ColumnVisibility::new();
        columns.hide(ColumnKey::Description);
        columns.hide(ColumnKey::Contributors);

        assert!(!columns.is_visible(ColumnKey::Description));
        assert!(columns.is_visible(ColumnKey::Title));
        assert_eq!(columns.hidden_count(), 2);
        assert_eq!(columns.visible().len(), 5);

        columns.reset();
        assert_eq!(columns.hidden_count(), 0);
    }

    #[test]
    fn test_toggle_flips() {
        let mut columns = ColumnVisibility::new();
        columns.toggle(ColumnKey::ArchiveName);
        assert!(!columns.is_visible(ColumnKey::ArchiveName));
        columns.toggle(ColumnKey::ArchiveName);
        assert!(columns.is_visible(ColumnKey::ArchiveName));
    }

    #[test]
    fn test_sortable_columns() {
        assert_eq!(ColumnKey::Contributors.sort_key(), None);
        assert_eq!(ColumnKey::Title.sort_key(), Some(SortKey::Title));
    }
}
