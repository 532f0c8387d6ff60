//! Multi-select filter state and its badge summary.
//!
//! Each filter popover owns a transient [`Selection`] while open; the ids
//! are committed into the list query on apply and discarded on close.

use std::collections::HashSet;

use crate::models::Archive;
use crate::query::ExpireWindow;

/// One selectable option, as the summary formatter sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOption {
    pub id: String,
    pub name: String,
    pub alias: Option<String>,
}

impl From<&Archive> for SummaryOption {
    fn from(archive: &Archive) -> Self {
        Self {
            id: archive.id.clone(),
            name: archive.name.clone(),
            alias: archive.alias.clone(),
        }
    }
}

impl From<&ExpireWindow> for SummaryOption {
    fn from(window: &ExpireWindow) -> Self {
        Self {
            id: window.id(),
            name: window.label(),
            alias: Some(window.short_label()),
        }
    }
}

/// Badge text for a set of selected option ids.
///
/// Empty selection shows no badge; a full selection reads "All"; a single
/// selection shows the option's label (alias preferred); anything else is
/// the count. A single id that matches no option also falls back to the
/// count.
pub fn summarize(selected: &HashSet<String>, options: &[SummaryOption]) -> String {
    if selected.is_empty() {
        return String::new();
    }
    if selected.len() == options.len() && !options.is_empty() {
        return "All".to_string();
    }
    if selected.len() == 1 {
        if let Some(id) = selected.iter().next() {
            return match options.iter().find(|o| &o.id == id) {
                Some(option) => match option.alias.as_deref() {
                    Some(alias) if !alias.is_empty() => alias.to_string(),
                    _ => option.name.clone(),
                },
                None => "1".to_string(),
            };
        }
    }
    selected.len().to_string()
}

/// Transient selection state for a filter popover.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the ids already applied to the query.
    pub fn from_ids<I: IntoIterator<Item = String>>(ids: I) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn select_all(&mut self, options: &[SummaryOption]) {
        self.ids = options.iter().map(|o| o.id.clone()).collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The ids to commit into the query on apply.
    pub fn apply(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn summary(&self, options: &[SummaryOption]) -> String {
        summarize(&self.ids, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::default_expire_options;

    fn archive_options() -> Vec<SummaryOption> {
        vec![
            SummaryOption {
                id: "1".into(),
                name: "Legal".into(),
                alias: None,
            },
            SummaryOption {
                id: "2".into(),
                name: "DOKUMENHUMAS".into(),
                alias: Some("Humas".into()),
            },
            SummaryOption {
                id: "3".into(),
                name: "DOKUMENTASIAPLIKASI".into(),
                alias: None,
            },
        ]
    }

    #[test]
    fn test_empty_selection_has_no_badge() {
        let selection = Selection::new();
        assert_eq!(selection.summary(&archive_options()), "");
    }

    #[test]
    fn test_full_selection_reads_all() {
        let mut selection = Selection::new();
        selection.select_all(&archive_options());
        assert_eq!(selection.summary(&archive_options()), "All");
    }

    #[test]
    fn test_single_selection_shows_label() {
        let options = archive_options();

        let one = Selection::from_ids(["1".to_string()]);
        assert_eq!(one.summary(&options), "Legal");

        // alias wins over name
        let two = Selection::from_ids(["2".to_string()]);
        assert_eq!(two.summary(&options), "Humas");

        // unknown id falls back to the count
        let ghost = Selection::from_ids(["99".to_string()]);
        assert_eq!(ghost.summary(&options), "1");
    }

    #[test]
    fn test_partial_selection_shows_count() {
        let selection = Selection::from_ids(["1".to_string(), "3".to_string()]);
        assert_eq!(selection.summary(&archive_options()), "2");
    }

    #[test]
    fn test_archive_options_become_summary_options() {
        let archives = crate::repository::seed::archive_options();
        let options: Vec<SummaryOption> = archives.iter().map(SummaryOption::from).collect();

        let one = Selection::from_ids(["3".to_string()]);
        assert_eq!(one.summary(&options), "LEGAL");
    }

    #[test]
    fn test_expire_window_summary_uses_short_label() {
        let options: Vec<SummaryOption> = default_expire_options()
            .iter()
            .map(SummaryOption::from)
            .collect();

        let one = Selection::from_ids(["m-3".to_string()]);
        assert_eq!(one.summary(&options), "In 3M");

        let mut all = Selection::new();
        all.select_all(&options);
        assert_eq!(all.summary(&options), "All");
    }

    #[test]
    fn test_toggle_lifecycle() {
        let mut selection = Selection::new();
        selection.toggle("1");
        selection.toggle("2");
        assert!(selection.is_selected("1"));
        assert_eq!(selection.len(), 2);

        selection.toggle("1");
        assert!(!selection.is_selected("1"));

        assert_eq!(selection.apply(), ["2"]);

        selection.clear();
        assert!(selection.is_empty());
    }
}
