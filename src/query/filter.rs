//! Filter predicates over document records.
//!
//! Each predicate is independent; a predicate with an empty value is
//! skipped entirely rather than matching nothing. Active predicates are
//! AND'd together, except the relative expiry windows which are OR'd
//! among themselves first.

use std::collections::HashSet;

use chrono::NaiveDate;

use super::{ExpireWindow, ListQuery};
use crate::models::DocumentRecord;

/// A compiled filter: query values normalized once, then applied per record.
#[derive(Debug, Clone)]
pub struct DocumentFilter {
    needle: Option<String>,
    archive_ids: Option<HashSet<String>>,
    contributors: Option<Vec<String>>,
    date_range: Option<(Option<NaiveDate>, Option<NaiveDate>)>,
    expire_range: Option<(Option<NaiveDate>, Option<NaiveDate>)>,
    expire_windows: Option<Vec<ExpireWindow>>,
    today: NaiveDate,
}

impl DocumentFilter {
    pub fn new(query: &ListQuery, today: NaiveDate) -> Self {
        let needle = query
            .q
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .map(|q| q.to_lowercase());

        let archive_ids = if query.archive_ids.is_empty() {
            None
        } else {
            Some(
                query
                    .archive_ids
                    .iter()
                    .filter(|id| !id.is_empty())
                    .cloned()
                    .collect(),
            )
        };

        let contributors = if query.contributors.is_empty() {
            None
        } else {
            Some(
                query
                    .contributors
                    .iter()
                    .map(|c| c.to_lowercase())
                    .collect(),
            )
        };

        let date_range = if query.date_from.is_some() || query.date_to.is_some() {
            Some((query.date_from, query.date_to))
        } else {
            None
        };

        let expire_range = if query.expire_from.is_some() || query.expire_to.is_some() {
            Some((query.expire_from, query.expire_to))
        } else {
            None
        };

        let expire_windows = if query.expire_in.is_empty() {
            None
        } else {
            Some(query.expire_in.clone())
        };

        Self {
            needle,
            archive_ids,
            contributors,
            date_range,
            expire_range,
            expire_windows,
            today,
        }
    }

    /// Whether the record passes every active predicate.
    pub fn matches(&self, record: &DocumentRecord) -> bool {
        if let Some(needle) = &self.needle {
            if !text_matches(record, needle) {
                return false;
            }
        }

        if let Some(ids) = &self.archive_ids {
            match &record.archive_id {
                Some(id) if ids.contains(id) => {}
                _ => return false,
            }
        }

        if let Some(selected) = &self.contributors {
            let any = record
                .contributors
                .iter()
                .any(|c| selected.iter().any(|s| s == &c.to_lowercase()));
            if !any {
                return false;
            }
        }

        if let Some((from, to)) = &self.date_range {
            if !in_range(record.document_date, *from, *to) {
                return false;
            }
        }

        if let Some((from, to)) = &self.expire_range {
            if !in_range(record.expire_date, *from, *to) {
                return false;
            }
        }

        if let Some(windows) = &self.expire_windows {
            let expire = match record.expire_date {
                Some(d) => d,
                None => return false,
            };
            if !windows.iter().any(|w| w.contains(expire, self.today)) {
                return false;
            }
        }

        true
    }
}

/// Case-insensitive substring match over number, title, and description.
fn text_matches(record: &DocumentRecord, needle: &str) -> bool {
    record.number.to_lowercase().contains(needle)
        || record.title.to_lowercase().contains(needle)
        || record
            .description
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(needle)
}

/// Day-precision inclusive range check. A missing date fails closed when
/// the range is active.
fn in_range(date: Option<NaiveDate>, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    let date = match date {
        Some(d) => d,
        None => return false,
    };
    if let Some(from) = from {
        if date < from {
            return false;
        }
    }
    if let Some(to) = to {
        if date > to {
            return false;
        }
    }
    true
}
