//! The document list query pipeline.
//!
//! A [`ListQuery`] carries every parameter driving a listing: filters,
//! sort, and paging. It round-trips through the URL query string via
//! [`codec`], and [`run`] evaluates it against a flat record set:
//! filter, then sort, then paginate (with page clamping).

pub mod codec;
mod expire;
mod filter;
mod paginate;
mod sort;

pub use expire::{default_expire_options, ExpireUnit, ExpireWindow};
pub use filter::DocumentFilter;
pub use paginate::{paginate, total_pages};
pub use sort::compare;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::DocumentRecord;

/// Default page size when none is requested.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Sortable fields of a document listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Id,
    Number,
    Title,
    DocumentDate,
    ArchiveName,
    UpdatedBy,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Number => "number",
            Self::Title => "title",
            Self::DocumentDate => "documentDate",
            Self::ArchiveName => "archiveName",
            Self::UpdatedBy => "updatedBy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "id" => Some(Self::Id),
            "number" => Some(Self::Number),
            "title" => Some(Self::Title),
            "documentDate" => Some(Self::DocumentDate),
            "archiveName" => Some(Self::ArchiveName),
            "updatedBy" => Some(Self::UpdatedBy),
            _ => None,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// A concrete sort choice: which column, which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub dir: SortDir,
}

impl SortSpec {
    pub fn new(key: SortKey, dir: SortDir) -> Self {
        Self { key, dir }
    }

    /// Parse a `field:dir` token (e.g. `title:asc`).
    pub fn parse(token: &str) -> Option<Self> {
        let (field, dir) = token.split_once(':')?;
        Some(Self {
            key: SortKey::from_str(field)?,
            dir: SortDir::from_str(dir)?,
        })
    }

    /// Render as a `field:dir` token.
    pub fn token(&self) -> String {
        format!("{}:{}", self.key.as_str(), self.dir.as_str())
    }
}

/// Listing order used when no column is explicitly chosen.
pub const DEFAULT_SORT: SortSpec = SortSpec {
    key: SortKey::DocumentDate,
    dir: SortDir::Desc,
};

/// Every parameter driving a document listing.
///
/// Owned by the page URL: [`codec`] keeps this struct and the query
/// string in sync. Unrecognized query parameters are preserved in
/// `extra` so round-tripping never drops them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: usize,
    pub per_page: usize,
    /// Free-text needle matched against number, title, and description.
    pub q: Option<String>,
    /// Archive ids to include; empty means no archive filter.
    pub archive_ids: Vec<String>,
    /// Contributor names to include; empty means no contributor filter.
    pub contributors: Vec<String>,
    /// Inclusive document-date range bounds.
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    /// Inclusive expire-date range bounds.
    pub expire_from: Option<NaiveDate>,
    pub expire_to: Option<NaiveDate>,
    /// Relative expiry windows; a record passes if it matches any of them.
    pub expire_in: Vec<ExpireWindow>,
    /// Explicit sort choice. `None` still sorts by [`DEFAULT_SORT`],
    /// but no column is highlighted.
    pub sort: Option<SortSpec>,
    /// Unrecognized query parameters, passed through unchanged.
    pub extra: Vec<(String, String)>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            q: None,
            archive_ids: Vec::new(),
            contributors: Vec::new(),
            date_from: None,
            date_to: None,
            expire_from: None,
            expire_to: None,
            expire_in: Vec::new(),
            sort: None,
            extra: Vec::new(),
        }
    }
}

impl ListQuery {
    /// The order actually applied to results.
    pub fn effective_sort(&self) -> SortSpec {
        self.sort.unwrap_or(DEFAULT_SORT)
    }

    /// Move to another page, keeping everything else.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Change the page size. Resets the page to 1, because the old page
    /// number is meaningless under a different row window.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self.page = 1;
        self
    }
}

/// A page of records plus paging totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResult<T = DocumentRecord> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    /// Count after filtering, before paging.
    pub total_items: usize,
    pub total_pages: usize,
}

/// Evaluate a query against a flat record set.
///
/// `today` anchors the relative expiry windows; callers pass the current
/// date, tests pass a fixed one.
pub fn run(records: Vec<DocumentRecord>, query: &ListQuery, today: NaiveDate) -> ListResult {
    let filter = DocumentFilter::new(query, today);
    let mut filtered: Vec<DocumentRecord> = records
        .into_iter()
        .filter(|record| filter.matches(record))
        .collect();

    let spec = query.effective_sort();
    filtered.sort_by(|a, b| compare(a, b, spec));

    paginate(filtered, query.page, query.per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_spec_token_round_trip() {
        let spec = SortSpec::new(SortKey::Title, SortDir::Asc);
        assert_eq!(spec.token(), "title:asc");
        assert_eq!(SortSpec::parse("title:asc"), Some(spec));
        assert_eq!(SortSpec::parse("title"), None);
        assert_eq!(SortSpec::parse("title:sideways"), None);
        assert_eq!(SortSpec::parse("size:asc"), None);
    }

    #[test]
    fn test_effective_sort_defaults_to_document_date_desc() {
        let query = ListQuery::default();
        assert_eq!(query.sort, None);
        assert_eq!(query.effective_sort(), DEFAULT_SORT);
    }

    #[test]
    fn test_with_per_page_resets_page() {
        let query = ListQuery::default().with_page(7).with_per_page(50);
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 50);
    }
}
