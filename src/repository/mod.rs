//! Record stores: where documents and archives live.
//!
//! [`RecordStore`] is the seam between the query pipeline and persistence.
//! Both implementations evaluate listings through the shared engine in
//! [`crate::query`], so filter and sort semantics cannot drift between the
//! in-memory store and SQLite.

pub mod memory;
pub mod seed;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{Archive, DashboardSummary, DocumentRecord, NewArchive, NewDocument};
use crate::query::{ListQuery, ListResult};

/// Store-level error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Canonical home of document and archive records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Evaluate a list query: filter, sort, paginate (with clamping).
    async fn list(&self, query: &ListQuery) -> Result<ListResult>;

    /// Fetch a single document.
    async fn get(&self, id: &str) -> Result<Option<DocumentRecord>>;

    /// Create a document inside an existing archive.
    async fn create_document(&self, input: NewDocument) -> Result<DocumentRecord>;

    /// Bulk-insert already-decoded records (used by `import`). Returns the
    /// number of records written.
    async fn import_documents(&self, records: Vec<DocumentRecord>) -> Result<usize>;

    /// All archive folders.
    async fn archives(&self) -> Result<Vec<Archive>>;

    /// Create an archive folder.
    async fn create_archive(&self, input: NewArchive) -> Result<Archive>;

    /// Aggregate data for the dashboard landing page.
    async fn dashboard(&self) -> Result<DashboardSummary>;
}

/// Reject blank required fields on create payloads.
fn require_nonblank(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StoreError::InvalidInput(format!("{field} must not be blank")));
    }
    Ok(())
}

fn validate_new_document(input: &NewDocument) -> Result<()> {
    require_nonblank("archiveId", &input.archive_id)?;
    require_nonblank("number", &input.number)?;
    require_nonblank("title", &input.title)?;
    Ok(())
}

fn validate_new_archive(input: &NewArchive) -> Result<()> {
    require_nonblank("name", &input.name)
}

/// Parse an RFC 3339 timestamp stored as text.
fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
