//! SQLite-backed record store.
//!
//! Rows load into typed records and listings run through the shared query
//! engine, so SQLite and the in-memory store answer every query the same
//! way. Access is serialized through a mutex; the write volume here is a
//! dashboard's, not a queue's.

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Local, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::info;

use super::{
    parse_datetime, seed, validate_new_archive, validate_new_document, RecordStore, Result,
    StoreError,
};
use crate::models::{
    Archive, DashboardSummary, DocumentRecord, NewArchive, NewDocument, Reminder, UserSummary,
};
use crate::query::{self, ListQuery, ListResult};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS archives (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    alias TEXT,
    slug TEXT,
    parent_id TEXT REFERENCES archives(id),
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- archive_id is a soft reference: imported documents may name archives
-- that only exist in the exporting system, and archive_name travels with
-- the record.
CREATE TABLE IF NOT EXISTS documents (
    id TEXT PRIMARY KEY,
    number TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT,
    document_date TEXT,
    expire_date TEXT,
    contributors TEXT NOT NULL DEFAULT '[]',
    archive_id TEXT,
    archive_name TEXT,
    created_by TEXT,
    updated_by TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_documents_archive ON documents(archive_id);
CREATE INDEX IF NOT EXISTS idx_documents_document_date ON documents(document_date);
CREATE INDEX IF NOT EXISTS idx_documents_expire_date ON documents(expire_date);
";

const DOCUMENT_COLUMNS: &str = "id, number, title, description, document_date, expire_date, \
     contributors, archive_id, archive_name, created_by, updated_by";

/// A record store persisted in a SQLite database file.
pub struct SqliteStore {
    conn: Mutex<Connection>,
    user: UserSummary,
}

impl SqliteStore {
    /// Open (or create) a database file.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(Self {
            conn: Mutex::new(conn),
            user: UserSummary::default(),
        })
    }

    /// Open a throwaway in-memory database.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(Self {
            conn: Mutex::new(conn),
            user: UserSummary::default(),
        })
    }

    /// Create tables and indexes if they do not exist yet.
    pub fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock().expect("db lock poisoned");
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Populate an empty database with the demo dataset. Returns how many
    /// documents were inserted; an already-populated database is left
    /// untouched.
    pub fn seed_demo(&self, count: usize) -> Result<usize> {
        let mut conn = self.conn.lock().expect("db lock poisoned");
        let existing: i64 =
            conn.query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))?;
        if existing > 0 {
            info!("database already has {existing} documents, skipping seed");
            return Ok(0);
        }

        let tx = conn.transaction()?;
        let now = Utc::now().to_rfc3339();
        for archive in seed::archive_options() {
            tx.execute(
                "INSERT INTO archives (id, name, alias, slug, parent_id, created_at, updated_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
                params![
                    archive.id,
                    archive.name,
                    archive.alias,
                    archive.slug,
                    archive.parent_id,
                    now
                ],
            )?;
        }

        let documents = seed::seed_documents(count);
        let inserted = documents.len();
        for doc in &documents {
            insert_document(&tx, doc, &now)?;
        }
        tx.commit()?;

        info!("seeded {inserted} documents");
        Ok(inserted)
    }

    fn load_documents(conn: &Connection) -> rusqlite::Result<Vec<DocumentRecord>> {
        let sql = format!("SELECT {DOCUMENT_COLUMNS} FROM documents");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], row_to_document)?;
        rows.collect()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

fn insert_document(
    conn: &Connection,
    doc: &DocumentRecord,
    now: &str,
) -> rusqlite::Result<usize> {
    conn.execute(
        "INSERT INTO documents (id, number, title, description, document_date, expire_date, \
         contributors, archive_id, archive_name, created_by, updated_by, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?12)",
        params![
            doc.id,
            doc.number,
            doc.title,
            doc.description,
            doc.document_date.map(|d| d.to_string()),
            doc.expire_date.map(|d| d.to_string()),
            serde_json::to_string(&doc.contributors).unwrap_or_else(|_| "[]".into()),
            doc.archive_id,
            doc.archive_name,
            doc.created_by,
            doc.updated_by,
            now
        ],
    )
}

fn row_to_document(row: &Row<'_>) -> rusqlite::Result<DocumentRecord> {
    let contributors: String = row.get(6)?;
    let parse_day =
        |value: Option<String>| value.and_then(|v| NaiveDate::parse_from_str(&v, "%Y-%m-%d").ok());

    Ok(DocumentRecord {
        id: row.get(0)?,
        number: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        document_date: parse_day(row.get(4)?),
        expire_date: parse_day(row.get(5)?),
        contributors: serde_json::from_str(&contributors).unwrap_or_default(),
        archive_id: row.get(7)?,
        archive_name: row.get(8)?,
        created_by: row.get(9)?,
        updated_by: row.get(10)?,
    })
}

fn row_to_archive(row: &Row<'_>) -> rusqlite::Result<Archive> {
    Ok(Archive {
        id: row.get(0)?,
        name: row.get(1)?,
        alias: row.get(2)?,
        slug: row.get(3)?,
        parent_id: row.get(4)?,
    })
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn list(&self, query: &ListQuery) -> Result<ListResult> {
        let documents = {
            let conn = self.conn.lock().expect("db lock poisoned");
            Self::load_documents(&conn)?
        };
        Ok(query::run(documents, query, self.today()))
    }

    async fn get(&self, id: &str) -> Result<Option<DocumentRecord>> {
        let conn = self.conn.lock().expect("db lock poisoned");
        let sql = format!("SELECT {DOCUMENT_COLUMNS} FROM documents WHERE id = ?1");
        let doc = conn
            .query_row(&sql, params![id], row_to_document)
            .optional()?;
        Ok(doc)
    }

    async fn create_document(&self, input: NewDocument) -> Result<DocumentRecord> {
        validate_new_document(&input)?;

        let conn = self.conn.lock().expect("db lock poisoned");
        let archive_name: Option<String> = conn
            .query_row(
                "SELECT name FROM archives WHERE id = ?1",
                params![input.archive_id],
                |row| row.get(0),
            )
            .optional()?;
        let archive_name = archive_name
            .ok_or_else(|| StoreError::NotFound(format!("archive {}", input.archive_id)))?;

        let record = DocumentRecord {
            id: uuid::Uuid::new_v4().to_string(),
            number: input.number,
            title: input.title,
            description: input.description,
            document_date: input.document_date,
            expire_date: input.expire_date,
            contributors: Vec::new(),
            archive_id: Some(input.archive_id),
            archive_name: Some(archive_name),
            created_by: None,
            updated_by: None,
        };
        insert_document(&conn, &record, &Utc::now().to_rfc3339())?;
        Ok(record)
    }

    async fn import_documents(&self, records: Vec<DocumentRecord>) -> Result<usize> {
        let mut conn = self.conn.lock().expect("db lock poisoned");
        let tx = conn.transaction()?;
        let now = Utc::now().to_rfc3339();
        let count = records.len();
        for record in &records {
            insert_document(&tx, record, &now)?;
        }
        tx.commit()?;
        Ok(count)
    }

    async fn archives(&self) -> Result<Vec<Archive>> {
        let conn = self.conn.lock().expect("db lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, name, alias, slug, parent_id FROM archives ORDER BY name",
        )?;
        let rows = stmt.query_map([], row_to_archive)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    async fn create_archive(&self, input: NewArchive) -> Result<Archive> {
        validate_new_archive(&input)?;

        let conn = self.conn.lock().expect("db lock poisoned");
        if let Some(parent_id) = input.parent_id.as_deref() {
            let exists: Option<i64> = conn
                .query_row(
                    "SELECT 1 FROM archives WHERE id = ?1",
                    params![parent_id],
                    |row| row.get(0),
                )
                .optional()?;
            if exists.is_none() {
                return Err(StoreError::NotFound(format!("archive {parent_id}")));
            }
        }

        let archive = Archive {
            id: uuid::Uuid::new_v4().to_string(),
            name: input.name.trim().to_string(),
            alias: None,
            slug: None,
            parent_id: input.parent_id,
        };
        conn.execute(
            "INSERT INTO archives (id, name, alias, slug, parent_id, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
            params![
                archive.id,
                archive.name,
                archive.alias,
                archive.slug,
                archive.parent_id,
                Utc::now().to_rfc3339()
            ],
        )?;
        Ok(archive)
    }

    async fn dashboard(&self) -> Result<DashboardSummary> {
        let conn = self.conn.lock().expect("db lock poisoned");

        let total_docs: i64 =
            conn.query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))?;
        let last_updated: Option<String> = conn.query_row(
            "SELECT MAX(updated_at) FROM documents",
            [],
            |row| row.get(0),
        )?;

        let mut stmt = conn.prepare(
            "SELECT id, name, alias, slug, parent_id FROM archives ORDER BY updated_at DESC",
        )?;
        let archives = stmt
            .query_map([], row_to_archive)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let documents = Self::load_documents(&conn)?;

        Ok(DashboardSummary {
            user: self.user.clone(),
            total_docs: total_docs as u64,
            last_updated: last_updated.as_deref().and_then(parse_datetime),
            archives,
            reminders: Reminder::from_documents(&documents, self.today()),
        })
    }
}
