//! In-memory record store.
//!
//! Explicitly constructed and injectable - there is no lazy global
//! dataset. Tests and the demo server create one instance and hand it to
//! whoever needs it.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{Local, NaiveDate};

use super::{
    seed, validate_new_archive, validate_new_document, RecordStore, Result, StoreError,
};
use crate::models::{
    Archive, DashboardSummary, DocumentRecord, NewArchive, NewDocument, Reminder, UserSummary,
};
use crate::query::{self, ListQuery, ListResult};

struct Inner {
    documents: Vec<DocumentRecord>,
    archives: Vec<Archive>,
}

/// A record store backed by plain vectors.
pub struct MemoryStore {
    inner: RwLock<Inner>,
    user: UserSummary,
}

impl MemoryStore {
    /// Create a store over the given records.
    pub fn new(documents: Vec<DocumentRecord>, archives: Vec<Archive>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                documents,
                archives,
            }),
            user: UserSummary::default(),
        }
    }

    /// An empty store.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// A store pre-populated with the demo dataset.
    pub fn with_seed(count: usize) -> Self {
        Self::new(seed::seed_documents(count), seed::archive_options())
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list(&self, query: &ListQuery) -> Result<ListResult> {
        let documents = {
            let inner = self.inner.read().expect("store lock poisoned");
            inner.documents.clone()
        };
        Ok(query::run(documents, query, self.today()))
    }

    async fn get(&self, id: &str) -> Result<Option<DocumentRecord>> {
        let inner = self.inner.read().expect("store lock poisoned");
        Ok(inner.documents.iter().find(|d| d.id == id).cloned())
    }

    async fn create_document(&self, input: NewDocument) -> Result<DocumentRecord> {
        validate_new_document(&input)?;

        let mut inner = self.inner.write().expect("store lock poisoned");
        let archive = inner
            .archives
            .iter()
            .find(|a| a.id == input.archive_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("archive {}", input.archive_id)))?;

        let record = DocumentRecord {
            id: uuid::Uuid::new_v4().to_string(),
            number: input.number,
            title: input.title,
            description: input.description,
            document_date: input.document_date,
            expire_date: input.expire_date,
            contributors: Vec::new(),
            archive_id: Some(archive.id),
            archive_name: Some(archive.name),
            created_by: None,
            updated_by: None,
        };
        inner.documents.push(record.clone());
        Ok(record)
    }

    async fn import_documents(&self, records: Vec<DocumentRecord>) -> Result<usize> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let count = records.len();
        inner.documents.extend(records);
        Ok(count)
    }

    async fn archives(&self) -> Result<Vec<Archive>> {
        let inner = self.inner.read().expect("store lock poisoned");
        Ok(inner.archives.clone())
    }

    async fn create_archive(&self, input: NewArchive) -> Result<Archive> {
        validate_new_archive(&input)?;

        let mut inner = self.inner.write().expect("store lock poisoned");
        let archive = Archive {
            id: uuid::Uuid::new_v4().to_string(),
            name: input.name.trim().to_string(),
            alias: None,
            slug: None,
            parent_id: input.parent_id,
        };
        inner.archives.push(archive.clone());
        Ok(archive)
    }

    async fn dashboard(&self) -> Result<DashboardSummary> {
        let inner = self.inner.read().expect("store lock poisoned");
        Ok(DashboardSummary {
            user: self.user.clone(),
            total_docs: inner.documents.len() as u64,
            last_updated: None,
            archives: inner.archives.clone(),
            reminders: Reminder::from_documents(&inner.documents, self.today()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{SortDir, SortKey, SortSpec};

    #[tokio::test]
    async fn test_list_first_page_of_seed() {
        let store = MemoryStore::with_seed(200);
        let result = store.list(&ListQuery::default()).await.unwrap();

        assert_eq!(result.total_items, 200);
        assert_eq!(result.total_pages, 20);
        assert_eq!(result.items.len(), 10);
    }

    #[tokio::test]
    async fn test_empty_store_lists_empty_first_page() {
        let store = MemoryStore::empty();
        let result = store.list(&ListQuery::default()).await.unwrap();
        assert_eq!(result.total_items, 0);
        assert_eq!(result.total_pages, 1);
        assert!(result.items.is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let store = MemoryStore::with_seed(200);
        let doc = store.get("75355").await.unwrap().unwrap();
        assert_eq!(doc.number, "JAJAPWEB");

        assert!(store.get("does-not-exist").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_document_appears_in_listing() {
        let store = MemoryStore::with_seed(10);
        let created = store
            .create_document(NewDocument {
                archive_id: "3".into(),
                number: "SPK-99".into(),
                title: "Perjanjian Baru".into(),
                description: None,
                document_date: None,
                expire_date: None,
            })
            .await
            .unwrap();

        assert_eq!(created.archive_name.as_deref(), Some("LEGAL"));

        let mut query = ListQuery::default();
        query.q = Some("Perjanjian Baru".into());
        let result = store.list(&query).await.unwrap();
        assert_eq!(result.total_items, 1);
        assert_eq!(result.items[0].id, created.id);
    }

    #[tokio::test]
    async fn test_create_document_requires_known_archive() {
        let store = MemoryStore::with_seed(10);
        let err = store
            .create_document(NewDocument {
                archive_id: "999".into(),
                number: "X-1".into(),
                title: "Nowhere".into(),
                description: None,
                document_date: None,
                expire_date: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_document_rejects_blank_title() {
        let store = MemoryStore::with_seed(10);
        let err = store
            .create_document(NewDocument {
                archive_id: "1".into(),
                number: "X-1".into(),
                title: "   ".into(),
                description: None,
                document_date: None,
                expire_date: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_sorted_listing_respects_query() {
        let store = MemoryStore::with_seed(200);
        let mut query = ListQuery::default();
        query.sort = Some(SortSpec::new(SortKey::Id, SortDir::Asc));
        let result = store.list(&query).await.unwrap();

        let first: i64 = result.items[0].id.parse().unwrap();
        let second: i64 = result.items[1].id.parse().unwrap();
        assert!(first < second);
    }

    #[tokio::test]
    async fn test_dashboard_totals() {
        let store = MemoryStore::with_seed(200);
        let dashboard = store.dashboard().await.unwrap();
        assert_eq!(dashboard.total_docs, 200);
        assert_eq!(dashboard.archives.len(), 3);
    }
}
