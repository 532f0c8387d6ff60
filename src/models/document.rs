//! Document models for archive storage.
//!
//! Documents carry their archive reference denormalized (`archive_id` plus
//! `archive_name`) so listings never need a join.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error decoding a backend DTO into a typed record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected a JSON object")]
    NotAnObject,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// A document stored in an archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// Unique identifier within a query result.
    pub id: String,
    /// Document number (e.g. "SOP-04").
    pub number: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Date the document was issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_date: Option<NaiveDate>,
    /// Date the document expires, if it expires at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_date: Option<NaiveDate>,
    /// Contributor names, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contributors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

impl DocumentRecord {
    /// Decode a loosely shaped backend DTO into a typed record.
    ///
    /// Field names are tried snake_case first, then camelCase. Scalar values
    /// that are not strings are stringified; dates that do not parse as
    /// `YYYY-MM-DD` become `None`. A missing or blank `id` is an error -
    /// a record without identity is unusable downstream.
    pub fn from_dto(dto: &Value) -> Result<Self, DecodeError> {
        let obj = dto.as_object().ok_or(DecodeError::NotAnObject)?;

        let id = text(obj, &["id"]).ok_or(DecodeError::MissingField("id"))?;
        if id.trim().is_empty() {
            return Err(DecodeError::MissingField("id"));
        }

        Ok(Self {
            id,
            number: text(obj, &["number"]).unwrap_or_default(),
            title: text(obj, &["title"]).unwrap_or_default(),
            description: text(obj, &["description"]),
            document_date: date(obj, &["document_date", "documentDate"]),
            expire_date: date(obj, &["expire_date", "expireDate"]),
            contributors: string_list(obj, "contributors"),
            archive_id: text(obj, &["archive_id", "archiveId"]),
            archive_name: text(obj, &["archive_name", "archiveName"]),
            created_by: text(obj, &["created_by", "createdBy"]),
            updated_by: text(obj, &["updated_by", "updatedBy"]),
        })
    }
}

/// Payload for creating a document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub archive_id: String,
    pub number: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub document_date: Option<NaiveDate>,
    #[serde(default)]
    pub expire_date: Option<NaiveDate>,
}

/// First present key wins; scalars are stringified, null counts as absent.
fn text(obj: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<String> {
    for key in keys {
        match obj.get(*key) {
            None | Some(Value::Null) => continue,
            Some(Value::String(s)) => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            Some(Value::Bool(b)) => return Some(b.to_string()),
            Some(_) => continue,
        }
    }
    None
}

fn date(obj: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<NaiveDate> {
    let raw = text(obj, keys)?;
    parse_date(&raw)
}

/// Parse a `YYYY-MM-DD` date, tolerating a trailing time component.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let day = if raw.len() > 10 { &raw[..10] } else { raw };
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn string_list(obj: &serde_json::Map<String, Value>, key: &str) -> Vec<String> {
    match obj.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_snake_case_preferred() {
        let dto = json!({
            "id": 75355,
            "number": "JAJAPWEB",
            "title": "JAJAPWEB",
            "document_date": "2024-08-22",
            "documentDate": "1999-01-01",
            "archive_id": "1",
            "archiveName": "DOKUMENTASIAPLIKASI",
            "contributors": ["Dokumentasi Aplikasi"]
        });

        let doc = DocumentRecord::from_dto(&dto).unwrap();
        assert_eq!(doc.id, "75355");
        assert_eq!(
            doc.document_date,
            NaiveDate::from_ymd_opt(2024, 8, 22)
        );
        assert_eq!(doc.archive_id.as_deref(), Some("1"));
        // camelCase is still accepted when snake_case is absent
        assert_eq!(doc.archive_name.as_deref(), Some("DOKUMENTASIAPLIKASI"));
        assert_eq!(doc.contributors, vec!["Dokumentasi Aplikasi"]);
    }

    #[test]
    fn test_decode_missing_id_is_error() {
        let dto = json!({ "number": "DOC-01", "title": "Dokumen Umum" });
        assert_eq!(
            DocumentRecord::from_dto(&dto),
            Err(DecodeError::MissingField("id"))
        );

        let blank = json!({ "id": "  ", "title": "x" });
        assert_eq!(
            DocumentRecord::from_dto(&blank),
            Err(DecodeError::MissingField("id"))
        );
    }

    #[test]
    fn test_decode_bad_date_becomes_none() {
        let dto = json!({ "id": "1", "document_date": "not-a-date" });
        let doc = DocumentRecord::from_dto(&dto).unwrap();
        assert!(doc.document_date.is_none());
    }

    #[test]
    fn test_decode_datetime_truncated_to_day() {
        let dto = json!({ "id": "1", "expire_date": "2025-03-01T08:30:00Z" });
        let doc = DocumentRecord::from_dto(&dto).unwrap();
        assert_eq!(doc.expire_date, NaiveDate::from_ymd_opt(2025, 3, 1));
    }

    #[test]
    fn test_serializes_camel_case() {
        let doc = DocumentRecord {
            id: "1".into(),
            number: "DOC-01".into(),
            title: "Dokumen Umum".into(),
            description: None,
            document_date: NaiveDate::from_ymd_opt(2024, 7, 1),
            expire_date: None,
            contributors: vec![],
            archive_id: Some("2".into()),
            archive_name: Some("DOKUMENHUMAS".into()),
            created_by: None,
            updated_by: None,
        };

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["documentDate"], "2024-07-01");
        assert_eq!(value["archiveId"], "2");
        assert!(value.get("expireDate").is_none());
    }
}
