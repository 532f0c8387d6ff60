//! JSON document import command.

use std::path::Path;

use anyhow::{bail, Context};
use console::style;

use crate::config::Settings;
use crate::models::DocumentRecord;
use crate::repository::RecordStore;

/// Import documents from a JSON file.
///
/// The file holds an array of document objects in whatever field-name
/// convention the exporting backend used; each entry goes through the
/// DTO decoder, and the first undecodable entry aborts the import before
/// anything is written.
pub async fn cmd_import(settings: &Settings, file: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("cannot read {}", file.display()))?;
    let records = decode_file(&raw)?;

    if records.is_empty() {
        println!("{} Nothing to import", style("→").cyan());
        return Ok(());
    }

    let store = settings.create_store()?;
    let imported = store.import_documents(records).await?;

    println!(
        "{} Imported {} documents into {}",
        style("✓").green(),
        imported,
        settings.database_path.display()
    );
    Ok(())
}

/// Parse and decode the whole file, reporting the index of the first bad
/// entry.
fn decode_file(raw: &str) -> anyhow::Result<Vec<DocumentRecord>> {
    let value: serde_json::Value = serde_json::from_str(raw).context("invalid JSON")?;
    let entries = match value.as_array() {
        Some(entries) => entries,
        None => bail!("expected a JSON array of documents"),
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let record = DocumentRecord::from_dto(entry)
            .with_context(|| format!("entry {index} is not a valid document"))?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_file_mixed_conventions() {
        let raw = r#"[
            {"id": "1", "number": "DOC-01", "title": "A", "document_date": "2024-07-01"},
            {"id": 2, "number": "DOC-02", "title": "B", "documentDate": "2024-07-02"}
        ]"#;

        let records = decode_file(raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id, "2");
        assert!(records[1].document_date.is_some());
    }

    #[test]
    fn test_decode_file_reports_bad_entry() {
        let raw = r#"[{"id": "1", "title": "ok"}, {"title": "no id"}]"#;
        let err = decode_file(raw).unwrap_err();
        assert!(err.to_string().contains("entry 1"));
    }

    #[test]
    fn test_decode_file_rejects_non_array() {
        assert!(decode_file("{}").is_err());
        assert!(decode_file("not json").is_err());
    }
}
