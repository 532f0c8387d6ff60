//! Sort comparator for document listings.
//!
//! Each sort key maps to an extracted value: numeric for ids, day-precision
//! dates for date columns, lowercased text for everything else. Missing
//! values sort lowest in ascending order. Ties are broken by ascending
//! numeric id regardless of direction, so the order is reproducible across
//! stores and runs.

use std::cmp::Ordering;

use chrono::Datelike;

use super::{SortDir, SortKey, SortSpec};
use crate::models::DocumentRecord;

/// Normalized comparison value. Variant order defines the ordering of
/// mixed extractions: missing values first, then numbers, then text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    Missing,
    Num(i64),
    Text(String),
}

fn extract(record: &DocumentRecord, key: SortKey) -> SortValue {
    match key {
        SortKey::Id => id_value(&record.id),
        SortKey::Number => text_value(Some(record.number.as_str())),
        SortKey::Title => text_value(Some(record.title.as_str())),
        SortKey::DocumentDate => match record.document_date {
            Some(date) => SortValue::Num(i64::from(date.num_days_from_ce())),
            None => SortValue::Missing,
        },
        SortKey::ArchiveName => text_value(record.archive_name.as_deref()),
        SortKey::UpdatedBy => text_value(record.updated_by.as_deref()),
    }
}

/// Ids are numeric in practice; fall back to text when they are not.
fn id_value(id: &str) -> SortValue {
    match id.parse::<i64>() {
        Ok(n) => SortValue::Num(n),
        Err(_) => SortValue::Text(id.to_lowercase()),
    }
}

fn text_value(value: Option<&str>) -> SortValue {
    match value {
        Some(s) if !s.is_empty() => SortValue::Text(s.to_lowercase()),
        _ => SortValue::Missing,
    }
}

/// Total order over records for the given sort choice.
pub fn compare(a: &DocumentRecord, b: &DocumentRecord, spec: SortSpec) -> Ordering {
    let ordering = extract(a, spec.key).cmp(&extract(b, spec.key));
    let directed = match spec.dir {
        SortDir::Asc => ordering,
        SortDir::Desc => ordering.reverse(),
    };
    directed.then_with(|| id_value(&a.id).cmp(&id_value(&b.id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn doc(id: &str, title: &str, date: Option<&str>) -> DocumentRecord {
        DocumentRecord {
            id: id.into(),
            number: format!("N-{id}"),
            title: title.into(),
            description: None,
            document_date: date.and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
            expire_date: None,
            contributors: vec![],
            archive_id: None,
            archive_name: None,
            created_by: None,
            updated_by: None,
        }
    }

    fn sorted(mut docs: Vec<DocumentRecord>, spec: SortSpec) -> Vec<String> {
        docs.sort_by(|a, b| compare(a, b, spec));
        docs.into_iter().map(|d| d.id).collect()
    }

    #[test]
    fn test_id_sorts_numerically() {
        let docs = vec![doc("99", "a", None), doc("100", "b", None), doc("7", "c", None)];
        let spec = SortSpec::new(SortKey::Id, SortDir::Asc);
        assert_eq!(sorted(docs, spec), ["7", "99", "100"]);
    }

    #[test]
    fn test_title_sorts_case_insensitively() {
        let docs = vec![
            doc("1", "beta", None),
            doc("2", "Alpha", None),
            doc("3", "ALPINE", None),
        ];
        let spec = SortSpec::new(SortKey::Title, SortDir::Asc);
        assert_eq!(sorted(docs, spec), ["2", "3", "1"]);
    }

    #[test]
    fn test_missing_date_sorts_lowest_ascending() {
        let docs = vec![
            doc("1", "a", Some("2024-08-22")),
            doc("2", "b", None),
            doc("3", "c", Some("2024-07-01")),
        ];
        let spec = SortSpec::new(SortKey::DocumentDate, SortDir::Asc);
        assert_eq!(sorted(docs, spec), ["2", "3", "1"]);
    }

    #[test]
    fn test_desc_negates_asc() {
        let docs = vec![
            doc("1", "a", Some("2024-08-22")),
            doc("2", "b", Some("2024-07-01")),
            doc("3", "c", Some("2024-09-10")),
        ];
        let asc = sorted(docs.clone(), SortSpec::new(SortKey::DocumentDate, SortDir::Asc));
        let desc = sorted(docs, SortSpec::new(SortKey::DocumentDate, SortDir::Desc));
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_ties_break_by_ascending_id() {
        let docs = vec![
            doc("20", "same", None),
            doc("3", "same", None),
            doc("11", "same", None),
        ];
        let asc = sorted(docs.clone(), SortSpec::new(SortKey::Title, SortDir::Asc));
        assert_eq!(asc, ["3", "11", "20"]);

        // direction flips the key order, not the tie-break
        let desc = sorted(docs, SortSpec::new(SortKey::Title, SortDir::Desc));
        assert_eq!(desc, ["3", "11", "20"]);
    }
}
