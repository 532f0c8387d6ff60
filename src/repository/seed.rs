//! Demo dataset: a deterministic fixture of archives and documents.
//!
//! Five hand-written documents plus generated filler across three
//! archives, ids descending from 99000. Tests and the `seed` CLI command
//! both build on this, so the content is stable by design: no clocks, no
//! randomness.

use chrono::{Days, NaiveDate};

use crate::models::{Archive, DocumentRecord};

/// The archive folders of the demo dataset.
pub fn archive_options() -> Vec<Archive> {
    vec![
        Archive::new("1", "DOKUMENTASIAPLIKASI"),
        Archive::new("2", "DOKUMENHUMAS"),
        Archive::new("3", "LEGAL"),
    ]
}

fn base_documents() -> Vec<DocumentRecord> {
    let doc = |id: &str, number: &str, title: &str, description: &str, date: &str| DocumentRecord {
        id: id.into(),
        number: number.into(),
        title: title.into(),
        description: Some(description.into()),
        document_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
        expire_date: None,
        contributors: vec!["Dokumentasi Aplikasi".into()],
        archive_id: Some("1".into()),
        archive_name: Some("DOKUMENTASIAPLIKASI".into()),
        created_by: Some("3082625".into()),
        updated_by: None,
    };

    vec![
        doc("75658", "DTS 3.1", "DTS 3.1", "DTS 3.1", "2024-09-10"),
        doc(
            "75355",
            "JAJAPWEB",
            "JAJAPWEB",
            "Aplikasi Jajap untuk Admin Mengelola Transaksi Jajap",
            "2024-08-22",
        ),
        doc(
            "75353",
            "JAJAPDRIVER",
            "JAJAPDRIVER",
            "Aplikasi Jajap untuk Request Transformasi Area Kawasan Kujang",
            "2024-08-22",
        ),
        doc(
            "75352",
            "APM",
            "APM",
            "Aplikasi Performance Monitoring Management untuk Generate Montly Report",
            "2024-08-22",
        ),
        doc(
            "75351",
            "WEBKUJANGADMIN",
            "WEBKUJANGADMIN",
            "Aplikasi Panel Admin untuk Pengelolaan Website Pupuk Kujang",
            "2024-08-22",
        ),
    ]
}

/// Build the demo document set, `target` records in total, newest id first.
pub fn seed_documents(target: usize) -> Vec<DocumentRecord> {
    let mut documents = base_documents();
    documents.truncate(target);

    let makers: [(&str, &str); 7] = [
        ("DOC", "Dokumen Umum"),
        ("SOP", "Standar Operasional"),
        ("SPK", "Surat Perjanjian Kerja"),
        ("BA", "Berita Acara"),
        ("MEMO", "Memo Internal"),
        ("LAP", "Laporan Bulanan"),
        ("APP", "Aplikasi Internal"),
    ];
    let creators = ["3082625", "3082001", "3081999", "3090007"];
    let archives = archive_options();

    let start_id: i64 = 99000;
    let start_date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

    let mut i: usize = 0;
    while documents.len() < target {
        let (prefix, name) = makers[i % makers.len()];
        let idx = i + 1;
        let document_date = start_date.checked_add_days(Days::new((i % 150) as u64));
        // every seventh document gets an expiry three months out
        let expire_date = if i % 7 == 0 {
            document_date.and_then(|d| d.checked_add_days(Days::new(90)))
        } else {
            None
        };
        let archive = &archives[i % archives.len()];

        documents.push(DocumentRecord {
            id: (start_id - i as i64).to_string(),
            number: format!("{}-{:02}", prefix, idx % 999 + 1),
            title: format!("{name} {idx}"),
            description: Some(format!("{name} nomor {idx} untuk simulasi data dummy.")),
            document_date,
            expire_date,
            contributors: vec!["Dokumentasi Aplikasi".into()],
            archive_id: Some(archive.id.clone()),
            archive_name: Some(archive.name.clone()),
            created_by: Some(creators[i % creators.len()].into()),
            updated_by: None,
        });
        i += 1;
    }

    documents.sort_by(|a, b| {
        let a: i64 = a.id.parse().unwrap_or(0);
        let b: i64 = b.id.parse().unwrap_or(0);
        b.cmp(&a)
    });
    documents
}
