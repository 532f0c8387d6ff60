//! Document listing command.

use anyhow::bail;
use chrono::NaiveDate;
use console::style;

use crate::config::Settings;
use crate::query::{ExpireWindow, ListQuery, SortSpec};
use crate::repository::RecordStore;

/// Flags for `arkiv list`.
pub struct ListArgs {
    pub q: Option<String>,
    pub archives: Vec<String>,
    pub contributors: Vec<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub expires_in: Vec<String>,
    pub sort: Option<String>,
    pub page: usize,
    pub per_page: usize,
    pub json: bool,
}

/// List documents to the terminal.
pub async fn cmd_list(settings: &Settings, args: ListArgs) -> anyhow::Result<()> {
    let query = build_query(&args)?;
    let store = settings.create_store()?;
    let result = store.list(&query).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.items.is_empty() {
        println!("{} No documents matched", style("→").cyan());
        return Ok(());
    }

    println!(
        "{:<8} {:<16} {:<34} {:<12} {}",
        style("ID").bold(),
        style("NUMBER").bold(),
        style("TITLE").bold(),
        style("DATE").bold(),
        style("ARCHIVE").bold()
    );
    for doc in &result.items {
        println!(
            "{:<8} {:<16} {:<34} {:<12} {}",
            doc.id,
            truncate(&doc.number, 16),
            truncate(&doc.title, 34),
            doc.document_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".into()),
            doc.archive_name.as_deref().unwrap_or("-")
        );
    }
    println!(
        "\nPage {} of {} ({} documents)",
        result.page, result.total_pages, result.total_items
    );
    Ok(())
}

/// Translate CLI flags into a list query. Unlike the URL codec, flags are
/// explicit user input, so malformed values are errors instead of silent
/// fallbacks.
fn build_query(args: &ListArgs) -> anyhow::Result<ListQuery> {
    let mut query = ListQuery::default().with_per_page(args.per_page).with_page(args.page);
    query.q = args.q.clone();
    query.archive_ids = args.archives.clone();
    query.contributors = args.contributors.clone();
    query.date_from = parse_day(args.from.as_deref())?;
    query.date_to = parse_day(args.to.as_deref())?;

    for id in &args.expires_in {
        match ExpireWindow::parse_id(id) {
            Some(window) => query.expire_in.push(window),
            None => bail!("invalid expiry window {id:?} (expected m-N, w-N, or d-N)"),
        }
    }

    if let Some(token) = args.sort.as_deref() {
        match SortSpec::parse(token) {
            Some(spec) => query.sort = Some(spec),
            None => bail!("invalid sort {token:?} (expected field:asc or field:desc)"),
        }
    }

    Ok(query)
}

fn parse_day(value: Option<&str>) -> anyhow::Result<Option<NaiveDate>> {
    match value {
        None => Ok(None),
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Ok(Some(date)),
            Err(_) => bail!("invalid date {raw:?} (expected YYYY-MM-DD)"),
        },
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{SortDir, SortKey};

    fn args() -> ListArgs {
        ListArgs {
            q: None,
            archives: vec![],
            contributors: vec![],
            from: None,
            to: None,
            expires_in: vec![],
            sort: None,
            page: 1,
            per_page: 10,
            json: false,
        }
    }

    #[test]
    fn test_build_query_maps_flags() {
        let mut a = args();
        a.q = Some("jajap".into());
        a.archives = vec!["1".into()];
        a.sort = Some("title:desc".into());
        a.page = 3;

        let query = build_query(&a).unwrap();
        assert_eq!(query.q.as_deref(), Some("jajap"));
        assert_eq!(query.archive_ids, ["1"]);
        assert_eq!(
            query.sort,
            Some(SortSpec::new(SortKey::Title, SortDir::Desc))
        );
        assert_eq!(query.page, 3);
    }

    #[test]
    fn test_build_query_rejects_bad_input() {
        let mut a = args();
        a.sort = Some("title".into());
        assert!(build_query(&a).is_err());

        let mut a = args();
        a.from = Some("today".into());
        assert!(build_query(&a).is_err());

        let mut a = args();
        a.expires_in = vec!["y-2".into()];
        assert!(build_query(&a).is_err());
    }
}
