//! URL query-string codec for [`ListQuery`].
//!
//! The query string is the single source of truth for listing state, so
//! decoding is deliberately forgiving: malformed numbers fall back to
//! defaults, malformed dates and sort tokens are ignored, and page-size
//! accepts the legacy aliases `perPage`, `limit`, and `pageSize` (in that
//! precedence order). Encoding never emits empty values, and unrecognized
//! parameters round-trip unchanged.

use chrono::NaiveDate;

use super::{ExpireWindow, ListQuery, SortSpec, DEFAULT_PER_PAGE};

impl ListQuery {
    /// Decode a raw query string (with or without the leading `?`).
    pub fn decode(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut query = ListQuery::default();

        // alias slots in precedence order: perPage, limit, pageSize
        let mut size_aliases: [Option<String>; 3] = [None, None, None];
        let mut page_raw: Option<String> = None;

        for segment in raw.split('&').filter(|s| !s.is_empty()) {
            let (key, value) = match segment.split_once('=') {
                Some((k, v)) => (decode_component(k), decode_component(v)),
                None => (decode_component(segment), String::new()),
            };

            match key.as_str() {
                "page" => page_raw = Some(value),
                "perPage" => size_aliases[0] = Some(value),
                "limit" => size_aliases[1] = Some(value),
                "pageSize" => size_aliases[2] = Some(value),
                "q" => {
                    if !value.trim().is_empty() {
                        query.q = Some(value);
                    }
                }
                "archiveIds" => query.archive_ids = split_csv(&value),
                "contributors" => query.contributors = split_csv(&value),
                "dateFrom" => query.date_from = parse_date(&value),
                "dateTo" => query.date_to = parse_date(&value),
                "expireFrom" => query.expire_from = parse_date(&value),
                "expireTo" => query.expire_to = parse_date(&value),
                "expireIn" => {
                    query.expire_in = split_csv(&value)
                        .iter()
                        .filter_map(|id| ExpireWindow::parse_id(id))
                        .collect();
                }
                "sort" => query.sort = SortSpec::parse(&value),
                _ => query.extra.push((key, value)),
            }
        }

        query.page = page_raw
            .as_deref()
            .and_then(parse_positive)
            .unwrap_or(1);
        query.per_page = size_aliases
            .iter()
            .flatten()
            .find_map(|v| parse_positive(v))
            .unwrap_or(DEFAULT_PER_PAGE);

        query
    }

    /// Encode back into a query string (no leading `?`).
    ///
    /// Keys whose value is empty or equal to its default are omitted, so a
    /// default query encodes to an empty string. Page size always encodes
    /// under the canonical `perPage` key regardless of which alias it was
    /// decoded from.
    pub fn encode(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if self.page > 1 {
            parts.push(format!("page={}", self.page));
        }
        if self.per_page != DEFAULT_PER_PAGE {
            parts.push(format!("perPage={}", self.per_page));
        }
        if let Some(q) = self.q.as_deref().filter(|q| !q.is_empty()) {
            parts.push(format!("q={}", urlencoding::encode(q)));
        }
        push_csv(&mut parts, "archiveIds", &self.archive_ids);
        push_csv(&mut parts, "contributors", &self.contributors);
        push_date(&mut parts, "dateFrom", self.date_from);
        push_date(&mut parts, "dateTo", self.date_to);
        push_date(&mut parts, "expireFrom", self.expire_from);
        push_date(&mut parts, "expireTo", self.expire_to);

        let window_ids: Vec<String> = self.expire_in.iter().map(|w| w.id()).collect();
        push_csv(&mut parts, "expireIn", &window_ids);

        if let Some(sort) = self.sort {
            parts.push(format!("sort={}", urlencoding::encode(&sort.token())));
        }

        for (key, value) in &self.extra {
            if value.is_empty() {
                continue;
            }
            parts.push(format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            ));
        }

        parts.join("&")
    }
}

/// Percent-decode one component; `+` means space, invalid sequences are
/// kept as-is.
fn decode_component(s: &str) -> String {
    let plus_decoded = s.replace('+', " ");
    match urlencoding::decode(&plus_decoded) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => plus_decoded,
    }
}

fn parse_positive(s: &str) -> Option<usize> {
    s.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

/// Split a comma-joined value, trimming and dropping empty segments.
fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn push_csv(parts: &mut Vec<String>, key: &str, values: &[String]) {
    if values.is_empty() {
        return;
    }
    parts.push(format!("{}={}", key, urlencoding::encode(&values.join(","))));
}

fn push_date(parts: &mut Vec<String>, key: &str, date: Option<NaiveDate>) {
    if let Some(date) = date {
        parts.push(format!("{}={}", key, date.format("%Y-%m-%d")));
    }
}
