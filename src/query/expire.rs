//! Relative expiry windows ("expires within N months/weeks/days").

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Unit of a relative expiry window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpireUnit {
    Month,
    Week,
    Day,
}

impl ExpireUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
        }
    }

    /// One-letter abbreviation used in badges ("3M", "2W", "7D").
    pub fn short(&self) -> &'static str {
        match self {
            Self::Month => "M",
            Self::Week => "W",
            Self::Day => "D",
        }
    }

    fn id_prefix(&self) -> char {
        match self {
            Self::Month => 'm',
            Self::Week => 'w',
            Self::Day => 'd',
        }
    }
}

/// A window of time from "now": documents expiring inside it match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpireWindow {
    pub unit: ExpireUnit,
    pub amount: u32,
}

impl ExpireWindow {
    pub fn new(unit: ExpireUnit, amount: u32) -> Self {
        Self { unit, amount }
    }

    /// Stable option id, e.g. `m-3`, `w-2`, `d-7`.
    pub fn id(&self) -> String {
        format!("{}-{}", self.unit.id_prefix(), self.amount)
    }

    /// Parse an option id produced by [`ExpireWindow::id`].
    pub fn parse_id(s: &str) -> Option<Self> {
        let (prefix, amount) = s.split_once('-')?;
        let unit = match prefix {
            "m" => ExpireUnit::Month,
            "w" => ExpireUnit::Week,
            "d" => ExpireUnit::Day,
            _ => return None,
        };
        let amount: u32 = amount.parse().ok()?;
        if amount == 0 {
            return None;
        }
        Some(Self { unit, amount })
    }

    /// Full label, e.g. "In 3 Months".
    pub fn label(&self) -> String {
        let plural = if self.amount > 1 { "s" } else { "" };
        let unit = match self.unit {
            ExpireUnit::Month => "Month",
            ExpireUnit::Week => "Week",
            ExpireUnit::Day => "Day",
        };
        format!("In {} {}{}", self.amount, unit, plural)
    }

    /// Badge label, e.g. "In 3M".
    pub fn short_label(&self) -> String {
        format!("In {}{}", self.amount, self.unit.short())
    }

    /// Last day (inclusive) of the window starting at `from`.
    pub fn end_date(&self, from: NaiveDate) -> NaiveDate {
        match self.unit {
            ExpireUnit::Month => from
                .checked_add_months(Months::new(self.amount))
                .unwrap_or(from),
            ExpireUnit::Week => from
                .checked_add_days(Days::new(u64::from(self.amount) * 7))
                .unwrap_or(from),
            ExpireUnit::Day => from
                .checked_add_days(Days::new(u64::from(self.amount)))
                .unwrap_or(from),
        }
    }

    /// Whether `date` falls inside `[today, today + window]`.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        date >= today && date <= self.end_date(today)
    }
}

/// The window choices offered by the filter UI: 6..1 months, 3..1 weeks,
/// 7..1 days.
pub fn default_expire_options() -> Vec<ExpireWindow> {
    let mut options = Vec::with_capacity(16);
    for m in (1..=6).rev() {
        options.push(ExpireWindow::new(ExpireUnit::Month, m));
    }
    for w in (1..=3).rev() {
        options.push(ExpireWindow::new(ExpireUnit::Week, w));
    }
    for d in (1..=7).rev() {
        options.push(ExpireWindow::new(ExpireUnit::Day, d));
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for window in default_expire_options() {
            assert_eq!(ExpireWindow::parse_id(&window.id()), Some(window));
        }
        assert_eq!(ExpireWindow::parse_id("y-1"), None);
        assert_eq!(ExpireWindow::parse_id("m-0"), None);
        assert_eq!(ExpireWindow::parse_id("m-"), None);
        assert_eq!(ExpireWindow::parse_id("3"), None);
    }

    #[test]
    fn test_labels() {
        let one_month = ExpireWindow::new(ExpireUnit::Month, 1);
        assert_eq!(one_month.label(), "In 1 Month");
        assert_eq!(one_month.short_label(), "In 1M");

        let three_weeks = ExpireWindow::new(ExpireUnit::Week, 3);
        assert_eq!(three_weeks.label(), "In 3 Weeks");
        assert_eq!(three_weeks.short_label(), "In 3W");
    }

    #[test]
    fn test_window_bounds_inclusive() {
        let today = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        let window = ExpireWindow::new(ExpireUnit::Week, 2);

        assert!(window.contains(today, today));
        assert!(window.contains(NaiveDate::from_ymd_opt(2024, 8, 15).unwrap(), today));
        assert!(!window.contains(NaiveDate::from_ymd_opt(2024, 8, 16).unwrap(), today));
        // already expired
        assert!(!window.contains(NaiveDate::from_ymd_opt(2024, 7, 31).unwrap(), today));
    }

    #[test]
    fn test_month_window_uses_calendar_months() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let window = ExpireWindow::new(ExpireUnit::Month, 1);
        // Jan 31 + 1 month clamps to Feb 29 (2024 is a leap year)
        assert_eq!(
            window.end_date(today),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_default_options_shape() {
        let options = default_expire_options();
        assert_eq!(options.len(), 16);
        assert_eq!(options[0].id(), "m-6");
        assert_eq!(options[6].id(), "w-3");
        assert_eq!(options[15].id(), "d-1");
    }
}
