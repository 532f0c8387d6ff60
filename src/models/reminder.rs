//! Expiry reminders shown on the dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DocumentRecord;

/// How many reminders the dashboard shows at most.
const REMINDER_LIMIT: usize = 10;

/// Days before expiry at which a document becomes urgent.
const DANGER_WINDOW_DAYS: i64 = 7;

/// Days before expiry at which a document first appears as a reminder.
const WARN_WINDOW_DAYS: i64 = 30;

/// Severity of a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warn,
    Danger,
    Success,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Danger => "danger",
            Self::Success => "success",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            "danger" => Some(Self::Danger),
            "success" => Some(Self::Success),
            _ => None,
        }
    }

    /// Display rank: danger first, then warn, then the rest.
    fn rank(&self) -> u8 {
        match self {
            Self::Danger => 1,
            Self::Warn => 2,
            Self::Info | Self::Success => 3,
        }
    }
}

/// A single dashboard reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub severity: Severity,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Days until the document expires; negative once it has.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_left: Option<i64>,
}

impl Reminder {
    /// Build expiry reminders from a document set.
    ///
    /// A document appears once its expiry is within `WARN_WINDOW_DAYS` of
    /// `today` (including already-expired documents), ordered danger before
    /// warn, nearest expiry first, capped at `REMINDER_LIMIT`.
    pub fn from_documents(documents: &[DocumentRecord], today: NaiveDate) -> Vec<Reminder> {
        let mut reminders: Vec<(i64, Reminder)> = documents
            .iter()
            .filter_map(|doc| {
                let expire = doc.expire_date?;
                let days_left = (expire - today).num_days();
                if days_left > WARN_WINDOW_DAYS {
                    return None;
                }

                let severity = if days_left <= DANGER_WINDOW_DAYS {
                    Severity::Danger
                } else {
                    Severity::Warn
                };

                let subtitle = if days_left < 0 {
                    format!("Expired {} day(s) ago", -days_left)
                } else {
                    format!("Expires in {} day(s)", days_left)
                };

                Some((
                    days_left,
                    Reminder {
                        id: doc.id.clone(),
                        severity,
                        title: format!("{} - {}", doc.number, doc.title),
                        subtitle: Some(subtitle),
                        description: doc.description.clone(),
                        days_left: Some(days_left),
                    },
                ))
            })
            .collect();

        reminders.sort_by(|(days_a, a), (days_b, b)| {
            a.severity
                .rank()
                .cmp(&b.severity.rank())
                .then(days_a.cmp(days_b))
        });

        reminders
            .into_iter()
            .take(REMINDER_LIMIT)
            .map(|(_, r)| r)
            .collect()
    }
}
