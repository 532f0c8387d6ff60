//! Dashboard summary types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Archive, Reminder};

/// The user shown on the dashboard greeting card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl Default for UserSummary {
    fn default() -> Self {
        Self {
            id: "0".into(),
            name: "Personal".into(),
            employee_no: None,
            department: None,
        }
    }
}

/// Aggregate data for the dashboard landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub user: UserSummary,
    pub total_docs: u64,
    /// When any document was last written, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    pub archives: Vec<Archive>,
    pub reminders: Vec<Reminder>,
}
