//! View-local state: column visibility, filter selections, view mode.
//!
//! Nothing here touches filtering, sorting, or paging - these types only
//! shape how an already-computed result set is presented.

mod columns;
mod selection;

pub use columns::{ColumnKey, ColumnVisibility};
pub use selection::{summarize, Selection, SummaryOption};

use serde::{Deserialize, Serialize};

/// How the listing is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Grid => "grid",
        }
    }
}
