//! Data models for Arkiv.

mod archive;
mod dashboard;
mod document;
mod reminder;

pub use archive::{Archive, NewArchive};
pub use dashboard::{DashboardSummary, UserSummary};
pub use document::{DecodeError, DocumentRecord, NewDocument};
pub use reminder::{Reminder, Severity};
