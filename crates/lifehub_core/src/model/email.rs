//! Email digest model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Aggregated inbox digest shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSummary {
    pub unread_count: u32,
    pub summary: String,
    pub key_emails: Vec<EmailItem>,
    pub generated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailItem {
    pub from: String,
    pub subject: String,
    pub snippet: String,
    pub received_at: NaiveDateTime,
    pub is_important: bool,
}
