//! Free-form note model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type NoteId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// Short heading; empty for quick jots.
    pub title: String,
    pub content: String,
    /// Refreshed by the note service on every stored update.
    pub modified_at: NaiveDateTime,
}

impl Note {
    pub fn new(content: impl Into<String>, modified_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            content: content.into(),
            modified_at,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
