//! Calendar event model.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::task::LOCAL_SOURCE;

pub type EventId = Uuid;

/// Display color used when the caller does not pick one.
pub const DEFAULT_EVENT_COLOR: &str = "#4A90E2";

/// Calendar entry from any source.
///
/// `end` is expected to be on or after `start`, but nothing checks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub location: String,
    /// Hex display color, e.g. `#E94B3C`.
    pub color: String,
    pub source: String,
    pub is_all_day: bool,
    pub meeting_url: Option<String>,
}

impl CalendarEvent {
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            start,
            end,
            location: String::new(),
            color: DEFAULT_EVENT_COLOR.to_string(),
            source: LOCAL_SOURCE.to_string(),
            is_all_day: false,
            meeting_url: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}
