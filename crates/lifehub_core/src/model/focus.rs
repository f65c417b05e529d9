//! Focus-timer session model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type SessionId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusSessionKind {
    Focus,
    ShortBreak,
    LongBreak,
}

/// One focus or break interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusSession {
    pub id: SessionId,
    pub start: NaiveDateTime,
    /// Set when the session is ended, completed or not.
    pub end: Option<NaiveDateTime>,
    /// Planned length. Counted toward daily totals only when completed.
    pub duration_minutes: u32,
    pub kind: FocusSessionKind,
    pub was_completed: bool,
    pub note: Option<String>,
}

impl FocusSession {
    pub fn new(kind: FocusSessionKind, duration_minutes: u32, start: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end: None,
            duration_minutes,
            kind,
            was_completed: false,
            note: None,
        }
    }

    /// Completed sessions of kind `Focus` are the only ones that count as focus time.
    pub fn counts_as_focus(&self) -> bool {
        self.kind == FocusSessionKind::Focus && self.was_completed
    }
}
