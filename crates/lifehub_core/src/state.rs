//! Serializable snapshot of user-owned dashboard data.
//!
//! Only mutable, user-owned collections are captured. Weather and email are
//! regenerated on load and never persisted.

use crate::model::calendar::CalendarEvent;
use crate::model::focus::FocusSession;
use crate::model::note::Note;
use crate::model::task::TaskItem;
use crate::store::StoreResult;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Persistence key for the current snapshot format.
pub const STATE_KEY: &str = "lifehub.state.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub saved_at: NaiveDateTime,
    pub tasks: Vec<TaskItem>,
    pub events: Vec<CalendarEvent>,
    pub notes: Vec<Note>,
    pub focus_sessions: Vec<FocusSession>,
}

impl StateSnapshot {
    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
