//! Task domain model.
//!
//! # Invariants
//! - `completed_at` is `Some` exactly when `is_completed` is `true` after a
//!   toggle; direct field writes are not policed.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Source label for tasks created on this device.
pub const LOCAL_SOURCE: &str = "Local";

/// Task urgency, ordered from least to most urgent.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

/// Actionable to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    /// Calendar day the task is due, if any.
    pub due_date: Option<NaiveDate>,
    pub is_completed: bool,
    pub priority: TaskPriority,
    pub tags: Vec<String>,
    /// Origin of the task (`Local` or an integration name).
    pub source: String,
    pub created_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
}

impl TaskItem {
    /// Creates an open medium-priority local task with a fresh id.
    pub fn new(title: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            due_date: None,
            is_completed: false,
            priority: TaskPriority::default(),
            tags: Vec::new(),
            source: LOCAL_SOURCE.to_string(),
            created_at,
            completed_at: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Returns whether the task is due exactly on `day`.
    pub fn is_due_on(&self, day: NaiveDate) -> bool {
        self.due_date == Some(day)
    }

    /// Returns whether the task is still open and due on or before `day`.
    pub fn is_pending_by(&self, day: NaiveDate) -> bool {
        !self.is_completed && self.due_date.is_some_and(|due| due <= day)
    }

    /// Flips completion state and stamps or clears `completed_at`.
    pub fn toggle_complete(&mut self, at: NaiveDateTime) {
        self.is_completed = !self.is_completed;
        self.completed_at = if self.is_completed { Some(at) } else { None };
    }
}
