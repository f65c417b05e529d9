//! Generated insight and layout-suggestion records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::widget::WidgetKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    DailySummary,
    ProductivityTip,
    FocusPattern,
    LayoutSuggestion,
    TaskSuggestion,
}

/// Short generated message shown in the insight card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiInsight {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub kind: InsightKind,
    pub generated_at: NaiveDateTime,
    pub action_url: Option<String>,
}

impl AiInsight {
    pub fn new(
        kind: InsightKind,
        title: impl Into<String>,
        content: impl Into<String>,
        generated_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            kind,
            generated_at,
            action_url: None,
        }
    }
}

/// Usage counters the layout heuristics are keyed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardUsageProfile {
    pub widget_open_frequency: u32,
    pub focus_sessions_today: u32,
    pub tasks_completed_today: u32,
}

/// Counts feeding the daily summary insight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailyStats {
    /// Events starting today.
    pub event_count: usize,
    /// Incomplete tasks due today.
    pub open_tasks_due_today: usize,
    /// Completed focus minutes today.
    pub focus_minutes: u32,
}

/// Theme plus widget reordering advice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSuggestion {
    pub suggested_theme: String,
    pub widgets_to_promote: Vec<WidgetKind>,
    pub widgets_to_hide: Vec<WidgetKind>,
}
