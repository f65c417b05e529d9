//! Rule-based stand-in for the dashboard AI engine.
//!
//! # Responsibility
//! - Produce summaries, daily insights, task extraction and layout advice
//!   from deterministic templates.
//!
//! # Invariants
//! - Output depends only on inputs and the injected clock.
//! - Email summaries sample at most `MAX_EMAIL_SAMPLES` snippets.
//! - Task extraction yields at most `MAX_EXTRACTED_TASKS` tasks.

use crate::clock::Clock;
use crate::model::insight::{
    AiInsight, DailyStats, DashboardUsageProfile, InsightKind, LayoutSuggestion,
};
use crate::model::task::TaskItem;
use crate::model::widget::WidgetKind;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

const MAX_EMAIL_SAMPLES: usize = 5;
const MAX_EXTRACTED_TASKS: usize = 5;
const MIN_TASK_TITLE_CHARS: usize = 6;
/// More focus sessions than this switches the suggested theme to "Focus".
const FOCUS_THEME_SESSION_THRESHOLD: u32 = 2;

static SENTENCE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.\n]").expect("valid sentence break regex"));

/// Summarization and insight contract.
pub trait AiEngine: Send + Sync {
    /// One-line digest of email subjects/snippets.
    fn summarize_emails(&self, snippets: &[String]) -> String;
    /// Splits free text into candidate tasks.
    fn extract_tasks_from_text(&self, text: &str) -> Vec<TaskItem>;
    /// Sentence describing today's dashboard usage.
    fn usage_summary(&self, profile: &DashboardUsageProfile) -> String;
    /// Daily summary card for the dashboard header.
    fn daily_insight(&self, stats: &DailyStats) -> AiInsight;
    /// Theme and widget ordering advice.
    fn suggest_layout(&self, profile: &DashboardUsageProfile) -> LayoutSuggestion;
}

/// Local template-based engine.
pub struct LocalAiEngine {
    clock: Arc<dyn Clock>,
}

impl LocalAiEngine {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl AiEngine for LocalAiEngine {
    fn summarize_emails(&self, snippets: &[String]) -> String {
        let sample: Vec<&str> = snippets
            .iter()
            .take(MAX_EMAIL_SAMPLES)
            .map(String::as_str)
            .collect();
        if sample.is_empty() {
            return "No recent messages.".to_string();
        }
        format!(
            "Today: {} messages. Sample: {}",
            sample.len(),
            sample.join("; ")
        )
    }

    fn extract_tasks_from_text(&self, text: &str) -> Vec<TaskItem> {
        let now = self.clock.now();
        SENTENCE_BREAK_RE
            .split(text)
            .map(str::trim)
            .filter(|piece| piece.chars().count() >= MIN_TASK_TITLE_CHARS)
            .take(MAX_EXTRACTED_TASKS)
            .map(|piece| TaskItem::new(piece, now))
            .collect()
    }

    fn usage_summary(&self, profile: &DashboardUsageProfile) -> String {
        format!(
            "You opened widgets {} times, completed {} tasks and had {} focus sessions.",
            profile.widget_open_frequency,
            profile.tasks_completed_today,
            profile.focus_sessions_today
        )
    }

    fn daily_insight(&self, stats: &DailyStats) -> AiInsight {
        let mut content = format!(
            "Today you have {} events and {} tasks. ",
            stats.event_count, stats.open_tasks_due_today
        );
        if stats.focus_minutes > 0 {
            content.push_str(&format!(
                "You've focused for {} minutes. Great work!",
                stats.focus_minutes
            ));
        } else {
            content.push_str("Start your first focus session!");
        }

        AiInsight::new(
            InsightKind::DailySummary,
            "Daily Summary",
            content,
            self.clock.now(),
        )
    }

    fn suggest_layout(&self, profile: &DashboardUsageProfile) -> LayoutSuggestion {
        let (theme, promoted) = if profile.focus_sessions_today > FOCUS_THEME_SESSION_THRESHOLD {
            ("Focus", WidgetKind::FocusTimer)
        } else {
            ("Balanced", WidgetKind::Calendar)
        };
        LayoutSuggestion {
            suggested_theme: theme.to_string(),
            widgets_to_promote: vec![promoted],
            widgets_to_hide: Vec::new(),
        }
    }
}
