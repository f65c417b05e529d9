//! Dashboard view-model.
//!
//! # Responsibility
//! - Pull today's data from every service and shape it for rendering.
//! - Track lightweight usage counters that drive layout suggestions.
//!
//! # Invariants
//! - `load` never mutates services; it only reads.
//! - All services read time from the one shared clock.

use crate::config::DashboardConfig;
use crate::dashboard::layout::WidgetLayout;
use crate::dashboard::services::DashboardServices;
use crate::model::calendar::CalendarEvent;
use crate::model::email::EmailSummary;
use crate::model::insight::{AiInsight, LayoutSuggestion};
use crate::model::task::TaskItem;
use crate::model::weather::WeatherReport;
use crate::model::widget::Widget;
use chrono::{Duration, NaiveTime, Timelike};
use log::info;
use std::time::Instant;

const AFTERNOON_STARTS_AT_HOUR: u32 = 12;
const EVENING_STARTS_AT_HOUR: u32 = 17;

/// Everything the dashboard page binds to.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub greeting: String,
    pub daily_insight: AiInsight,
    pub weather: WeatherReport,
    pub email_summary: EmailSummary,
    pub today_focus_minutes: u32,
    /// Events starting today, earliest first.
    pub today_events: Vec<CalendarEvent>,
    /// Open tasks due today or overdue, by due date.
    pub today_tasks: Vec<TaskItem>,
    pub layout_suggestion: LayoutSuggestion,
    /// Base layout with the suggestion applied.
    pub widgets: Vec<Widget>,
}

pub struct DashboardViewModel {
    services: DashboardServices,
    location: String,
    user_name: Option<String>,
    layout: WidgetLayout,
    widget_open_frequency: u32,
}

impl DashboardViewModel {
    pub fn new(services: DashboardServices, config: &DashboardConfig) -> Self {
        Self {
            services,
            location: config.location.clone(),
            user_name: config.user_name.clone(),
            layout: WidgetLayout::default(),
            widget_open_frequency: 0,
        }
    }

    pub fn services(&self) -> &DashboardServices {
        &self.services
    }

    pub fn services_mut(&mut self) -> &mut DashboardServices {
        &mut self.services
    }

    pub fn into_services(self) -> DashboardServices {
        self.services
    }

    pub fn layout_mut(&mut self) -> &mut WidgetLayout {
        &mut self.layout
    }

    /// Counts one widget interaction.
    pub fn record_widget_open(&mut self) {
        self.widget_open_frequency = self.widget_open_frequency.saturating_add(1);
    }

    pub fn widget_open_frequency(&self) -> u32 {
        self.widget_open_frequency
    }

    /// Loads a fresh snapshot from all services.
    pub fn load(&self) -> DashboardSnapshot {
        let started_at = Instant::now();
        let services = &self.services;
        let now = services.clock.now();
        let today = now.date();
        let midnight = services.clock.start_of_today();

        let today_events = services
            .calendar
            .events_between(midnight, midnight + Duration::days(1));
        let today_tasks: Vec<TaskItem> = services
            .tasks
            .all_tasks()
            .into_iter()
            .filter(|task| task.is_pending_by(today))
            .collect();

        let daily_insight = services.ai.daily_insight(&services.daily_stats());
        let profile = services.usage_profile(self.widget_open_frequency);
        let layout_suggestion = services.ai.suggest_layout(&profile);
        let mut layout = self.layout.clone();
        layout.apply(&layout_suggestion);

        let snapshot = DashboardSnapshot {
            greeting: greeting_for(now.time(), self.user_name.as_deref()),
            daily_insight,
            weather: services.weather.current(&self.location),
            email_summary: services.email.email_summary(),
            today_focus_minutes: services.focus.today_focus_minutes(),
            today_events,
            today_tasks,
            layout_suggestion,
            widgets: layout.widgets().to_vec(),
        };

        info!(
            "event=dashboard_load module=dashboard status=ok duration_ms={} events={} tasks={} focus_minutes={}",
            started_at.elapsed().as_millis(),
            snapshot.today_events.len(),
            snapshot.today_tasks.len(),
            snapshot.today_focus_minutes
        );
        snapshot
    }
}

/// Time-of-day greeting, personalized when a non-blank name is given.
pub fn greeting_for(time: NaiveTime, user_name: Option<&str>) -> String {
    let base = if time.hour() < AFTERNOON_STARTS_AT_HOUR {
        "Good morning"
    } else if time.hour() < EVENING_STARTS_AT_HOUR {
        "Good afternoon"
    } else {
        "Good evening"
    };

    match user_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("{base}, {name}"),
        None => base.to_string(),
    }
}
