//! Service wiring for one dashboard instance.
//!
//! # Invariants
//! - All services share one clock, so "today" agrees across them.
//! - The AI engine is shared between email summarization and insights.

use crate::clock::Clock;
use crate::model::insight::{DailyStats, DashboardUsageProfile};
use crate::service::ai_engine::{AiEngine, LocalAiEngine};
use crate::service::calendar_service::{CalendarService, InMemoryCalendarService};
use crate::service::email_service::{EmailSummaryService, MockEmailSummaryService};
use crate::service::focus_service::{FocusService, InMemoryFocusService};
use crate::service::note_service::{InMemoryNoteService, NoteService};
use crate::service::task_service::{InMemoryTaskService, TaskService};
use crate::service::weather_service::{MockWeatherService, WeatherService};
use crate::state::{StateSnapshot, STATE_KEY};
use crate::store::{PersistenceStore, StoreResult};
use chrono::Duration;
use log::info;
use std::sync::Arc;

/// Bundle of the services a dashboard reads from.
pub struct DashboardServices {
    pub clock: Arc<dyn Clock>,
    pub tasks: Box<dyn TaskService>,
    pub calendar: Box<dyn CalendarService>,
    pub focus: Box<dyn FocusService>,
    pub notes: Box<dyn NoteService>,
    pub weather: Box<dyn WeatherService>,
    pub email: Box<dyn EmailSummaryService>,
    pub ai: Arc<dyn AiEngine>,
}

impl DashboardServices {
    /// Local services pre-filled with sample tasks and meetings.
    pub fn local(clock: Arc<dyn Clock>) -> Self {
        let mut services = Self::empty(clock.clone());
        services.tasks = Box::new(InMemoryTaskService::seeded(clock.clone()));
        services.calendar = Box::new(InMemoryCalendarService::seeded(clock));
        services
    }

    /// Local services with empty task, calendar, focus and note stores.
    pub fn empty(clock: Arc<dyn Clock>) -> Self {
        let ai: Arc<dyn AiEngine> = Arc::new(LocalAiEngine::new(clock.clone()));
        Self {
            tasks: Box::new(InMemoryTaskService::new(clock.clone())),
            calendar: Box::new(InMemoryCalendarService::new()),
            focus: Box::new(InMemoryFocusService::new(clock.clone())),
            notes: Box::new(InMemoryNoteService::new(clock.clone())),
            weather: Box::new(MockWeatherService::new(clock.clone())),
            email: Box::new(MockEmailSummaryService::new(
                Some(ai.clone()),
                clock.clone(),
            )),
            ai,
            clock,
        }
    }

    /// Counts behind the daily summary insight.
    pub fn daily_stats(&self) -> DailyStats {
        let today = self.clock.today();
        let midnight = self.clock.start_of_today();
        let event_count = self
            .calendar
            .events_between(midnight, midnight + Duration::days(1))
            .len();
        let open_tasks_due_today = self
            .tasks
            .all_tasks()
            .iter()
            .filter(|task| task.is_due_on(today) && !task.is_completed)
            .count();

        DailyStats {
            event_count,
            open_tasks_due_today,
            focus_minutes: self.focus.today_focus_minutes(),
        }
    }

    /// Usage counters for layout heuristics.
    pub fn usage_profile(&self, widget_open_frequency: u32) -> DashboardUsageProfile {
        let today = self.clock.today();
        let completed = self
            .tasks
            .all_tasks()
            .iter()
            .filter(|task| {
                task.is_completed
                    && task
                        .completed_at
                        .is_some_and(|completed_at| completed_at.date() == today)
            })
            .count();

        DashboardUsageProfile {
            widget_open_frequency,
            focus_sessions_today: self.focus.today_session_count(),
            tasks_completed_today: u32::try_from(completed).unwrap_or(u32::MAX),
        }
    }

    /// Captures user-owned collections.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            saved_at: self.clock.now(),
            tasks: self.tasks.all_tasks(),
            events: self.calendar.all_events(),
            notes: self.notes.all_notes(),
            focus_sessions: self.focus.all_sessions(),
        }
    }

    /// Replaces user-owned collections with the snapshot contents.
    pub fn apply_snapshot(&mut self, snapshot: StateSnapshot) {
        self.tasks.replace_all(snapshot.tasks);
        self.calendar.replace_all(snapshot.events);
        self.notes.replace_all(snapshot.notes);
        self.focus.replace_all(snapshot.focus_sessions);
    }

    /// Serializes current state into `store` under `STATE_KEY`.
    pub fn save_state(&self, store: &mut dyn PersistenceStore) -> StoreResult<()> {
        let snapshot = self.snapshot();
        store.save(STATE_KEY, &snapshot.to_json()?)?;
        info!(
            "event=state_save module=dashboard status=ok tasks={} events={} notes={} sessions={}",
            snapshot.tasks.len(),
            snapshot.events.len(),
            snapshot.notes.len(),
            snapshot.focus_sessions.len()
        );
        Ok(())
    }

    /// Restores state saved by `save_state`.
    ///
    /// Returns `Ok(false)` and leaves services untouched when nothing was saved.
    pub fn restore_state(&mut self, store: &dyn PersistenceStore) -> StoreResult<bool> {
        let Some(json) = store.load(STATE_KEY)? else {
            info!("event=state_restore module=dashboard status=skipped reason=no_state");
            return Ok(false);
        };
        let snapshot = StateSnapshot::from_json(&json)?;
        info!(
            "event=state_restore module=dashboard status=ok saved_at={}",
            snapshot.saved_at
        );
        self.apply_snapshot(snapshot);
        Ok(true)
    }
}
