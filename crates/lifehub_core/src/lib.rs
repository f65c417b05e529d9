//! Core domain logic for the LifeHub daily dashboard.
//! UI shells and demo binaries consume this crate; it owns every data rule.

pub mod clock;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod state;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{load_config, parse_config, ConfigError, DashboardConfig};
pub use dashboard::layout::WidgetLayout;
pub use dashboard::services::DashboardServices;
pub use dashboard::view_model::{greeting_for, DashboardSnapshot, DashboardViewModel};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status};
pub use model::calendar::CalendarEvent;
pub use model::email::{EmailItem, EmailSummary};
pub use model::focus::{FocusSession, FocusSessionKind};
pub use model::insight::{
    AiInsight, DailyStats, DashboardUsageProfile, InsightKind, LayoutSuggestion,
};
pub use model::note::Note;
pub use model::task::{TaskItem, TaskPriority};
pub use model::weather::{DailyForecast, TemperatureUnit, WeatherReport};
pub use model::widget::{Widget, WidgetKind, WidgetSize};
pub use service::ai_engine::{AiEngine, LocalAiEngine};
pub use service::calendar_service::{CalendarService, InMemoryCalendarService};
pub use service::email_service::{EmailSummaryService, MockEmailSummaryService};
pub use service::focus_service::{FocusService, InMemoryFocusService};
pub use service::note_service::{InMemoryNoteService, NoteService};
pub use service::task_service::{InMemoryTaskService, TaskService};
pub use service::weather_service::{MockWeatherService, WeatherService};
pub use state::{StateSnapshot, STATE_KEY};
pub use store::sqlite_store::SqlitePersistence;
pub use store::{InMemoryPersistence, PersistenceStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
