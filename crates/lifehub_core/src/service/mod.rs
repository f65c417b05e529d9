//! Dashboard data services.
//!
//! # Responsibility
//! - Expose one narrow trait per data source (tasks, calendar, focus, notes,
//!   weather, email, AI).
//! - Ship local in-memory or mock implementations behind those traits so
//!   real integrations can replace them without touching callers.
//!
//! # Invariants
//! - Mutations addressed to an unknown id are silent no-ops.
//! - Services read time only through the injected `Clock`.

pub mod ai_engine;
pub mod calendar_service;
pub mod email_service;
pub mod focus_service;
pub mod note_service;
pub mod task_service;
pub mod weather_service;
