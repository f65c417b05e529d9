//! Focus-timer session tracking.
//!
//! # Invariants
//! - Daily totals only include completed `Focus` sessions.
//! - "Today" spans midnight to the following midnight, both inclusive.

use crate::clock::Clock;
use crate::model::focus::{FocusSession, FocusSessionKind, SessionId};
use chrono::{Duration, NaiveDateTime, NaiveTime};
use log::debug;
use std::sync::Arc;

/// Focus session storage contract.
pub trait FocusService {
    /// Starts a session at the current clock time.
    fn start_session(&mut self, kind: FocusSessionKind, duration_minutes: u32) -> FocusSession;
    /// Ends a session; returns `None` when the id is unknown.
    fn end_session(&mut self, id: SessionId, completed: bool) -> Option<FocusSession>;
    /// Sessions whose start lies in `[from, to]`, in creation order.
    fn sessions_between(&self, from: NaiveDateTime, to: NaiveDateTime) -> Vec<FocusSession>;
    fn all_sessions(&self) -> Vec<FocusSession>;
    fn replace_all(&mut self, sessions: Vec<FocusSession>);
    /// Current local time as seen by this service.
    fn now(&self) -> NaiveDateTime;

    /// Minutes of completed focus time started today, saturating at `u32::MAX`.
    fn today_focus_minutes(&self) -> u32 {
        today_sessions(self)
            .iter()
            .filter(|session| session.counts_as_focus())
            .fold(0u32, |total, session| {
                total.saturating_add(session.duration_minutes)
            })
    }

    /// Number of completed focus sessions started today.
    fn today_session_count(&self) -> u32 {
        let count = today_sessions(self)
            .iter()
            .filter(|session| session.counts_as_focus())
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}

fn today_sessions<S: FocusService + ?Sized>(service: &S) -> Vec<FocusSession> {
    let midnight = service.now().date().and_time(NaiveTime::MIN);
    service.sessions_between(midnight, midnight + Duration::days(1))
}

/// Local list-backed session log.
pub struct InMemoryFocusService {
    sessions: Vec<FocusSession>,
    clock: Arc<dyn Clock>,
}

impl InMemoryFocusService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: Vec::new(),
            clock,
        }
    }
}

impl FocusService for InMemoryFocusService {
    fn start_session(&mut self, kind: FocusSessionKind, duration_minutes: u32) -> FocusSession {
        let session = FocusSession::new(kind, duration_minutes, self.clock.now());
        debug!(
            "event=focus_start module=focus status=ok session_id={} duration_minutes={}",
            session.id, duration_minutes
        );
        self.sessions.push(session.clone());
        session
    }

    fn end_session(&mut self, id: SessionId, completed: bool) -> Option<FocusSession> {
        let now = self.clock.now();
        let session = self.sessions.iter_mut().find(|session| session.id == id)?;
        session.end = Some(now);
        session.was_completed = completed;
        debug!("event=focus_end module=focus status=ok session_id={id} completed={completed}");
        Some(session.clone())
    }

    fn sessions_between(&self, from: NaiveDateTime, to: NaiveDateTime) -> Vec<FocusSession> {
        self.sessions
            .iter()
            .filter(|session| session.start >= from && session.start <= to)
            .cloned()
            .collect()
    }

    fn all_sessions(&self) -> Vec<FocusSession> {
        self.sessions.clone()
    }

    fn replace_all(&mut self, sessions: Vec<FocusSession>) {
        self.sessions = sessions;
    }

    fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }
}
