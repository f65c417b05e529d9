//! Calendar use-case service.
//!
//! # Invariants
//! - Range queries are inclusive at both ends and ordered by start time.
//! - Updates re-append the event; list order only matters through queries.

use crate::clock::Clock;
use crate::model::calendar::{CalendarEvent, EventId};
use chrono::{Duration, NaiveDateTime};
use log::debug;
use std::sync::Arc;

/// Calendar storage contract.
pub trait CalendarService {
    /// Events whose start lies in `[from, to]`, ordered by start.
    fn events_between(&self, from: NaiveDateTime, to: NaiveDateTime) -> Vec<CalendarEvent>;
    /// Every stored event in storage order.
    fn all_events(&self) -> Vec<CalendarEvent>;
    fn create_event(&mut self, event: CalendarEvent) -> CalendarEvent;
    /// Replaces the event with the same id. Unknown ids are ignored.
    fn update_event(&mut self, event: CalendarEvent) -> CalendarEvent;
    /// Removes one event. Unknown ids are ignored.
    fn delete_event(&mut self, id: EventId);
    fn replace_all(&mut self, events: Vec<CalendarEvent>);
}

/// Local list-backed calendar.
pub struct InMemoryCalendarService {
    events: Vec<CalendarEvent>,
}

impl InMemoryCalendarService {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Creates a calendar pre-filled with today's sample meetings.
    pub fn seeded(clock: Arc<dyn Clock>) -> Self {
        Self {
            events: sample_events(clock.start_of_today()),
        }
    }

    fn position(&self, id: EventId) -> Option<usize> {
        self.events.iter().position(|event| event.id == id)
    }
}

impl Default for InMemoryCalendarService {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarService for InMemoryCalendarService {
    fn events_between(&self, from: NaiveDateTime, to: NaiveDateTime) -> Vec<CalendarEvent> {
        let mut events: Vec<CalendarEvent> = self
            .events
            .iter()
            .filter(|event| event.start >= from && event.start <= to)
            .cloned()
            .collect();
        events.sort_by_key(|event| event.start);
        events
    }

    fn all_events(&self) -> Vec<CalendarEvent> {
        self.events.clone()
    }

    fn create_event(&mut self, event: CalendarEvent) -> CalendarEvent {
        debug!("event=calendar_create module=calendar status=ok event_id={}", event.id);
        self.events.push(event.clone());
        event
    }

    fn update_event(&mut self, event: CalendarEvent) -> CalendarEvent {
        if let Some(index) = self.position(event.id) {
            self.events.remove(index);
            self.events.push(event.clone());
            debug!("event=calendar_update module=calendar status=ok event_id={}", event.id);
        }
        event
    }

    fn delete_event(&mut self, id: EventId) {
        if let Some(index) = self.position(id) {
            self.events.remove(index);
            debug!("event=calendar_delete module=calendar status=ok event_id={id}");
        }
    }

    fn replace_all(&mut self, events: Vec<CalendarEvent>) {
        self.events = events;
    }
}

fn sample_events(midnight: NaiveDateTime) -> Vec<CalendarEvent> {
    let at = |minutes: i64| midnight + Duration::minutes(minutes);

    let mut standup = CalendarEvent::new("Team Standup", at(9 * 60), at(9 * 60 + 30));
    standup.description = "Daily sync with the team".to_string();
    standup.color = "#4A90E2".to_string();
    standup.meeting_url = Some("https://meet.example.com/standup".to_string());

    let mut presentation = CalendarEvent::new("Client Presentation", at(14 * 60), at(15 * 60));
    presentation.description = "Q4 results presentation".to_string();
    presentation.color = "#E94B3C".to_string();
    presentation.location = "Conference Room A".to_string();

    let mut lunch = CalendarEvent::new("Lunch with Sarah", at(12 * 60), at(13 * 60));
    lunch.color = "#50C878".to_string();
    lunch.location = "Café Downtown".to_string();

    vec![standup, presentation, lunch]
}
