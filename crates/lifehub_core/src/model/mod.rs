//! Dashboard domain model.
//!
//! # Responsibility
//! - Define the plain records exchanged between services and the view-model.
//! - Keep one serde shape for in-memory use and persisted state snapshots.
//!
//! # Invariants
//! - Every stored entity is identified by a v4 `Uuid` generated on creation.
//! - No cross-entity invariants are enforced by the model.

pub mod calendar;
pub mod email;
pub mod focus;
pub mod insight;
pub mod note;
pub mod task;
pub mod weather;
pub mod widget;
