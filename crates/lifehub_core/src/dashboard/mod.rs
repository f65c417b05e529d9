//! Dashboard composition and view-model.
//!
//! # Responsibility
//! - Wire service implementations together by constructor injection.
//! - Aggregate service output into one snapshot for rendering.
//! - Keep widget ordering/visibility in sync with layout suggestions.

pub mod layout;
pub mod services;
pub mod view_model;
