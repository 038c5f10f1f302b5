//! Domain models
//!
//! Core domain types used throughout the application.
//! These are pure domain concepts, separate from UI state.

pub mod balloon;
pub mod screen_id;

pub use balloon::{BalloonId, BALLOON_COUNT};
pub use screen_id::ScreenId;
