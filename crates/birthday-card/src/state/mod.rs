//! Application State Module
//!
//! Contains all state types used by the application.

mod app;
mod screen;
mod sequencer;

pub use app::AppState;
pub use screen::{
    BalloonsState, CakeState, DecorateState, Screen, COUNTDOWN_START,
    MAX_SPRINKLES,
};
pub use sequencer::{Sequencer, Transition};
