//! Actions module
//!
//! This module defines all actions in the application using a tagged action architecture.
//! Actions are organized by:
//! - Global actions that affect the entire application (keys, quit, animation clock)
//! - Sequencer inputs that drive the screen sequence
//! - Events that only middleware observes

pub mod event;
pub mod global;
pub mod sequencer;

pub use event::Event;
pub use global::GlobalAction;
pub use sequencer::SequencerInput;

/// Root action enum - tagged by scope
#[derive(Debug, Clone)]
pub enum Action {
    /// Events are facts/observations that re-enter the middleware chain.
    /// Use `Action::event(Event::X)` to create - ensures visibility at call site.
    Event(Event),

    /// Global application actions
    Global(GlobalAction),

    /// Triggers consumed by the screen sequencer
    Sequencer(SequencerInput),
}

impl Action {
    /// Factory method for creating events.
    ///
    /// Using this factory makes event creation visually distinct at the call site,
    /// signaling that the action will only be seen by middleware.
    pub fn event(event: Event) -> Action {
        Action::Event(event)
    }
}
