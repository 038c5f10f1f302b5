//! Dispatcher for middleware action dispatch
//!
//! When middleware (or a task it spawned) needs to dispatch actions, it uses
//! the Dispatcher. Dispatched actions are queued and re-enter the full
//! middleware chain when the store drains its queue.
//!
//! This enables patterns like:
//! - The store emits Event::ScreenChanged; the countdown timer middleware
//!   reacts by starting a timer task
//! - The timer task dispatches a countdown tick every second from a tokio worker

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
///
/// Cheap to clone and `Send`, so background tasks can hold their own copy.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the store's action queue
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action to be processed through the middleware chain
    ///
    /// Returns `false` once the store is gone, so background tasks know to stop.
    pub fn dispatch(&self, action: Action) -> bool {
        match self.action_tx.send(action) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Dispatcher: failed to send action: {}", e);
                false
            }
        }
    }
}
