use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod countdown_timer_middleware;
pub mod keyboard_middleware;
pub mod logging;
pub mod media_middleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware performs the side effects of the card (key translation,
/// timers, music) so reducers stay pure.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
