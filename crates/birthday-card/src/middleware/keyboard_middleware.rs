//! KeyboardMiddleware - translates keyboard events into sequencer inputs
//!
//! This middleware uses a three-layer approach to handle keyboard input:
//!
//! ## Layer 1: Priority Keys
//! Quit keys (Ctrl+C, q, Esc) always work regardless of the active screen.
//!
//! ## Layer 2: Translation
//! Digit keys name a balloon directly. Every other key is looked up in the
//! keymap and the resulting command is translated by the active screen's view.
//!
//! ## Layer 3: Gating
//! The translated input is only dispatched if the control it needs is
//! currently presented. This keeps hidden buttons from firing, e.g. "Decorate"
//! before every balloon is popped.

use crate::actions::{Action, GlobalAction, SequencerInput};
use crate::command_id::CommandId;
use crate::dispatcher::Dispatcher;
use crate::domain_models::BalloonId;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware handles keyboard input using a three-layer approach
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let command = state.keymap.match_key(&key);

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 1: Priority keys (always work)
        // ═══════════════════════════════════════════════════════════════════

        if command == Some(CommandId::Quit) {
            log::debug!("Layer 1: {:?} - dispatching Quit", key.code);
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 2: Translation
        // ═══════════════════════════════════════════════════════════════════

        let input = match (key.code, command) {
            (KeyCode::Char(c), None)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                BalloonId::from_digit(c).map(SequencerInput::PopBalloon)
            }
            (_, Some(command)) => state.active_view().translate_command(command, state),
            _ => None,
        };

        let Some(input) = input else {
            log::trace!("Layer 2: {:?} means nothing on this screen", key.code);
            return;
        };

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 3: Gating on presented controls
        // ═══════════════════════════════════════════════════════════════════

        let controls = state.sequencer.controls();
        match input.required_control() {
            Some(control) if controls.contains(control) => {
                log::debug!("Layer 3: dispatching {:?}", input);
                dispatcher.dispatch(Action::Sequencer(input));
            }
            _ => {
                log::debug!("Layer 3: dropping {:?}, control not presented", input);
            }
        }
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            self.handle_key(*key, state, dispatcher);
            // Raw keys never reach the reducer
            return false;
        }

        true
    }
}
