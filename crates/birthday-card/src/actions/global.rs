//! Global actions - not tied to any specific screen
//!
//! These actions affect the application as a whole.

use ratatui::crossterm::event::KeyEvent;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Quit the application
    Quit,
    /// Periodic tick for the decorative animations
    Tick,
}
