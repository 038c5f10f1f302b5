pub use crate::keybindings::{KeyBinding, Keymap};

use crate::command_id::CommandId;

/// Get the default keymap
///
/// Digits 0-9 pop the balloon with that number; they are handled by the
/// keyboard middleware directly and therefore not listed here.
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        KeyBinding::new("enter", "Enter", Confirm),
        KeyBinding::new("space", "Space", Confirm),
        KeyBinding::new("s", "s", AddSprinkles),
        KeyBinding::new("p", "p", PopNextBalloon),
        KeyBinding::new("q", "q", Quit),
        KeyBinding::new("esc", "Esc", Quit),
        KeyBinding::new("ctrl+c", "Ctrl+C", Quit),
    ];

    Keymap::new(bindings)
}
