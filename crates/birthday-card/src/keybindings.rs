//! Keybinding system
//!
//! This module provides the keybinding infrastructure that maps keyboard input
//! to commands. It supports single keys and modifier combinations.
//!
//! # Design
//!
//! - `KeyBinding`: A mapping from a key pattern to a command ID
//! - `KeyPattern`: Textual representation of keys (e.g., "ctrl+c", "space")
//! - `Keymap`: Collection of bindings with matching logic
//!
//! Key patterns are textual and serializable.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::command_id::CommandId;

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual representation of the key - e.g., "ctrl+c", "enter", "s"
    pub keys: String,
    /// Display hint for the UI - e.g., "Ctrl+C", "Enter"
    pub hint: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    /// Create a new keybinding
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char: "q", "s", "P" (case-sensitive for single chars)
/// - With modifiers: "ctrl+c", "alt+enter"
/// - Special keys: "enter", "esc", "space", "tab", arrows
pub fn parse_key_pattern(pattern: &str) -> Option<ParsedKeyPattern> {
    let pattern = pattern.trim();

    // For single characters, preserve case
    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        // Uppercase letters come with SHIFT modifier from terminal
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(ParsedKeyPattern {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let pattern_lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = pattern_lower.as_str();

    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => break,
        }
        key_part = rest;
    }

    let code = parse_key_code(key_part)?;

    Some(ParsedKeyPattern { code, modifiers })
}

/// Parse a key code string into a KeyCode
fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),

        s if s.starts_with('f') && s.len() > 1 => {
            let num: u8 = s[1..].parse().ok()?;
            Some(KeyCode::F(num))
        }

        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),

        _ => None,
    }
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, ParsedKeyPattern)>,
}

impl Keymap {
    /// Create a new keymap from a list of bindings
    ///
    /// Bindings with unparsable patterns are dropped with a warning.
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring invalid key pattern '{}'", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// Find the command bound to a key event
    pub fn match_key(&self, key: &KeyEvent) -> Option<CommandId> {
        self.bindings
            .iter()
            .find(|(_, pattern)| key.code == pattern.code && key.modifiers == pattern.modifiers)
            .map(|(binding, _)| binding.command)
    }

    /// Get a compact hint string for a command (e.g., "Enter/Space" for Confirm)
    /// Deduplicates hints and joins with "/"
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut unique_hints: Vec<&str> = Vec::new();
        for (binding, _) in self.bindings.iter().filter(|(b, _)| b.command == command) {
            if !unique_hints.contains(&binding.hint.as_str()) {
                unique_hints.push(binding.hint.as_str());
            }
        }

        if unique_hints.is_empty() {
            None
        } else {
            Some(unique_hints.join("/"))
        }
    }
}
