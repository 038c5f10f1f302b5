//! Command identifiers
//!
//! This module defines all command IDs as an enum for type-safe command
//! references that can be serialized/deserialized.

use serde::{Deserialize, Serialize};

/// Unique identifier for each command a user can trigger.
///
/// Commands are semantic: what `Confirm` means depends on the active
/// screen, which translates it into a sequencer input.
///
/// The enum is serialized as snake_case (e.g., `AddSprinkles` -> `"add_sprinkles"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    /// Press the main button of the active screen
    Confirm,
    /// Add sprinkles to the cake
    AddSprinkles,
    /// Pop the lowest balloon that is still floating
    PopNextBalloon,
    /// Quit the application
    Quit,
}
