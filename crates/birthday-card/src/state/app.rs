//! Application State

use std::time::Duration;

use birthday_card_config::AppConfig;
use birthday_card_theme::Theme;

use crate::keymap::{default_keymap, Keymap};
use crate::views::{self, View};

use super::Sequencer;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// The screen sequence and the active screen's scoped state
    pub sequencer: Sequencer,
    /// Frames of the decorative animation clock since start
    pub animation_frame: u64,
    pub theme: Theme,
    /// The keymap containing all keybindings
    pub keymap: Keymap,
    /// Card configuration
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            running: true,
            sequencer: Sequencer::new(),
            animation_frame: 0,
            theme: Theme::default(),
            keymap: default_keymap(),
            config,
        }
    }

    /// The view rendering the active screen
    pub fn active_view(&self) -> Box<dyn View> {
        views::view_for(self.sequencer.screen_id())
    }

    /// Animation time elapsed since start, derived from the frame counter
    pub fn animation_time(&self) -> Duration {
        Duration::from_millis(
            self.config
                .animation_tick_ms
                .saturating_mul(self.animation_frame),
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
