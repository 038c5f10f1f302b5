//! Card configuration
//!
//! Configuration loaded from .birthday-card.toml file.

use serde::{Deserialize, Serialize};

/// Card configuration loaded from .birthday-card.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Name shown on the balloon screen greeting
    #[serde(default = "default_recipient")]
    pub recipient: String,

    /// Age the card celebrates
    #[serde(default = "default_age")]
    pub age: u32,

    /// Headline of the intro screen; `{age}` is replaced with the configured age
    #[serde(default = "default_headline")]
    pub headline: String,

    /// Greeting on the balloon screen; `{recipient}` is replaced with the recipient
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Wish shown on the finale screen
    #[serde(default = "default_wish")]
    pub wish: String,

    /// Interval of the animation clock in milliseconds
    #[serde(default = "default_animation_tick_ms")]
    pub animation_tick_ms: u64,

    /// Interval between two countdown steps in milliseconds
    #[serde(default = "default_countdown_tick_ms")]
    pub countdown_tick_ms: u64,

    /// Background music
    #[serde(default)]
    pub audio: AudioConfig,
}

/// Background music configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AudioConfig {
    /// Path to the song; no music is played when unset
    #[serde(default)]
    pub song: Option<String>,

    /// Player command; the song path is appended as last argument
    #[serde(default = "default_player")]
    pub player: String,

    /// Playback volume in 0.0..=1.0, passed to `paplay` and `mpv`
    #[serde(default = "default_volume")]
    pub volume: f32,
}

fn default_recipient() -> String {
    "Cutiepiee".to_string()
}

fn default_age() -> u32 {
    21
}

fn default_headline() -> String {
    "A Cutiepie was born today, {age} years ago!".to_string()
}

fn default_greeting() -> String {
    "Happy Birthday, {recipient}!".to_string()
}

fn default_wish() -> String {
    "May your year be filled with love, laughter and endless surprises!".to_string()
}

fn default_animation_tick_ms() -> u64 {
    100
}

fn default_countdown_tick_ms() -> u64 {
    1000
}

fn default_player() -> String {
    if cfg!(target_os = "macos") {
        "afplay".to_string()
    } else {
        "paplay".to_string()
    }
}

fn default_volume() -> f32 {
    0.35
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            song: None,
            player: default_player(),
            volume: default_volume(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recipient: default_recipient(),
            age: default_age(),
            headline: default_headline(),
            greeting: default_greeting(),
            wish: default_wish(),
            animation_tick_ms: default_animation_tick_ms(),
            countdown_tick_ms: default_countdown_tick_ms(),
            audio: AudioConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded card config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default card config");
        Self::default()
    }

    /// Intro headline with placeholders filled in
    pub fn headline_text(&self) -> String {
        self.headline.replace("{age}", &self.age.to_string())
    }

    /// Balloon greeting with placeholders filled in
    pub fn greeting_text(&self) -> String {
        self.greeting.replace("{recipient}", &self.recipient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.age, 21);
        assert_eq!(config.countdown_tick_ms, 1000);
        assert!(config.audio.song.is_none());
        assert!((config.audio.volume - 0.35).abs() < f32::EPSILON);
        assert_eq!(
            config.headline_text(),
            "A Cutiepie was born today, 21 years ago!"
        );
        assert_eq!(config.greeting_text(), "Happy Birthday, Cutiepiee!");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            recipient = "Ada"
            age = 30

            [audio]
            song = "/tmp/happy-birthday.mp3"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.greeting_text(), "Happy Birthday, Ada!");
        assert_eq!(
            config.headline_text(),
            "A Cutiepie was born today, 30 years ago!"
        );
        assert_eq!(config.audio.song.as_deref(), Some("/tmp/happy-birthday.mp3"));
        // Unset fields use defaults
        assert_eq!(config.audio.player, default_player());
        assert_eq!(config.animation_tick_ms, 100);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_config_rejects_wrong_types() {
        let result: Result<AppConfig, _> = toml::from_str("age = \"old\"");
        assert!(result.is_err());
    }
}
