//! Media Middleware
//!
//! Best-effort background music. The song starts on the first entry of a
//! musical screen and repeats until the application exits. Every failure is
//! logged and otherwise ignored; the card works the same without sound.

use birthday_card_config::AudioConfig;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::actions::{Action, Event, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::utils::media::{song_path, spawn_player};

/// Media middleware - owns the background player
pub struct MediaMiddleware {
    runtime: Handle,
    audio: AudioConfig,
    playback: Option<JoinHandle<()>>,
}

impl MediaMiddleware {
    pub fn new(runtime: Handle, audio: AudioConfig) -> Self {
        Self {
            runtime,
            audio,
            playback: None,
        }
    }

    /// Whether a playback task is alive
    pub fn is_playing(&self) -> bool {
        self.playback
            .as_ref()
            .is_some_and(|playback| !playback.is_finished())
    }

    fn start(&mut self) {
        let song = match song_path(&self.audio) {
            Ok(song) => song,
            Err(e) => {
                log::debug!("MediaMiddleware: not playing music: {}", e);
                return;
            }
        };

        let audio = self.audio.clone();
        self.playback = Some(self.runtime.spawn(async move {
            loop {
                let mut child = match spawn_player(&audio, &song) {
                    Ok(child) => child,
                    Err(e) => {
                        log::debug!("MediaMiddleware: {:?}", e);
                        return;
                    }
                };
                match child.wait().await {
                    Ok(status) if status.success() => {
                        log::trace!("MediaMiddleware: song finished, replaying");
                    }
                    Ok(status) => {
                        log::debug!("MediaMiddleware: player exited with {}", status);
                        return;
                    }
                    Err(e) => {
                        log::debug!("MediaMiddleware: waiting for player failed: {}", e);
                        return;
                    }
                }
            }
        }));
        log::info!("MediaMiddleware: playing {}", self.audio.player);
    }

    fn stop(&mut self) {
        // Aborting drops the child, which kills the player
        if let Some(playback) = self.playback.take() {
            playback.abort();
        }
    }
}

impl Drop for MediaMiddleware {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Middleware for MediaMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Event(Event::ScreenChanged { to, .. }) => {
                if to.plays_music() && !self.is_playing() {
                    self.start();
                }
                true
            }

            Action::Global(GlobalAction::Quit) => {
                self.stop();
                true
            }

            _ => true,
        }
    }
}
