//! Media utilities
//!
//! Building and spawning the external player for the background song.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use birthday_card_config::AudioConfig;
use thiserror::Error;
use tokio::process::{Child, Command};

/// Why the background song could not be played
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("no song configured")]
    NoSong,

    #[error("song file {0} does not exist")]
    MissingFile(PathBuf),

    #[error("failed to start player '{player}'")]
    Spawn {
        player: String,
        #[source]
        source: io::Error,
    },
}

/// Resolve the configured song to an existing file
pub fn song_path(audio: &AudioConfig) -> Result<PathBuf, MediaError> {
    let song = audio.song.as_deref().ok_or(MediaError::NoSong)?;
    let path = PathBuf::from(song);
    if !path.is_file() {
        return Err(MediaError::MissingFile(path));
    }
    Ok(path)
}

/// Build the player command for a song
///
/// The player gets no terminal: all standard streams are nulled so it cannot
/// draw over the TUI. Dropping the resulting child kills the player.
pub fn player_command(audio: &AudioConfig, song: &Path) -> Command {
    let mut command = Command::new(&audio.player);
    command.args(volume_args(audio));
    command
        .arg(song)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true);
    command
}

/// Start the player
///
/// Must be called from within a tokio runtime.
pub fn spawn_player(audio: &AudioConfig, song: &Path) -> Result<Child, MediaError> {
    player_command(audio, song)
        .spawn()
        .map_err(|source| MediaError::Spawn {
            player: audio.player.clone(),
            source,
        })
}

/// Volume arguments for the players that take one
fn volume_args(audio: &AudioConfig) -> Vec<String> {
    let volume = audio.volume.clamp(0.0, 1.0);
    let player = Path::new(&audio.player)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    match player {
        // paplay: 65536 is 100%
        "paplay" => vec![format!("--volume={}", (volume * 65536.0).round() as u32)],
        "mpv" => vec![
            "--no-video".to_string(),
            format!("--volume={}", (volume * 100.0).round() as u32),
        ],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn audio(player: &str, song: Option<&str>) -> AudioConfig {
        AudioConfig {
            song: song.map(str::to_string),
            player: player.to_string(),
            volume: 0.5,
        }
    }

    fn args(command: &Command) -> Vec<String> {
        command
            .as_std()
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    fn existing_file() -> String {
        format!("{}/Cargo.toml", env!("CARGO_MANIFEST_DIR"))
    }

    #[test]
    fn test_song_path_requires_song() {
        assert!(matches!(
            song_path(&audio("paplay", None)),
            Err(MediaError::NoSong)
        ));
    }

    #[test]
    fn test_song_path_requires_existing_file() {
        let result = song_path(&audio("paplay", Some("/definitely/not/here.mp3")));
        assert!(matches!(result, Err(MediaError::MissingFile(path)) if path.ends_with("here.mp3")));

        let song = existing_file();
        assert_eq!(
            song_path(&audio("paplay", Some(&song))).ok(),
            Some(PathBuf::from(song))
        );
    }

    #[test]
    fn test_paplay_gets_scaled_volume() {
        let command = player_command(&audio("/usr/bin/paplay", None), Path::new("song.wav"));
        assert_eq!(command.as_std().get_program(), "/usr/bin/paplay");
        assert_eq!(args(&command), vec!["--volume=32768", "song.wav"]);
    }

    #[test]
    fn test_mpv_gets_percent_volume() {
        let command = player_command(&audio("mpv", None), Path::new("song.mp3"));
        assert_eq!(args(&command), vec!["--no-video", "--volume=50", "song.mp3"]);
    }

    #[test]
    fn test_other_players_get_song_only() {
        let command = player_command(&audio("afplay", None), Path::new("song.mp3"));
        assert_eq!(args(&command), vec!["song.mp3"]);
    }

    #[tokio::test]
    async fn test_spawn_failure_is_reported() {
        let audio = audio("birthday-card-no-such-player", None);
        let result = spawn_player(&audio, Path::new(&existing_file()));
        match result {
            Err(MediaError::Spawn { player, .. }) => {
                assert_eq!(player, "birthday-card-no-such-player")
            }
            other => panic!("expected spawn error, got {:?}", other.map(|_| ())),
        }
    }
}
