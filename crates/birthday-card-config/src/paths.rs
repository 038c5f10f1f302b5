//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/birthday-card/`, `~/.cache/birthday-card/`
//! - macOS: `~/Library/Application Support/birthday-card/`, `~/Library/Caches/birthday-card/`
//! - Windows: `%APPDATA%\birthday-card\`, `%LOCALAPPDATA%\birthday-card\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "birthday-card";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
///
/// Release builds write their log files here.
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_dir_exists() {
        let Ok(dir) = cache_dir() else {
            // No home directory in this environment
            return;
        };
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_config_dir_is_app_scoped() {
        let Ok(dir) = config_dir() else {
            return;
        };
        assert!(dir.ends_with(APP_NAME));
    }
}
