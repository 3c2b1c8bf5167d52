//! Startup configuration for the songbook REPL

use anyhow::{Context, Result};
use songbook_core::DisplayMode;
use std::path::PathBuf;

/// Default catalog file, named after the storage slot
pub const DEFAULT_STORE_PATH: &str = "jazzSongs.json";

/// Environment variable overriding the catalog file
pub const STORE_ENV: &str = "SONGBOOK_STORE";

/// Environment variable selecting the initial display mode
pub const MODE_ENV: &str = "SONGBOOK_MODE";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub store_path: PathBuf,
    pub mode: DisplayMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            mode: DisplayMode::default(),
        }
    }
}

impl Config {
    /// Resolve from process arguments and environment
    pub fn from_env() -> Result<Self> {
        Self::resolve(
            std::env::args().nth(1),
            std::env::var(STORE_ENV).ok(),
            std::env::var(MODE_ENV).ok(),
        )
    }

    /// Store path precedence: argument, then environment, then default
    pub fn resolve(
        arg_path: Option<String>,
        env_path: Option<String>,
        env_mode: Option<String>,
    ) -> Result<Self> {
        let store_path = arg_path
            .or(env_path)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));

        let mode = match env_mode {
            Some(mode) => mode
                .parse()
                .with_context(|| format!("Invalid {}", MODE_ENV))?,
            None => DisplayMode::default(),
        };

        Ok(Config { store_path, mode })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::resolve(None, None, None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_argument_beats_environment() {
        let config = Config::resolve(
            Some("songs.json".to_string()),
            Some("other.json".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(config.store_path, PathBuf::from("songs.json"));

        let config = Config::resolve(None, Some("other.json".to_string()), None).unwrap();
        assert_eq!(config.store_path, PathBuf::from("other.json"));
    }

    #[test]
    fn test_mode_from_environment() {
        let config = Config::resolve(None, None, Some("signed".to_string())).unwrap();
        assert_eq!(config.mode, DisplayMode::Signed);
        assert!(Config::resolve(None, None, Some("loud".to_string())).is_err());
    }
}
