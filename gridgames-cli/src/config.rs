//! TOML configuration for the terminal front end.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub tictactoe: TicTacToeConfig,
    pub bench: BenchConfig,
}

/// Characters used to draw the boards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub empty: char,
    pub player_one: char,
    pub player_two: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            empty: '-',
            player_one: 'X',
            player_two: 'O',
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeConfig {
    /// Let the computer open the game.
    pub ai_first: bool,
    /// Seed for the computer's tie-breaks. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub games: usize,
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig { games: 1000, seed: 7 }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let glyphs = [
            ("display.empty", self.display.empty),
            ("display.player_one", self.display.player_one),
            ("display.player_two", self.display.player_two),
        ];
        for (name, glyph) in glyphs {
            if glyph.is_whitespace() || glyph.is_control() || glyph == '|' {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a visible character other than '|'"
                )));
            }
        }
        let DisplayConfig { empty, player_one, player_two } = &self.display;
        if empty == player_one || empty == player_two || player_one == player_two {
            return Err(ConfigError::Validation(
                "display glyphs must be distinct".into(),
            ));
        }
        if self.bench.games == 0 {
            return Err(ConfigError::Validation("bench.games must be > 0".into()));
        }
        Ok(())
    }
}
