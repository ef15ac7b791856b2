//! Game settings loaded from `starship.toml`. Every field has a default,
//! so a partial or missing file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "starship.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed rng seed for reproducible runs. Random when absent.
    pub seed: Option<u64>,
    pub tick_rate_ms: u64,
    pub scoreboard_path: PathBuf,
    pub player: PlayerConfig,
    pub boxes: BoxConfig,
    pub audio: AudioConfig,
    pub input: InputConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_rate_ms: 16,
            scoreboard_path: PathBuf::from("Data/Score/Scoreboard.txt"),
            player: PlayerConfig::default(),
            boxes: BoxConfig::default(),
            audio: AudioConfig::default(),
            input: InputConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub lives: u32,
    pub initial_health: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            lives: 3,
            initial_health: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxConfig {
    pub drift_speed: f32,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self { drift_speed: 4.4 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Ring the terminal bell when the ship dies or a wave starts.
    pub bell: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// How long a key counts as held without a repeat, for terminals that
    /// never send release events.
    pub hold_timeout_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { hold_timeout_ms: 150 }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path`, falling back to defaults when it is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                info!("loaded config from {}", path.display());
                config
            }
            Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                info!("no config at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                warn!("{err}; using defaults");
                Self::default()
            }
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn hold_timeout_secs(&self) -> f32 {
        self.input.hold_timeout_ms as f32 / 1000.0
    }
}
