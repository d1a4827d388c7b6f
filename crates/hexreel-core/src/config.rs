//! Game configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::reel_state::{DEFAULT_REELS, ReelState, ReelStateError};
use crate::symbols::REEL_COUNT;
use crate::timing::{ShuffleTiming, TimingProfile};

/// Spins allowed without a match before the game is lost
pub const DEFAULT_MAX_TRIES: u32 = 10;

/// Construction-time settings of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Loss threshold (`tries_used >= max_tries` loses)
    #[serde(alias = "maxTries")]
    pub max_tries: u32,

    /// Shuffle duration and speed
    pub timing: ShuffleTiming,

    /// Grid shown before the first spin
    #[serde(alias = "initialReels")]
    pub initial_reels: [u8; REEL_COUNT],

    /// Fixed RNG seed (reproducible games)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Defaults with a named timing profile
    pub fn with_profile(profile: TimingProfile) -> Self {
        Self {
            timing: ShuffleTiming::from_profile(profile),
            ..Self::default()
        }
    }

    pub fn max_tries(mut self, max_tries: u32) -> Self {
        self.max_tries = max_tries;
        self
    }

    pub fn timing(mut self, timing: ShuffleTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load from a `.json`, `.yaml` or `.yml` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let text = std::fs::read_to_string(path)?;
        let config = match extension.as_str() {
            "json" => Self::from_json_str(&text)?,
            "yaml" | "yml" => Self::from_yaml_str(&text)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        log::debug!("[Config] Loaded {}", path.display());
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check limits and the initial grid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tries == 0 {
            return Err(ConfigError::Invalid("max_tries must be at least 1".into()));
        }

        if self.timing.max_shuffles == 0 {
            return Err(ConfigError::Invalid("max_shuffles must be at least 1".into()));
        }

        if self.timing.shuffle_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "shuffle_interval_ms must be greater than 0".into(),
            ));
        }

        self.initial_state()?;
        Ok(())
    }

    /// Fresh reel state for this config
    pub fn initial_state(&self) -> Result<ReelState, ReelStateError> {
        ReelState::new(self.initial_reels, self.max_tries)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_tries: DEFAULT_MAX_TRIES,
            timing: ShuffleTiming::standard(),
            initial_reels: DEFAULT_REELS,
            seed: None,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error(transparent)]
    Reels(#[from] ReelStateError),
}
