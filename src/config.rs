use std::path::Path;

use crate::ai::Difficulty;
use crate::error::ConfigError;

/// Settings for the AI opponent.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Difficulty tier used when no explicit depth is given.
    pub difficulty: Difficulty,
    /// Explicit search depth; overrides the tier's own depth when set.
    pub search_depth: Option<usize>,
    /// Fixed RNG seed for the random/tactical tiers; unset means OS entropy.
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            difficulty: Difficulty::Hard,
            search_depth: None,
            seed: None,
        }
    }
}

impl AiConfig {
    /// The depth the engine should actually play at.
    pub fn resolved_depth(&self) -> usize {
        self.search_depth
            .unwrap_or_else(|| self.difficulty.search_depth())
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
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
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.ai.search_depth {
            Some(0) => Err(ConfigError::Validation(
                "ai.search_depth must be > 0".into(),
            )),
            // Branching factor is 7; beyond this the fixed-depth search
            // stops being interactive.
            Some(d) if d > 12 => Err(ConfigError::Validation(
                "ai.search_depth must be <= 12".into(),
            )),
            _ => Ok(()),
        }
    }
}
