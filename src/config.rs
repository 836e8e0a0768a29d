use std::path::Path;

use crate::error::ConfigError;

/// Engine configuration, loadable from TOML.
///
/// Dimensions are fixed for the lifetime of a game; `number_to_win` is the
/// minimum run length that wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub columns: usize,
    pub rows: usize,
    pub number_to_win: usize,
}

impl Default for EngineConfig {
    /// The standard game: 7 columns, 6 rows, four-to-win
    fn default() -> Self {
        EngineConfig {
            columns: 7,
            rows: 6,
            number_to_win: 4,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::Validation("columns must be > 0".into()));
        }
        if self.rows == 0 {
            return Err(ConfigError::Validation("rows must be > 0".into()));
        }
        if self.number_to_win == 0 {
            return Err(ConfigError::Validation("number_to_win must be > 0".into()));
        }
        Ok(())
    }
}
