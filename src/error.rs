use std::path::PathBuf;

/// Errors produced by the game engine.
///
/// All of these are deterministic caller-input or state-conflict errors; the
/// engine has no internal faults to surface. Every failing operation leaves
/// engine state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {0} does not exist")]
    NoSuchColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("invalid board dimensions: {columns} columns x {rows} rows")]
    InvalidDimensions { columns: usize, rows: usize },

    #[error("number to win must be at least 1")]
    InvalidNumberToWin,
}

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
