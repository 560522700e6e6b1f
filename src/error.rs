use std::path::PathBuf;

/// Errors that can occur when reading a typed coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected two characters, got '{0}'")]
    Length(String),

    #[error("'{0}' is not a column")]
    File(char),

    #[error("'{0}' is not a row")]
    Rank(char),
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
