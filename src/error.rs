use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinsetError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Cannot access '{}': {source}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input in '{}': {message}", path.display())]
    InputFormat { path: PathBuf, message: String },

    #[error("Evaluation error: {0}")]
    Evaluation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl MinsetError {
    pub fn resource(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Resource {
            path: path.into(),
            source,
        }
    }

    pub fn input_format(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InputFormat {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MinsetError>;
