use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in '{path}': {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid manifest: {0}")]
    Manifest(String),

    #[error("Failed to write report: {0}")]
    Report(#[source] std::io::Error),
}

impl EngineError {
    pub(crate) fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from opening or reading an input file.
    pub const fn is_file_access(&self) -> bool {
        matches!(self, Self::FileRead { .. })
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
