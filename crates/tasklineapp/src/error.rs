use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TasklineError {
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config document: {0}")]
    InvalidDocument(String),

    #[error("Invalid config path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Unknown storage module: {0}")]
    UnknownStorageModule(String),

    #[error("Could not determine home directory")]
    NoHomeDirectory,

    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl TasklineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TasklineError>;
