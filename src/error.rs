// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::exit::TallyExit;

#[derive(Debug, Error)]
pub enum TallyError {
    /// Missing or inconsistent run settings. Reported before any work starts.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),

    #[error("expected top-level JSON array")]
    NotAnArray,

    #[error("malformed activity at array index {index}: {source}")]
    Decode {
        index: usize,
        source: serde_json::Error,
    },

    #[error("expected ',' or ']' after array index {index}, found {found:?}")]
    Syntax { index: usize, found: char },

    #[error("failed to serialize {path}: {source}")]
    Serialize {
        source: serde_json::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, TallyError>;

impl TallyError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { source, path }
    }

    /// Process exit status for this failure.
    #[must_use]
    pub fn exit_code(&self) -> TallyExit {
        match self {
            Self::Config(_) => TallyExit::InvalidInput,
            _ => TallyExit::Error,
        }
    }
}

// Allow `?` on std::io::Error by converting to TallyError::Io with unknown path.
impl From<std::io::Error> for TallyError {
    fn from(source: std::io::Error) -> Self {
        TallyError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
