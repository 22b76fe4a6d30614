// src/error.rs
use std::{io, path::PathBuf};
use thiserror::Error;

/// Run-level failures. Per-record problems never end up here; they are routed
/// to the rejected output instead.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed JSON in {what}: {source}")]
    Json {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

impl ConvertError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::Open { path: path.into(), source }
    }

    pub(crate) fn json(what: impl Into<String>, source: serde_json::Error) -> Self {
        ConvertError::Json { what: what.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
