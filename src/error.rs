//! Module defining the errors which are exposed to the users of the crate

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generation parameters which can't produce a well-formed fixture, e.g., `min_line_len > max_line_len`
    #[error("invalid generation parameters: {message}")]
    InvalidParameters { message: String },

    /// One of the fixture files could not be created
    #[error("failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing or flushing a fixture failed midway
    #[error("failed to write fixture: {0}")]
    Write(#[from] std::io::Error),
}

pub(crate) fn invalid_parameters(message: impl Into<String>) -> Error {
    Error::InvalidParameters {
        message: message.into(),
    }
}

pub(crate) fn create_error(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
    Error::Create {
        path: path.into(),
        source,
    }
}
