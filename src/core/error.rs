//! Error type shared by the solving library

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading resources or validating solver input
#[derive(Debug, Error)]
pub enum SolverError {
    /// The word list could not be read
    #[error("word list {} could not be read", path.display())]
    MissingResource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A word list could not be written
    #[error("word list {} could not be written", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A board, letter bag or block description is malformed
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A board-shape identifier that no game mode uses
    #[error("unsupported board shape '{0}'")]
    UnsupportedConfiguration(String),
}

impl SolverError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
