use std::path::PathBuf;

use thiserror::Error;

pub type LazySeqResult<T> = Result<T, LazySeqError>;

/// Errors raised around the engine: configuration, input loading and logging.
///
/// Producing and merging sequences never fails; reading past the end of a
/// sequence is reported through [`crate::Step::Complete`] instead.
#[derive(Debug, Error)]
pub enum LazySeqError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl LazySeqError {
    pub fn invalid(message: impl Into<String>) -> Self {
        LazySeqError::InvalidArgument(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LazySeqError::Io {
            path: path.into(),
            source,
        }
    }
}
