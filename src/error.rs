//! Error types for the selfplay crate

use thiserror::Error;

/// Main error type for the selfplay crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("no available actions: the board has no empty cells")]
    NoAvailableActions,

    #[error("illegal move: cell ({row}, {col}) is already occupied")]
    IllegalMove { row: usize, col: usize },

    #[error("invalid coordinate ({row}, {col}): rows and columns must be in 0-2")]
    InvalidCoordinate { row: usize, col: usize },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
