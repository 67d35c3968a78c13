//! Error types for the Chomp crate

use thiserror::Error;

/// Main error type for the Chomp crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("division by zero in {operation}")]
    DivideByZero { operation: String },

    #[error("fraction denominator must be non-zero")]
    ZeroDenominator,

    #[error("cannot parse '{input}' as a fraction (expected 'p/q' or 'p')")]
    ParseFraction { input: String },

    #[error("cell ({row}, {col}) is outside the board")]
    CellOutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) has already been eaten")]
    CellAlreadyEaten { row: usize, col: usize },

    #[error("no cells remaining on the board")]
    NoCellsRemaining,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

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

    #[error("statistics error: {message}")]
    Statistics { message: String },
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }
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
