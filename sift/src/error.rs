//! Error types for sift operations.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Searching by '{0}' is forbidden")]
    ForbiddenColumn(String),

    #[error("No known operator in '{0}'")]
    UnrecognizedOperator(String),

    #[error("Column '{0}' is missing a value")]
    MissingValue(String),
}

impl ParseError {
    /// Every parse failure is caused by caller input and should be reported
    /// as a rejection, never retried.
    pub fn is_client_error(&self) -> bool {
        true
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid operator catalog: {0}")]
    InvalidOperators(String),

    #[error("Unknown model: {0}")]
    UnknownModel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
