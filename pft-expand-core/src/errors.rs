use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum ExpandError {
    #[error("{0}")]
    Error(String),
    #[error("Unknown parameter name '{0}'")]
    UnknownParameter(String),
}

/// Convenience type for `Result<T, ExpandError>`.
pub type ExpandResult<T> = Result<T, ExpandError>;
