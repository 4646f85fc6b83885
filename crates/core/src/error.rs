// Central Error Type for the Library

use crate::domain::DomainError;
use thiserror::Error;

/// Library-level error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// True for the range-error kind raised on a scale that does not divide a day
    pub fn is_invalid_scale(&self) -> bool {
        matches!(self, AppError::Domain(DomainError::InvalidScale(_)))
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::Parse(err.to_string())
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
