// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Range error: the scale does not evenly divide one day
    #[error("invalid scale: {0} ms does not evenly divide one day")]
    InvalidScale(i64),

    #[error("malformed scale: {0:?}")]
    MalformedScale(String),

    #[error("malformed zone: {0:?}")]
    MalformedZone(String),

    #[error("instant out of range: {0} ms")]
    OutOfRange(i64),
}

pub type Result<T> = std::result::Result<T, DomainError>;
