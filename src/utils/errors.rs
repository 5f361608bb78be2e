use thiserror::Error;

/// Errors raised while checking a game request before solving
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Expected {expected} source numbers, got {actual}")]
    WrongNumberCount { expected: usize, actual: usize },
    #[error("Source numbers must be positive: {0}")]
    NonPositiveNumber(i64),
    #[error("Target must be positive: {0}")]
    NonPositiveTarget(i64),
}
