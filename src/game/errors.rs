use thiserror::Error;

use crate::utils::ValidationError;

/// Errors that can occur while building a game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid game request: {0}")]
    Validation(#[from] ValidationError),
    #[error("Cannot draw {small} small and {large} large numbers")]
    InvalidSelection { small: usize, large: usize },
}
