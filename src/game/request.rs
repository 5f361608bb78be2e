use crate::utils::{ValidationError, validate_numbers, validate_target};

/// Six source numbers and a target, checked before they reach the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRequest {
    pub(crate) numbers: Vec<i64>,
    pub(crate) target: i64,
}

impl GameRequest {
    /// # Errors
    ///
    /// Returns an error unless there are exactly six positive numbers and the
    /// target is positive.
    pub fn new(numbers: Vec<i64>, target: i64) -> Result<Self, ValidationError> {
        validate_numbers(&numbers)?;
        validate_target(target)?;
        Ok(Self { numbers, target })
    }

    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    pub fn target(&self) -> i64 {
        self.target
    }
}
