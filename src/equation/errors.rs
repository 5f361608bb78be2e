use thiserror::Error;

/// Reasons an operator application or a whole equation is rejected.
///
/// Every variant is an expected pruning outcome during search; none of them
/// reach the caller of the solver.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("Operator needs two operands on the stack")]
    InsufficientOperands,
    #[error("Subtraction result would be zero or negative")]
    NonPositiveResult,
    #[error("Multiplication by 1")]
    TrivialMultiply,
    #[error("Division by zero, by 1, of 1, by itself, or with a remainder")]
    InvalidDivision,
    #[error("Arithmetic overflow")]
    Overflow,
    #[error("Equation leaves {remaining} values on the stack")]
    Incomplete { remaining: usize },
}

/// Error returned when a string cannot be read as a token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Not a number or operator: '{0}'")]
pub struct ParseTokenError(pub String);
