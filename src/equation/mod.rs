//! Postfix equations over the source numbers, their legality rules and evaluation

mod display;
mod errors;
mod eval;
mod token;

pub use errors::{EvalError, ParseTokenError};
pub use eval::{evaluate, is_complete, is_valid_extension};
pub use token::{Equation, Operator, Token};

pub(crate) use eval::apply_token;
