//! Input validation for game requests

mod errors;
mod validation;

pub use errors::ValidationError;
pub use validation::{validate_numbers, validate_target};
