use log::{debug, warn};

use crate::solver::constants::SOURCE_NUMBER_COUNT;
use crate::utils::errors::ValidationError;

/// # Errors
///
/// Returns an error unless there are exactly six numbers, all positive.
pub fn validate_numbers(numbers: &[i64]) -> Result<(), ValidationError> {
    debug!("Validating source numbers: {:?}", numbers);

    if numbers.len() != SOURCE_NUMBER_COUNT {
        warn!(
            "Expected {} source numbers, got {}",
            SOURCE_NUMBER_COUNT,
            numbers.len()
        );
        return Err(ValidationError::WrongNumberCount {
            expected: SOURCE_NUMBER_COUNT,
            actual: numbers.len(),
        });
    }

    if let Some(&bad) = numbers.iter().find(|&&n| n <= 0) {
        warn!("Source number is not positive: {}", bad);
        return Err(ValidationError::NonPositiveNumber(bad));
    }

    Ok(())
}

/// # Errors
///
/// Returns an error if the target is zero or negative.
pub fn validate_target(target: i64) -> Result<(), ValidationError> {
    if target <= 0 {
        warn!("Target is not positive: {}", target);
        return Err(ValidationError::NonPositiveTarget(target));
    }
    Ok(())
}
