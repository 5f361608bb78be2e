use log::debug;
use rand::Rng;

use crate::game::constants::{LARGE_NUMBERS, MIN_SMALL, SMALL_NUMBERS, TARGET_RANGE};
use crate::game::errors::GameError;
use crate::game::request::GameRequest;
use crate::solver::constants::SOURCE_NUMBER_COUNT;

fn draw<R: Rng + ?Sized>(pool: &mut Vec<i64>, count: usize, rng: &mut R) -> Vec<i64> {
    let mut drawn = Vec::with_capacity(count);
    for _ in 0..count {
        if pool.is_empty() {
            break;
        }
        let index = rng.gen_range(0..pool.len());
        drawn.push(pool.swap_remove(index));
    }
    drawn
}

/// Draw six numbers from the combined small and large pools, without
/// replacement, and a target in `100..=999`.
pub fn generate_random_game<R: Rng + ?Sized>(rng: &mut R) -> GameRequest {
    let mut pool: Vec<i64> = SMALL_NUMBERS.iter().chain(&LARGE_NUMBERS).copied().collect();
    let numbers = draw(&mut pool, SOURCE_NUMBER_COUNT, rng);
    let target = rng.gen_range(TARGET_RANGE);

    debug!("Generated random game {:?} -> {}", numbers, target);
    GameRequest { numbers, target }
}

/// Draw `small` numbers from the small pool and `large` from the large pool.
///
/// # Errors
///
/// Returns [`GameError::InvalidSelection`] unless `small + large` is six,
/// `large` is at most four and `small` is at least two.
pub fn generate_game<R: Rng + ?Sized>(
    small: usize,
    large: usize,
    rng: &mut R,
) -> Result<GameRequest, GameError> {
    if small + large != SOURCE_NUMBER_COUNT || large > LARGE_NUMBERS.len() || small < MIN_SMALL {
        return Err(GameError::InvalidSelection { small, large });
    }

    let mut numbers = draw(&mut SMALL_NUMBERS.to_vec(), small, rng);
    numbers.extend(draw(&mut LARGE_NUMBERS.to_vec(), large, rng));
    let target = rng.gen_range(TARGET_RANGE);

    debug!(
        "Generated game with {} small and {} large: {:?} -> {}",
        small, large, numbers, target
    );
    Ok(GameRequest { numbers, target })
}
