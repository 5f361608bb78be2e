//! Countdown - A solver for the Countdown numbers game
//!
//! Given six source numbers and a target, the solver searches postfix
//! equations breadth-first, combining the numbers with `+ - * /` and using
//! each at most once, until one evaluates exactly to the target, the space
//! is exhausted, or a time limit passes.

pub mod equation;
pub mod game;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use equation::{Equation, EvalError, Operator, Token};
pub use game::{CompletedGame, GameError, GameRequest};
pub use solver::{DedupPolicy, SearchOutcome, SearchStatus, Solver, SolverConfig};
pub use utils::ValidationError;

/// Solve a game with the default solver configuration
///
/// # Arguments
///
/// * `numbers` - Exactly six positive source numbers
/// * `target` - The positive value to reach
///
/// # Returns
///
/// * `Ok(CompletedGame)` - The finished game, solved or not
/// * `Err(ValidationError)` - If the input is not a legal game
///
/// # Errors
///
/// This function will return an error if:
/// * There are not exactly six numbers
/// * Any number, or the target, is zero or negative
///
/// # Examples
///
/// ```
/// use countdown::solve;
///
/// match solve(&[1, 2, 3, 4, 10, 25], 156) {
///     Ok(game) if game.solved => println!("Found: {}", game.equation),
///     Ok(_) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(numbers: &[i64], target: i64) -> Result<CompletedGame, ValidationError> {
    let request = GameRequest::new(numbers.to_vec(), target)?;
    Ok(game::play(&Solver::new(), &request))
}
