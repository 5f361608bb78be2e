use log::info;
use rayon::prelude::*;

use crate::game::completed::CompletedGame;
use crate::game::request::GameRequest;
use crate::solver::Solver;

/// Solve one game and record the result.
pub fn play(solver: &Solver, request: &GameRequest) -> CompletedGame {
    let outcome = solver.solve(request.numbers(), request.target());
    CompletedGame::from_outcome(request, &outcome)
}

/// Solve independent games in parallel. Results keep the order of `requests`.
pub fn play_batch(solver: &Solver, requests: &[GameRequest]) -> Vec<CompletedGame> {
    info!("Solving {} games in parallel", requests.len());
    requests
        .par_iter()
        .map(|request| play(solver, request))
        .collect()
}
