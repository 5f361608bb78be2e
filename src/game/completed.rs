use std::fmt;

use serde::Serialize;

use crate::game::request::GameRequest;
use crate::solver::{SearchOutcome, SearchStatus};

/// Record of a finished game, as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedGame {
    pub numbers: Vec<i64>,
    pub target: i64,
    pub status: SearchStatus,
    pub solved: bool,
    /// Winning equation in postfix order, empty unless solved.
    pub equation_tokens: Vec<String>,
    /// Winning equation in infix form, empty unless solved.
    pub equation: String,
    pub elapsed_ms: u64,
    pub nodes_examined: u64,
}

impl CompletedGame {
    pub fn from_outcome(request: &GameRequest, outcome: &SearchOutcome) -> Self {
        let (equation_tokens, equation) = match &outcome.equation {
            Some(eq) => (eq.to_strings(), eq.to_infix().unwrap_or_default()),
            None => (Vec::new(), String::new()),
        };

        Self {
            numbers: request.numbers().to_vec(),
            target: request.target(),
            status: outcome.status,
            solved: outcome.is_solved(),
            equation_tokens,
            equation,
            elapsed_ms: u64::try_from(outcome.elapsed.as_millis()).unwrap_or(u64::MAX),
            nodes_examined: outcome.nodes_examined,
        }
    }
}

impl fmt::Display for CompletedGame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.status {
            SearchStatus::Solved => write!(f, "{} = {}", self.equation, self.target),
            SearchStatus::Exhausted => write!(f, "No solution."),
            SearchStatus::TimedOut => write!(f, "Unknown."),
        }
    }
}
