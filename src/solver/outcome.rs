use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::equation::Equation;

/// Terminal state of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Solved,
    Exhausted,
    TimedOut,
}

impl SearchStatus {
    pub fn is_solved(self) -> bool {
        self == SearchStatus::Solved
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            SearchStatus::Solved => "solved",
            SearchStatus::Exhausted => "exhausted",
            SearchStatus::TimedOut => "timed out",
        };
        write!(f, "{}", label)
    }
}

/// What a solve produced and what it cost.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub status: SearchStatus,
    /// The first equation found that evaluates to the target.
    pub equation: Option<Equation>,
    /// Nodes removed from the frontier and expanded.
    pub nodes_examined: u64,
    pub elapsed: Duration,
    pub frontier_high_water: usize,
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        self.status.is_solved()
    }
}
