use std::time::Duration;

use crate::solver::constants::{DEFAULT_CHECK_INTERVAL, DEFAULT_TIME_LIMIT};

/// Whether the frontier skips children equivalent to an already enqueued node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupPolicy {
    /// Plain FIFO; every generated child is enqueued.
    #[default]
    Off,
    /// Remember up to `capacity` node states and skip repeats. Once full,
    /// new states are enqueued without being remembered.
    Bounded { capacity: usize },
}

/// Tunables for a single solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub time_limit: Duration,
    /// Number of expansions between wall-clock checks.
    pub check_interval: u64,
    pub dedup: DedupPolicy,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    #[must_use]
    pub fn with_check_interval(mut self, check_interval: u64) -> Self {
        self.check_interval = check_interval.max(1);
        self
    }

    #[must_use]
    pub fn with_dedup(mut self, dedup: DedupPolicy) -> Self {
        self.dedup = dedup;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            check_interval: DEFAULT_CHECK_INTERVAL,
            dedup: DedupPolicy::Off,
        }
    }
}
