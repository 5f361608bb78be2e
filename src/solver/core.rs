use std::time::Instant;

use log::{debug, info, warn};

use crate::equation::Equation;
use crate::solver::config::SolverConfig;
use crate::solver::frontier::Frontier;
use crate::solver::node::Node;
use crate::solver::outcome::{SearchOutcome, SearchStatus};

/// Breadth-first solver for the numbers game.
///
/// Each call to [`Solver::solve`] owns its own frontier and counters, so one
/// `Solver` can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a solver with the default one minute time limit and no dedup
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search for an equation over `numbers` that evaluates to `target`.
    ///
    /// Stops at the first complete equation whose value equals the target.
    /// The search is exhaustive unless the time limit passes first; the
    /// clock is only read every `check_interval` expansions.
    pub fn solve(&self, numbers: &[i64], target: i64) -> SearchOutcome {
        info!("Solving {:?} for {}", numbers, target);

        let start = Instant::now();
        let check_interval = self.config.check_interval.max(1);
        let mut frontier = Frontier::new(self.config.dedup);
        let mut nodes_examined: u64 = 0;

        let finish = |status: SearchStatus,
                      equation: Option<Equation>,
                      nodes_examined: u64,
                      frontier: &Frontier| {
            let outcome = SearchOutcome {
                status,
                equation,
                nodes_examined,
                elapsed: start.elapsed(),
                frontier_high_water: frontier.high_water(),
            };
            info!(
                "Search {} after {} nodes in {:?} (frontier peak {}, {} duplicates skipped)",
                outcome.status,
                outcome.nodes_examined,
                outcome.elapsed,
                outcome.frontier_high_water,
                frontier.skipped()
            );
            outcome
        };

        for child in Node::root(numbers).children() {
            if child.result() == Some(target) {
                info!("Target is a source number: {}", child.equation());
                let equation = child.equation().clone();
                return finish(SearchStatus::Solved, Some(equation), 0, &frontier);
            }
            frontier.push(child);
        }

        while let Some(node) = frontier.pop() {
            let children = node.children();

            if let Some(winner) = children.iter().find(|c| c.result() == Some(target)) {
                nodes_examined += 1;
                info!("Found {} = {}", winner.equation(), target);
                let equation = winner.equation().clone();
                return finish(SearchStatus::Solved, Some(equation), nodes_examined, &frontier);
            }

            frontier.extend(children);
            nodes_examined += 1;

            if nodes_examined % check_interval == 0 {
                debug!(
                    "{} nodes examined, frontier holds {}",
                    nodes_examined,
                    frontier.len()
                );
                if start.elapsed() >= self.config.time_limit {
                    warn!(
                        "Time limit of {:?} reached, giving up",
                        self.config.time_limit
                    );
                    return finish(SearchStatus::TimedOut, None, nodes_examined, &frontier);
                }
            }
        }

        warn!("Search space exhausted without reaching {}", target);
        finish(SearchStatus::Exhausted, None, nodes_examined, &frontier)
    }
}
