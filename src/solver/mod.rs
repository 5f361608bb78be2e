pub mod constants;
mod config;
mod core;
mod frontier;
mod node;
mod outcome;

pub use config::{DedupPolicy, SolverConfig};
pub use self::core::Solver;
pub use frontier::Frontier;
pub use node::Node;
pub use outcome::{SearchOutcome, SearchStatus};

#[cfg(test)]
mod tests;
