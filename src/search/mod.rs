pub mod heuristics;
mod plan;
mod problem;
mod search_config;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
mod validate;
mod verbosity;

pub use heuristics::{Heuristic, HeuristicValue, ZeroHeuristic};
pub use plan::Plan;
pub use problem::{Problem, ProblemError};
pub use search_config::{ConfigError, SearchConfig};
pub use search_node::{NodeId, SearchNode, SearchNodeStatus, NO_NODE};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use validate::{validate, PlanError};
pub use verbosity::Verbosity;
