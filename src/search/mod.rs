mod error;
pub mod heuristics;
mod plan;
pub mod problem_formulations;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
pub mod states;
mod validate;
mod verbosity;

pub use error::SearchError;
pub use heuristics::{
    Heuristic, HeuristicName, HeuristicValue, StraightLineHeuristic, ZeroHeuristic,
};
pub use plan::Plan;
pub use problem_formulations::{
    a_star_reduction, AStarReduction, BoundedProblem, SearchProblem, ShortestPathProblem,
    Successor, WaypointsShortestPathProblem,
};
pub use search_engines::{SearchEngine, SearchResult, Solution, UniformCostSearch};
pub use search_node::{Cost, NodeId, SearchNode, SearchNodeStatus, NO_NODE};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use states::{Memory, State};
pub use validate::{validate, ValidationError};
pub use verbosity::Verbosity;
