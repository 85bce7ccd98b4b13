mod heuristic;
mod straight_line;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use straight_line::StraightLineHeuristic;
pub use zero_heuristic::ZeroHeuristic;
