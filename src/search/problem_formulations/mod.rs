mod a_star_reduction;
mod bounded_problem;
mod search_problem;
mod shortest_path_problem;
mod waypoints_shortest_path_problem;

pub use a_star_reduction::{a_star_reduction, AStarReduction};
pub use bounded_problem::BoundedProblem;
pub use search_problem::{SearchProblem, Successor};
pub use shortest_path_problem::ShortestPathProblem;
pub use waypoints_shortest_path_problem::WaypointsShortestPathProblem;
