mod search_engine;
mod ucs;

pub use search_engine::{SearchEngine, SearchResult, Solution};
pub use ucs::UniformCostSearch;
