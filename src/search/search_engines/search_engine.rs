use crate::search::{Cost, Plan, SearchError, SearchProblem, SearchStatistics};

/// A route found by a search engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Locations moved through, excluding the start.
    pub plan: Plan,
    /// Sum of the transition costs along the plan, in the searched problem.
    pub total_cost: Cost,
    /// Number of states expanded before the end state was reached.
    pub states_explored: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    /// The search was successful
    Success(Solution),
    /// No end state is reachable from the start state
    ProvablyUnsolvable,
}

pub trait SearchEngine {
    /// Search `problem` from its start state. Errors raised by the problem
    /// abort the search and are passed on; an unreachable goal is a regular
    /// [`SearchResult::ProvablyUnsolvable`] result.
    fn search(
        &mut self,
        problem: &dyn SearchProblem,
    ) -> Result<(SearchResult, SearchStatistics), SearchError>;
}
