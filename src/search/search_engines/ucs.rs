//! Uniform cost search, i.e. Dijkstra's algorithm over the abstract states of
//! a [`SearchProblem`].

use crate::search::{
    search_engines::{SearchEngine, SearchResult, Solution},
    Cost, NodeId, SearchError, SearchNodeStatus, SearchProblem, SearchSpace, SearchStatistics,
};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use tracing::{debug, info, trace};

/// Uniform cost search. Returns a cheapest route as long as all transition
/// costs are non-negative; negative costs are not detected.
///
/// The open list is ordered by path cost, ties broken by the order in which
/// states were discovered, so repeated searches on the same problem give
/// identical results.
#[derive(Debug, Default)]
pub struct UniformCostSearch {}

impl UniformCostSearch {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for UniformCostSearch {
    fn search(
        &mut self,
        problem: &dyn SearchProblem,
    ) -> Result<(SearchResult, SearchStatistics), SearchError> {
        let mut statistics = SearchStatistics::new();
        let mut priority_queue: PriorityQueue<NodeId, Reverse<(Cost, NodeId)>> =
            PriorityQueue::new();
        let mut search_space = SearchSpace::new(problem.start_state());

        let root_node = search_space.get_root_node_mut();
        root_node.open(Cost::from(0.));
        let root_id = root_node.get_node_id();
        priority_queue.push(root_id, Reverse((root_node.get_g(), root_id)));

        while let Some((node_id, Reverse((g_value, _)))) = priority_queue.pop() {
            let node = search_space.get_node_mut(node_id);
            if node.get_status() == SearchNodeStatus::Closed || g_value > node.get_g() {
                // stale entry
                continue;
            }
            node.close();
            statistics.increment_expanded_nodes();

            let state = search_space.get_state(node_id).clone();
            trace!(?state, g = g_value.into_inner(), "expanding");
            if problem.is_end(&state)? {
                let plan = search_space.extract_plan(node_id);
                statistics.finalise_search();
                info!(
                    plan_length = plan.len(),
                    total_cost = g_value.into_inner(),
                    "solution found"
                );
                return Ok((
                    SearchResult::Success(Solution {
                        plan,
                        total_cost: g_value,
                        states_explored: statistics.expanded_nodes(),
                    }),
                    statistics,
                ));
            }

            let successors = problem.successors_and_costs(&state)?;
            statistics.increment_generated_transitions(successors.len());
            for successor in successors {
                let candidate = g_value + successor.cost;
                let child_node =
                    search_space.insert_or_get_node(successor.state, successor.label, node_id);
                let child_id = child_node.get_node_id();
                match child_node.get_status() {
                    SearchNodeStatus::New => {
                        child_node.open(candidate);
                        statistics.increment_generated_nodes(1);
                        priority_queue.push(child_id, Reverse((candidate, child_id)));
                    }
                    SearchNodeStatus::Open if candidate < child_node.get_g() => {
                        child_node.reopen(candidate, node_id, successor.label);
                        statistics.increment_updated_nodes();
                        priority_queue.push_increase(child_id, Reverse((candidate, child_id)));
                    }
                    _ => {}
                }
            }
        }

        statistics.finalise_search();
        debug!(num_states = search_space.len(), "open list exhausted");
        info!("no solution");
        Ok((SearchResult::ProvablyUnsolvable, statistics))
    }
}
