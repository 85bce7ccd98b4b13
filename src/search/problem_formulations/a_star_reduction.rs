//! Reduction of A* search to uniform cost search.
//!
//! Given a problem and a heuristic `h`, the reduced problem has the same
//! states, start and end states, but every transition `s -> s'` with cost `c`
//! costs `c + h(s') - h(s)` instead. Along any route from the start to an end
//! state these costs telescope to `true_cost - h(start)` (as `h(end) = 0`), a
//! constant shift, so the cheapest route is unchanged. A consistent heuristic
//! keeps every reweighted cost non-negative, and uniform cost search on the
//! reduced problem then explores states exactly in A* order.

use crate::search::{states::State, Cost, Heuristic, SearchError, SearchProblem, Successor};

#[derive(Debug)]
pub struct AStarReduction<'a> {
    problem: &'a dyn SearchProblem,
    heuristic: &'a dyn Heuristic,
}

impl<'a> AStarReduction<'a> {
    pub fn new(problem: &'a dyn SearchProblem, heuristic: &'a dyn Heuristic) -> Self {
        Self { problem, heuristic }
    }

    /// Recover the cost of a route in the original problem from its cost in
    /// the reduced problem.
    pub fn true_cost(&self, reduced_cost: Cost) -> Result<Cost, SearchError> {
        Ok(reduced_cost + self.heuristic.evaluate(&self.problem.start_state())?)
    }
}

/// Turn `problem` into a problem whose uniform cost search is A* search on
/// `problem` under `heuristic`.
pub fn a_star_reduction<'a>(
    problem: &'a dyn SearchProblem,
    heuristic: &'a dyn Heuristic,
) -> AStarReduction<'a> {
    AStarReduction::new(problem, heuristic)
}

impl SearchProblem for AStarReduction<'_> {
    fn start_state(&self) -> State {
        self.problem.start_state()
    }

    fn is_end(&self, state: &State) -> Result<bool, SearchError> {
        self.problem.is_end(state)
    }

    fn successors_and_costs(&self, state: &State) -> Result<Vec<Successor>, SearchError> {
        let h = self.heuristic.evaluate(state)?;
        self.problem
            .successors_and_costs(state)?
            .into_iter()
            .map(|successor| -> Result<Successor, SearchError> {
                let h_next = self.heuristic.evaluate(&successor.state)?;
                Ok(Successor {
                    cost: successor.cost + h_next - h,
                    ..successor
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{make_tag, Location};
    use crate::search::{
        HeuristicValue, SearchEngine, SearchResult, ShortestPathProblem, StraightLineHeuristic,
        UniformCostSearch, WaypointsShortestPathProblem, ZeroHeuristic,
    };
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// A heuristic backed by a fixed table, zero for unlisted locations.
    #[derive(Debug)]
    struct TableHeuristic(HashMap<Location, f64>);

    impl Heuristic for TableHeuristic {
        fn evaluate(&self, state: &State) -> Result<HeuristicValue, SearchError> {
            Ok(self.0.get(&state.location).copied().unwrap_or(0.).into())
        }
    }

    fn diamond_heuristic() -> TableHeuristic {
        // exact remaining distances to D, hence consistent
        TableHeuristic(HashMap::from([
            (Location::new("A"), 2.),
            (Location::new("B"), 1.),
            (Location::new("C"), 1.),
            (Location::new("D"), 0.),
        ]))
    }

    fn solve(problem: &dyn SearchProblem) -> crate::search::Solution {
        match UniformCostSearch::new().search(problem).unwrap().0 {
            SearchResult::Success(solution) => solution,
            SearchResult::ProvablyUnsolvable => panic!("expected a solution"),
        }
    }

    #[test]
    fn start_and_end_are_unchanged() {
        let problem = ShortestPathProblem::new(
            Location::new("A"),
            make_tag("end", "yes"),
            Rc::new(diamond_map()),
        );
        let heuristic = diamond_heuristic();
        let reduced = a_star_reduction(&problem, &heuristic);

        assert_eq!(reduced.start_state(), problem.start_state());
        for name in ["A", "B", "C", "D"] {
            let state = State::new(Location::new(name));
            assert_eq!(
                reduced.is_end(&state).unwrap(),
                problem.is_end(&state).unwrap()
            );
        }
    }

    #[test]
    fn costs_are_reweighted() {
        let problem = ShortestPathProblem::new(
            Location::new("A"),
            make_tag("end", "yes"),
            Rc::new(diamond_map()),
        );
        let heuristic = diamond_heuristic();
        let reduced = a_star_reduction(&problem, &heuristic);

        let successors = reduced.successors_and_costs(&reduced.start_state()).unwrap();
        let costs: Vec<(Location, f64)> = successors
            .iter()
            .map(|s| (s.label, s.cost.into_inner()))
            .collect();
        // A->B: 1 + 1 - 2, A->C: 5 + 1 - 2
        assert_eq!(
            costs,
            vec![(Location::new("B"), 0.), (Location::new("C"), 4.)]
        );
    }

    #[test]
    fn reduced_cost_is_shifted_by_start_heuristic() {
        let problem = ShortestPathProblem::new(
            Location::new("A"),
            make_tag("end", "yes"),
            Rc::new(diamond_map()),
        );
        let heuristic = diamond_heuristic();
        let reduced = a_star_reduction(&problem, &heuristic);

        let plain = solve(&problem);
        let a_star = solve(&reduced);
        assert_eq!(plain.plan, a_star.plan);
        assert_approx_eq!(a_star.total_cost.into_inner(), 0.0);
        assert_approx_eq!(
            reduced.true_cost(a_star.total_cost).unwrap().into_inner(),
            plain.total_cost.into_inner()
        );
    }

    #[test]
    fn zero_heuristic_changes_nothing() {
        let problem = ShortestPathProblem::new(
            Location::new("0,0"),
            make_tag("label", "3,4"),
            Rc::new(weighted_grid_map(4, 5)),
        );
        let heuristic = ZeroHeuristic::new();
        let reduced = a_star_reduction(&problem, &heuristic);

        let plain = solve(&problem);
        let a_star = solve(&reduced);
        assert_eq!(plain.plan, a_star.plan);
        assert_eq!(plain.total_cost, a_star.total_cost);
        assert_eq!(plain.states_explored, a_star.states_explored);
    }

    #[test]
    fn straight_line_reduction_matches_uniform_cost_search() {
        let city_map = Rc::new(weighted_grid_map(6, 6));
        let end_tag = make_tag("label", "5,4");
        let heuristic = StraightLineHeuristic::new(end_tag, city_map.clone()).unwrap();

        for start in ["0,0", "2,5", "5,0", "3,3"] {
            let problem = ShortestPathProblem::new(Location::new(start), end_tag, city_map.clone());
            let reduced = a_star_reduction(&problem, &heuristic);

            let plain = solve(&problem);
            let a_star = solve(&reduced);
            assert_eq!(plain.plan, a_star.plan, "start {start}");
            assert_approx_eq!(
                reduced.true_cost(a_star.total_cost).unwrap().into_inner(),
                plain.total_cost.into_inner(),
                1e-6
            );
            assert!(a_star.states_explored <= plain.states_explored);
        }
    }

    #[test]
    fn straight_line_reduction_with_waypoints() {
        let city_map = Rc::new(weighted_grid_map(5, 5));
        let end_tag = make_tag("label", "4,4");
        let problem = WaypointsShortestPathProblem::new(
            Location::new("0,0"),
            [make_tag("label", "0,4"), make_tag("label", "4,0")],
            end_tag,
            city_map.clone(),
        );
        let heuristic = StraightLineHeuristic::new(end_tag, city_map).unwrap();
        let reduced = a_star_reduction(&problem, &heuristic);

        let plain = solve(&problem);
        let a_star = solve(&reduced);
        assert_eq!(plain.plan, a_star.plan);
        assert_approx_eq!(
            reduced.true_cost(a_star.total_cost).unwrap().into_inner(),
            plain.total_cost.into_inner(),
            1e-6
        );
    }
}
