use crate::map::Location;
use crate::search::{states::State, Cost, SearchError};
use std::fmt::Debug;

/// One outgoing transition of a state.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor {
    /// Human-meaningful name of the transition, here the destination
    /// location. Returned separately because the successor state may encode
    /// more than its location.
    pub label: Location,
    pub state: State,
    /// Cost of the transition, must be non-negative for uniform cost search
    /// to be optimal.
    pub cost: Cost,
}

impl Successor {
    pub fn new(label: Location, state: State, cost: impl Into<Cost>) -> Self {
        Self {
            label,
            state,
            cost: cost.into(),
        }
    }
}

/// A [`SearchProblem`] describes a state space for a search engine to explore.
/// Problems hold only their configuration; all search progress is carried by
/// the [`State`]s handed back and forth, so one problem can be searched any
/// number of times.
pub trait SearchProblem: Debug {
    /// The unique root of the search.
    fn start_state(&self) -> State;

    /// Goal test. Must depend on `state` alone.
    fn is_end(&self, state: &State) -> Result<bool, SearchError>;

    /// All transitions out of `state`.
    fn successors_and_costs(&self, state: &State) -> Result<Vec<Successor>, SearchError>;
}
