use crate::search::{states::State, Heuristic, HeuristicValue, SearchError};

#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(&self, _state: &State) -> Result<HeuristicValue, SearchError> {
        Ok((0.).into())
    }
}
