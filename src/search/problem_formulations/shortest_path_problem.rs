use crate::map::{CityMap, Location, Tag};
use crate::search::{states::State, SearchError, SearchProblem, Successor};
use std::rc::Rc;

/// Find the cheapest route from `start_location` to any location carrying
/// `end_tag`. The goal depends on the location only, so every state carries
/// the empty memory.
#[derive(Debug, Clone)]
pub struct ShortestPathProblem {
    start_location: Location,
    end_tag: Tag,
    city_map: Rc<CityMap>,
}

impl ShortestPathProblem {
    pub fn new(start_location: Location, end_tag: Tag, city_map: Rc<CityMap>) -> Self {
        Self {
            start_location,
            end_tag,
            city_map,
        }
    }

    pub fn end_tag(&self) -> Tag {
        self.end_tag
    }
}

impl SearchProblem for ShortestPathProblem {
    fn start_state(&self) -> State {
        State::new(self.start_location)
    }

    fn is_end(&self, state: &State) -> Result<bool, SearchError> {
        Ok(self.city_map.has_tag(state.location, self.end_tag)?)
    }

    fn successors_and_costs(&self, state: &State) -> Result<Vec<Successor>, SearchError> {
        Ok(self
            .city_map
            .neighbours(state.location)?
            .iter()
            .map(|(&next_location, &cost)| {
                Successor::new(next_location, State::new(next_location), cost)
            })
            .collect())
    }
}
