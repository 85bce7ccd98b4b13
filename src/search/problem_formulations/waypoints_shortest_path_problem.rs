//! Shortest path that has to pass through locations covering a set of
//! waypoint tags, in any order.
//!
//! Remembering every visited location would be correct but makes each
//! distinct path its own state. Instead a state only remembers which of the
//! waypoint tags it has collected so far. All paths with the same remaining
//! requirements then share a state, which bounds the number of memories to
//! 2^k for k waypoint tags.

use crate::map::{CityMap, Location, Tag};
use crate::search::{
    states::{Memory, State},
    SearchError, SearchProblem, Successor,
};
use itertools::Itertools;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct WaypointsShortestPathProblem {
    start_location: Location,
    /// Sorted and free of duplicates.
    waypoint_tags: Vec<Tag>,
    end_tag: Tag,
    city_map: Rc<CityMap>,
}

impl WaypointsShortestPathProblem {
    pub fn new(
        start_location: Location,
        waypoint_tags: impl IntoIterator<Item = Tag>,
        end_tag: Tag,
        city_map: Rc<CityMap>,
    ) -> Self {
        Self {
            start_location,
            waypoint_tags: waypoint_tags.into_iter().sorted().dedup().collect(),
            end_tag,
            city_map,
        }
    }

    pub fn waypoint_tags(&self) -> &[Tag] {
        &self.waypoint_tags
    }

    pub fn end_tag(&self) -> Tag {
        self.end_tag
    }

    fn waypoint_tags_at(&self, location: Location) -> Result<Vec<Tag>, SearchError> {
        let tags = self.city_map.tags_of(location)?;
        Ok(self
            .waypoint_tags
            .iter()
            .filter(|tag| tags.contains(*tag))
            .copied()
            .collect())
    }
}

impl SearchProblem for WaypointsShortestPathProblem {
    /// Coverage starts out empty, even if the start location carries waypoint
    /// tags itself. Those only count once the route comes back to it.
    fn start_state(&self) -> State {
        State::with_memory(self.start_location, Memory::empty())
    }

    fn is_end(&self, state: &State) -> Result<bool, SearchError> {
        let at_end = self.city_map.has_tag(state.location, self.end_tag)?;
        Ok(at_end && state.memory.is_superset_of(&self.waypoint_tags))
    }

    fn successors_and_costs(&self, state: &State) -> Result<Vec<Successor>, SearchError> {
        let mut successors = vec![];
        for (&next_location, &cost) in self.city_map.neighbours(state.location)? {
            let memory = state.memory.union(self.waypoint_tags_at(next_location)?);
            successors.push(Successor::new(
                next_location,
                State::with_memory(next_location, memory),
                cost,
            ));
        }
        Ok(successors)
    }
}
