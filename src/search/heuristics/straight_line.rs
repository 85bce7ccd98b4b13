use crate::map::{compute_distance, CityMap, GeoLocation, MapError, Tag};
use crate::search::{states::State, Heuristic, HeuristicValue, SearchError};
use ordered_float::{Float, OrderedFloat};
use std::rc::Rc;
use tracing::debug;

/// Straight-line distance from a state's location to the nearest location
/// carrying the end tag. A lower bound on the true cost whenever travel costs
/// are never shorter than the straight-line distance between endpoints.
///
/// The memory of the state is ignored, so the heuristic works for both the
/// plain and the waypoint problems.
#[derive(Debug, Clone)]
pub struct StraightLineHeuristic {
    end_tag: Tag,
    city_map: Rc<CityMap>,
    /// Coordinates of every location with the end tag, computed once.
    end_geo_locations: Vec<GeoLocation>,
}

impl StraightLineHeuristic {
    /// Fails with [`MapError::TagNotFound`] if no location carries `end_tag`.
    pub fn new(end_tag: Tag, city_map: Rc<CityMap>) -> Result<Self, SearchError> {
        let end_geo_locations = city_map
            .locations_with_tag(end_tag)
            .into_iter()
            .map(|location| city_map.geo_location(location).copied())
            .collect::<Result<Vec<_>, _>>()?;
        if end_geo_locations.is_empty() {
            return Err(MapError::TagNotFound(end_tag).into());
        }
        debug!(%end_tag, num_end_locations = end_geo_locations.len());
        Ok(Self {
            end_tag,
            city_map,
            end_geo_locations,
        })
    }

    pub fn end_tag(&self) -> Tag {
        self.end_tag
    }
}

impl Heuristic for StraightLineHeuristic {
    fn evaluate(&self, state: &State) -> Result<HeuristicValue, SearchError> {
        let here = self.city_map.geo_location(state.location)?;
        Ok(self
            .end_geo_locations
            .iter()
            .map(|end| OrderedFloat(compute_distance(here, end)))
            .min()
            .unwrap_or_else(HeuristicValue::infinity))
    }
}
