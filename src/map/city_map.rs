//! The in-memory map consumed by the search problems. A [`CityMap`] is built
//! once, either programmatically or from a [`MapDescription`], and stays
//! read-only for the duration of any search.
//!
//! [`MapDescription`]: crate::map::MapDescription

use crate::map::{compute_distance, make_tag, GeoLocation, Location, MapError, Tag};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct CityMap {
    /// Coordinates of every location on the map.
    locations: HashMap<Location, GeoLocation>,
    /// Directed travel costs. Ordered by neighbour so successor generation is
    /// deterministic.
    distances: HashMap<Location, BTreeMap<Location, f64>>,
    /// Tags attached to each location.
    tags: HashMap<Location, BTreeSet<Tag>>,
}

impl CityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location with the given tags. Every location additionally gets
    /// a `label=<location>` tag so it can always be found by name.
    pub fn add_location(
        &mut self,
        location: Location,
        geo_location: GeoLocation,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Result<(), MapError> {
        if self.locations.contains_key(&location) {
            return Err(MapError::DuplicateLocation(location));
        }
        self.locations.insert(location, geo_location);
        self.distances.entry(location).or_default();
        let location_tags = self.tags.entry(location).or_default();
        location_tags.insert(make_tag("label", location.as_str()));
        location_tags.extend(tags);
        Ok(())
    }

    /// Add a directed edge. If `cost` is `None` the straight-line distance
    /// between the endpoints is used.
    pub fn add_edge(
        &mut self,
        from: Location,
        to: Location,
        cost: Option<f64>,
    ) -> Result<(), MapError> {
        let cost = match cost {
            Some(cost) => cost,
            None => compute_distance(self.geo_location(from)?, self.geo_location(to)?),
        };
        if !cost.is_finite() || cost < 0. {
            return Err(MapError::InvalidCost { from, to, cost });
        }
        self.geo_location(to)?;
        self.distances
            .get_mut(&from)
            .ok_or(MapError::UnknownLocation(from))?
            .insert(to, cost);
        debug!(%from, %to, cost, "added edge");
        Ok(())
    }

    /// Add an edge in both directions with the same cost.
    pub fn connect(
        &mut self,
        source: Location,
        target: Location,
        cost: Option<f64>,
    ) -> Result<(), MapError> {
        self.add_edge(source, target, cost)?;
        self.add_edge(target, source, cost)
    }

    pub fn locations(&self) -> &HashMap<Location, GeoLocation> {
        &self.locations
    }

    pub fn distances(&self) -> &HashMap<Location, BTreeMap<Location, f64>> {
        &self.distances
    }

    pub fn tags(&self) -> &HashMap<Location, BTreeSet<Tag>> {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn geo_location(&self, location: Location) -> Result<&GeoLocation, MapError> {
        self.locations
            .get(&location)
            .ok_or(MapError::UnknownLocation(location))
    }

    pub fn neighbours(&self, location: Location) -> Result<&BTreeMap<Location, f64>, MapError> {
        self.distances
            .get(&location)
            .ok_or(MapError::UnknownLocation(location))
    }

    pub fn tags_of(&self, location: Location) -> Result<&BTreeSet<Tag>, MapError> {
        self.tags
            .get(&location)
            .ok_or(MapError::UnknownLocation(location))
    }

    pub fn has_tag(&self, location: Location, tag: Tag) -> Result<bool, MapError> {
        Ok(self.tags_of(location)?.contains(&tag))
    }

    /// All locations carrying `tag`, in sorted order.
    pub fn locations_with_tag(&self, tag: Tag) -> Vec<Location> {
        let mut locations: Vec<Location> = self
            .tags
            .iter()
            .filter(|(_, tags)| tags.contains(&tag))
            .map(|(&location, _)| location)
            .collect();
        locations.sort();
        locations
    }

    /// Sum of the edge costs along `path`. Consecutive locations must be
    /// joined by an edge.
    pub fn total_cost(&self, path: &[Location]) -> Result<f64, MapError> {
        let mut cost = 0.;
        for step in path.windows(2) {
            cost += self
                .neighbours(step[0])?
                .get(&step[1])
                .ok_or(MapError::UnknownLocation(step[1]))?;
        }
        Ok(cost)
    }
}

/// Return one location carrying `tag`. When several do, the smallest location
/// identifier is returned so the choice is stable.
pub fn location_from_tag(tag: Tag, city_map: &CityMap) -> Result<Location, MapError> {
    city_map
        .locations_with_tag(tag)
        .into_iter()
        .next()
        .ok_or(MapError::TagNotFound(tag))
}
