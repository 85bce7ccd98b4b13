//! A plan is the sequence of locations a route moves through, excluding the
//! start location.

use crate::map::Location;
use itertools::Itertools;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plan {
    steps: Vec<Location>,
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<Location>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Location] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The full route including the start location, suitable for
    /// [`CityMap::total_cost`](crate::map::CityMap::total_cost).
    pub fn route_from(&self, start: Location) -> Vec<Location> {
        std::iter::once(start).chain(self.steps.iter().copied()).collect()
    }
}

impl Display for Plan {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.iter().join(" -> "))
    }
}

impl IntoIterator for Plan {
    type Item = Location;
    type IntoIter = std::vec::IntoIter<Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [Location];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_steps() {
        let plan = Plan::new(["B", "D"].map(Location::new).to_vec());
        assert_eq!(plan.to_string(), "B -> D");
        assert_eq!(Plan::empty().to_string(), "");
    }

    #[test]
    fn route_includes_start() {
        let plan = Plan::new(vec![Location::new("B")]);
        assert_eq!(
            plan.route_from(Location::new("A")),
            ["A", "B"].map(Location::new).to_vec()
        );
    }
}
