use crate::map::{CityMap, Tag};
use crate::search::{
    heuristics::{StraightLineHeuristic, ZeroHeuristic},
    states::State,
    SearchError,
};
use ordered_float::OrderedFloat;
use std::fmt::Debug;
use std::rc::Rc;

pub type HeuristicValue = OrderedFloat<f64>;

/// An estimate of the cheapest remaining cost from a state to any end state.
///
/// For the A* reduction to stay optimal the heuristic has to be consistent,
/// `h(s) <= cost(s, s') + h(s')` for every transition, and zero on every end
/// state. Neither property is checked: a heuristic that breaks them silently
/// produces suboptimal routes or wrong costs.
pub trait Heuristic: Debug {
    fn evaluate(&self, state: &State) -> Result<HeuristicValue, SearchError>;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(help = "The zero heuristic, equivalent to plain uniform cost search.")]
    Zero,
    #[clap(help = "Straight-line distance to the closest location with the end tag.")]
    StraightLine,
}

impl HeuristicName {
    pub fn create(
        &self,
        end_tag: Tag,
        city_map: Rc<CityMap>,
    ) -> Result<Box<dyn Heuristic>, SearchError> {
        let heuristic: Box<dyn Heuristic> = match self {
            HeuristicName::Zero => Box::new(ZeroHeuristic::new()),
            HeuristicName::StraightLine => {
                Box::new(StraightLineHeuristic::new(end_tag, city_map)?)
            }
        };
        Ok(heuristic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{make_tag, Location};
    use crate::test_utils::*;

    #[test]
    fn create_by_name() {
        let city_map = Rc::new(grid_map(2, 2));
        let end_tag = make_tag("label", "1,1");
        let state = State::new(Location::new("0,0"));

        let zero = HeuristicName::Zero.create(end_tag, city_map.clone()).unwrap();
        assert_eq!(zero.evaluate(&state).unwrap(), OrderedFloat(0.));

        let straight_line = HeuristicName::StraightLine
            .create(end_tag, city_map)
            .unwrap();
        assert!(straight_line.evaluate(&state).unwrap() > OrderedFloat(0.));
    }
}
