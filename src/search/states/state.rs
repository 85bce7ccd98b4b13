//! A search state: a location on the map together with a [`Memory`] of
//! whatever path history the problem needs.

use crate::map::Location;
use crate::search::states::Memory;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    pub location: Location,
    pub memory: Memory,
}

impl State {
    /// A state whose memory is the empty sentinel.
    pub fn new(location: Location) -> Self {
        Self {
            location,
            memory: Memory::empty(),
        }
    }

    pub fn with_memory(location: Location, memory: Memory) -> Self {
        Self { location, memory }
    }
}
