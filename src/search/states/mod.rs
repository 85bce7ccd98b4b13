mod memory;
mod state;

pub use memory::{Memory, TYPICAL_NUM_WAYPOINTS};
pub use state::State;
