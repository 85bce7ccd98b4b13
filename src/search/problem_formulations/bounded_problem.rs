//! Caps on the effort spent searching a problem.
//!
//! The search engines run until they find an end state or exhaust the state
//! space. To bound a search, wrap the problem in a [`BoundedProblem`]: it
//! counts expansions (calls to `successors_and_costs`) and fails the search
//! with an error as soon as a limit is exceeded.

use crate::search::{states::State, SearchError, SearchProblem, Successor};
use std::cell::Cell;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug)]
pub struct BoundedProblem<'a> {
    problem: &'a dyn SearchProblem,
    max_expansions: Option<usize>,
    time_limit: Option<Duration>,
    expansions: Cell<usize>,
    start_time: Cell<Instant>,
}

impl<'a> BoundedProblem<'a> {
    pub fn new(
        problem: &'a dyn SearchProblem,
        max_expansions: Option<usize>,
        time_limit: Option<Duration>,
    ) -> Self {
        info!(
            max_expansions = max_expansions,
            time_limit = time_limit.map(|d| d.as_secs_f64()),
        );
        Self {
            problem,
            max_expansions,
            time_limit,
            expansions: Cell::new(0),
            start_time: Cell::new(Instant::now()),
        }
    }

    pub fn expansions(&self) -> usize {
        self.expansions.get()
    }

    /// Clear the expansion count and restart the clock, so the same wrapper
    /// can bound another search.
    pub fn reset(&self) {
        self.expansions.set(0);
        self.start_time.set(Instant::now());
    }

    fn check_limits(&self) -> Result<(), SearchError> {
        if let Some(max_expansions) = self.max_expansions {
            if self.expansions.get() > max_expansions {
                info!(max_expansions, "expansion limit exceeded");
                return Err(SearchError::ExpansionLimitExceeded(max_expansions));
            }
        }
        if let Some(time_limit) = self.time_limit {
            if self.start_time.get().elapsed() > time_limit {
                info!(
                    time_limit = time_limit.as_secs_f64(),
                    "time limit exceeded"
                );
                return Err(SearchError::TimeLimitExceeded(time_limit));
            }
        }
        Ok(())
    }
}

impl SearchProblem for BoundedProblem<'_> {
    fn start_state(&self) -> State {
        self.problem.start_state()
    }

    fn is_end(&self, state: &State) -> Result<bool, SearchError> {
        self.problem.is_end(state)
    }

    fn successors_and_costs(&self, state: &State) -> Result<Vec<Successor>, SearchError> {
        self.expansions.set(self.expansions.get() + 1);
        self.check_limits()?;
        self.problem.successors_and_costs(state)
    }
}
