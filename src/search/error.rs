use crate::map::MapError;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Map(#[from] MapError),
    #[error("expansion limit of {0} exceeded")]
    ExpansionLimitExceeded(usize),
    #[error("time limit of {} exceeded", humantime::format_duration(*.0))]
    TimeLimitExceeded(Duration),
}
