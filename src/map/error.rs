use crate::map::{Location, Tag};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("location {0} is not part of the map")]
    UnknownLocation(Location),
    #[error("no location carries the tag {0}")]
    TagNotFound(Tag),
    #[error("location {0} is declared more than once")]
    DuplicateLocation(Location),
    #[error("edge {from} -> {to} has invalid cost {cost}, costs must be finite and non-negative")]
    InvalidCost { from: Location, to: Location, cost: f64 },
    #[error("failed to read map file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse TOML map description: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to parse JSON map description: {0}")]
    Json(#[from] serde_json::Error),
}
