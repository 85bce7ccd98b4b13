//! Serde description of a map, read from a TOML or JSON file. This is a small
//! hand-written format for custom maps and fixtures, not a parser for
//! external geographic data.

use crate::map::{CityMap, GeoLocation, Location, MapError, Tag};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LocationDescription {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_bidirectional() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct EdgeDescription {
    pub from: String,
    pub to: String,
    /// Travel cost, defaults to the straight-line distance between the two
    /// endpoints.
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct MapDescription {
    #[serde(default)]
    pub locations: Vec<LocationDescription>,
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
}

impl MapDescription {
    pub fn from_toml_str(text: &str) -> Result<Self, MapError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a description from disk. Files with a `.json` extension are
    /// parsed as JSON, everything else as TOML.
    pub fn from_path(path: &Path) -> Result<Self, MapError> {
        let text = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => Self::from_json_str(&text),
            _ => Self::from_toml_str(&text),
        }
    }

    pub fn build(&self) -> Result<CityMap, MapError> {
        let mut city_map = CityMap::new();
        for location in &self.locations {
            city_map.add_location(
                Location::new(&location.id),
                GeoLocation::new(location.latitude, location.longitude),
                location.tags.iter().map(|tag| Tag::new(tag)),
            )?;
        }
        for edge in &self.edges {
            let from = Location::new(&edge.from);
            let to = Location::new(&edge.to);
            if edge.bidirectional {
                city_map.connect(from, to, edge.cost)?;
            } else {
                city_map.add_edge(from, to, edge.cost)?;
            }
        }
        info!(
            num_locations = city_map.len(),
            num_edges = self.edges.len(),
            "built map"
        );
        Ok(city_map)
    }
}

impl CityMap {
    /// Read and build a map from a description file, see
    /// [`MapDescription::from_path`].
    pub fn from_path(path: &Path) -> Result<Self, MapError> {
        MapDescription::from_path(path)?.build()
    }
}
