mod city_map;
mod error;
mod geo_location;
mod identifiers;
mod map_description;

pub use city_map::{location_from_tag, CityMap};
pub use error::MapError;
pub use geo_location::{compute_distance, GeoLocation, EARTH_RADIUS_METRES};
pub use identifiers::{make_tag, Location, Tag};
pub use map_description::{EdgeDescription, LocationDescription, MapDescription};
