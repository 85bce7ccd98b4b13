use serde::{Deserialize, Serialize};

/// Mean earth radius used for great-circle distances, in metres.
pub const EARTH_RADIUS_METRES: f64 = 6_371_000.;

/// A point on the globe, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Straight-line (great-circle) distance in metres between two points, using
/// the haversine formula.
pub fn compute_distance(from: &GeoLocation, to: &GeoLocation) -> f64 {
    let (lat1, lon1) = (from.latitude.to_radians(), from.longitude.to_radians());
    let (lat2, lon2) = (to.latitude.to_radians(), to.longitude.to_radians());

    let half_dlat = (lat2 - lat1) / 2.;
    let half_dlon = (lon2 - lon1) / 2.;
    let a = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2);

    2. * EARTH_RADIUS_METRES * a.sqrt().min(1.).asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn distance_to_self_is_zero() {
        let p = GeoLocation::new(37.33, -121.89);
        assert_approx_eq!(compute_distance(&p, &p), 0.0, 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let p = GeoLocation::new(37.33, -121.89);
        let q = GeoLocation::new(37.34, -121.88);
        assert_approx_eq!(compute_distance(&p, &q), compute_distance(&q, &p), 1e-9);
    }

    #[test]
    fn one_degree_of_latitude() {
        let p = GeoLocation::new(0., 0.);
        let q = GeoLocation::new(1., 0.);
        // 2 * pi * R / 360
        assert_approx_eq!(compute_distance(&p, &q), 111_194.93, 0.01);
    }
}
