//! Geographic primitives.
//!
//! Stops are located by latitude/longitude in degrees. Distances between
//! them are great-circle distances in meters over a spherical Earth, used
//! for the "straight-line length" side of route curvature.

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Great-circle distance between two points, in meters.
pub fn distance(from: Coordinates, to: Coordinates) -> f64 {
    if from == to {
        return 0.0;
    }

    let lat_from = from.lat.to_radians();
    let lat_to = to.lat.to_radians();
    let delta_lng = (from.lng - to.lng).abs().to_radians();

    // Rounding can push the cosine just past 1.0 for near-identical points,
    // which would turn acos into NaN.
    let cos_angle =
        lat_from.sin() * lat_to.sin() + lat_from.cos() * lat_to.cos() * delta_lng.cos();
    cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M
}
