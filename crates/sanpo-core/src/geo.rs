//! Great-circle distance and step/distance unit conversion.
//!
//! All functions are pure and never round; rounding for display is the
//! caller's concern.

/// Average stride length in meters used for step ⇄ distance conversion.
pub const STEP_LENGTH_M: f64 = 0.65;

/// Assumed walking speed for time estimates.
pub const WALK_SPEED_KMH: f64 = 4.0;

/// Mean Earth radius in meters (spherical model, no ellipsoid correction).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine great-circle distance in meters between two WGS84 coordinates.
///
/// Symmetric in its arguments; returns `0.0` when both points coincide.
#[must_use]
pub fn distance_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

/// Converts a step count to kilometers at [`STEP_LENGTH_M`] per step.
#[must_use]
pub fn steps_to_km(steps: f64) -> f64 {
    steps * STEP_LENGTH_M / 1000.0
}

/// Converts kilometers to a step count at [`STEP_LENGTH_M`] per step.
#[must_use]
pub fn km_to_steps(km: f64) -> f64 {
    km * 1000.0 / STEP_LENGTH_M
}

/// Estimated walking time in minutes at [`WALK_SPEED_KMH`].
#[must_use]
pub fn walk_minutes(km: f64) -> f64 {
    km / WALK_SPEED_KMH * 60.0
}
