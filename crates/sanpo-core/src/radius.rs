//! Search-radius planning for the Overpass query.

use crate::target::TargetDistance;

/// Half-width of the tolerance band around the target, as a ratio of the
/// target (≈ ±8.3%; e.g. a 6000-step target tolerates ±500 steps).
pub const TOLERANCE_RATIO: f64 = 0.083;

/// Smallest radius worth querying, in meters.
pub const MIN_SEARCH_RADIUS_M: f64 = 300.0;

/// Largest radius we will send to Overpass, in meters. Bounds query cost.
pub const MAX_SEARCH_RADIUS_M: f64 = 10_000.0;

/// Maximum number of elements requested from Overpass, and the size of the
/// fallback pool when nothing lands in the tolerance band.
pub const MAX_SPOTS: usize = 30;

/// Plans the single search radius for a one-way target distance.
///
/// The radius covers the upper edge of the tolerance band
/// (`target × (1 + TOLERANCE_RATIO)`), clamped to
/// `[MIN_SEARCH_RADIUS_M, MAX_SEARCH_RADIUS_M]`.
#[must_use]
pub fn search_radius_m(target: TargetDistance) -> f64 {
    let upper_bound_km = target.km() * (1.0 + TOLERANCE_RATIO);
    (upper_bound_km * 1000.0).clamp(MIN_SEARCH_RADIUS_M, MAX_SEARCH_RADIUS_M)
}
