//! Candidate selection: turns raw Overpass elements into at most three
//! suggested spots, one per distance tier.
//!
//! The whole path is pure and synchronous. Randomness (the per-bucket pick)
//! comes in through an injected [`rand::Rng`] so selection is seedable in
//! tests. Malformed elements are dropped, never errored: an unusable point
//! is a data-quality fact about OpenStreetMap, not a failure of the search.

use std::collections::HashMap;

use rand::Rng;
use serde::Serialize;

use crate::category::category_label;
use crate::geo::distance_meters;
use crate::radius::{MAX_SPOTS, TOLERANCE_RATIO};
use crate::target::TargetDistance;

/// A WGS84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

/// One element as returned by the geographic backend, before validation.
///
/// Nodes carry `coord`; ways and relations carry `center` (the centroid of
/// their geometry). Either may be absent on degenerate data.
#[derive(Debug, Clone, Default)]
pub struct RawPoint {
    pub id: i64,
    /// Direct position, present for node elements.
    pub coord: Option<Coord>,
    /// Geometry centroid, present for way/relation elements.
    pub center: Option<Coord>,
    pub tags: HashMap<String, String>,
}

impl RawPoint {
    /// Preferred position: the direct coordinate, else the centroid.
    fn resolve_coord(&self) -> Option<Coord> {
        self.coord.or(self.center)
    }

    /// Preferred display name: localized `name:ja`, else `name`.
    /// Empty-string tags count as absent.
    fn resolve_name(&self) -> Option<&str> {
        self.tags
            .get("name:ja")
            .or_else(|| self.tags.get("name"))
            .map(String::as_str)
            .filter(|n| !n.is_empty())
    }
}

/// A validated, scored spot. Immutable once materialized; lives only for
/// the duration of one search.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub name: String,
    pub coord: Coord,
    pub category: &'static str,
    /// Straight-line one-way distance from the user, in meters.
    pub distance_meters: f64,
    pub tags: HashMap<String, String>,
}

/// The 0–3 picked candidates, always ordered nearest first.
#[derive(Debug, Clone, Serialize)]
pub struct Selection {
    pub candidates: Vec<Candidate>,
    /// `true` when the picks came from inside the tolerance band; `false`
    /// when the band was empty and the nearest-[`MAX_SPOTS`] fallback pool
    /// was used instead (or nothing was usable at all).
    pub from_tolerance_band: bool,
}

impl Selection {
    fn empty() -> Self {
        Self {
            candidates: Vec::new(),
            from_tolerance_band: false,
        }
    }
}

/// Validates and scores raw points against the user's position.
///
/// Points without a resolvable coordinate or name are dropped. The result
/// is sorted ascending by distance; ties keep their input order.
fn materialize(points: &[RawPoint], user_lat: f64, user_lon: f64) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = points
        .iter()
        .filter_map(|p| {
            let coord = p.resolve_coord()?;
            let name = p.resolve_name()?.to_string();
            Some(Candidate {
                name,
                coord,
                category: category_label(&p.tags),
                distance_meters: distance_meters(user_lat, user_lon, coord.lat, coord.lon),
                tags: p.tags.clone(),
            })
        })
        .collect();
    // Vec::sort_by is stable, so equal distances preserve input order.
    candidates.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));
    candidates
}

/// Uniform pick from a non-empty slice.
fn pick<R: Rng + ?Sized>(bucket: &[Candidate], rng: &mut R) -> Candidate {
    bucket[rng.random_range(0..bucket.len())].clone()
}

/// Selects up to three spots for a one-way target distance.
///
/// Pipeline: materialize → sort → keep candidates whose one-way distance
/// falls inside the closed band `target ± TOLERANCE_RATIO × target` → if the
/// band is empty, fall back to the nearest [`MAX_SPOTS`] candidates → split
/// the pool into three contiguous distance terciles and uniformly pick one
/// candidate per non-empty tercile.
///
/// A pool of three or fewer is returned as-is in ascending distance order
/// without consulting `rng`. An empty pool yields an empty selection —
/// "nothing matched" is a valid terminal state, not an error.
pub fn select_candidates<R: Rng + ?Sized>(
    points: &[RawPoint],
    user_lat: f64,
    user_lon: f64,
    target: TargetDistance,
    rng: &mut R,
) -> Selection {
    let spots = materialize(points, user_lat, user_lon);

    let target_km = target.km();
    let tolerance = target_km * TOLERANCE_RATIO;
    let min_km = target_km - tolerance;
    let max_km = target_km + tolerance;

    let in_band: Vec<Candidate> = spots
        .iter()
        .filter(|s| {
            let one_way_km = s.distance_meters / 1000.0;
            one_way_km >= min_km && one_way_km <= max_km
        })
        .cloned()
        .collect();

    let from_tolerance_band = !in_band.is_empty();
    let pool = if from_tolerance_band {
        in_band
    } else {
        spots.into_iter().take(MAX_SPOTS).collect()
    };

    if pool.is_empty() {
        return Selection::empty();
    }
    if pool.len() <= 3 {
        return Selection {
            candidates: pool,
            from_tolerance_band,
        };
    }

    // One pick per distance tercile keeps the suggestions spread across
    // the near/mid/far range instead of clustering at one distance.
    let bucket_size = pool.len().div_ceil(3);
    let near = &pool[..bucket_size];
    let mid = &pool[bucket_size..(bucket_size * 2).min(pool.len())];
    let far = &pool[(bucket_size * 2).min(pool.len())..];

    let mut candidates = vec![pick(near, rng)];
    if !mid.is_empty() {
        candidates.push(pick(mid, rng));
    }
    if !far.is_empty() {
        candidates.push(pick(far, rng));
    }

    Selection {
        candidates,
        from_tolerance_band,
    }
}

#[cfg(test)]
#[path = "select_test.rs"]
mod tests;
