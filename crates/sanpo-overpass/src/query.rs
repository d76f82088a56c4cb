//! Overpass QL query construction.
//!
//! Pure string formatting: no decision logic beyond rounding the radius.
//! The tag allow-lists come from `sanpo_core::category`, so a category that
//! the classifier cannot label can never be requested here (and vice versa).

use std::fmt::Write;

use sanpo_core::category::{AMENITY_VALUES, LEISURE_VALUES, NATURAL_VALUES, TOURISM_VALUES};
use sanpo_core::MAX_SPOTS;

/// Server-side evaluation timeout baked into the query header, in seconds.
const QUERY_TIMEOUT_SECS: u64 = 25;

/// Regex alternation for an allow-list: `^(a|b|c)$`.
fn value_pattern(values: &[&str]) -> String {
    format!("^({})$", values.join("|"))
}

/// Builds the bounded Overpass QL query for named spots around a point.
///
/// Requests nodes for the four category allow-lists, plus way/relation
/// variants for the extended geometries (park areas, worship places) whose
/// centroid `out center` resolves. The radius is rounded to whole meters;
/// results are capped at [`MAX_SPOTS`].
#[must_use]
pub fn build_query(lat: f64, lon: f64, radius_m: f64) -> String {
    let around = format!("(around:{radius_m:.0},{lat},{lon})");

    let mut q = format!("[out:json][timeout:{QUERY_TIMEOUT_SECS}];\n(\n");
    for (key, values) in [
        ("amenity", AMENITY_VALUES),
        ("leisure", LEISURE_VALUES),
        ("tourism", TOURISM_VALUES),
        ("natural", NATURAL_VALUES),
    ] {
        let pattern = value_pattern(values);
        let _ = writeln!(q, "  node[\"{key}\"~\"{pattern}\"][\"name\"]{around};");
    }
    let _ = writeln!(q, "  way[\"leisure\"=\"park\"][\"name\"]{around};");
    let _ = writeln!(q, "  way[\"amenity\"=\"place_of_worship\"][\"name\"]{around};");
    let _ = writeln!(q, "  relation[\"leisure\"=\"park\"][\"name\"]{around};");
    let _ = write!(q, ");\nout center {MAX_SPOTS};");
    q
}
