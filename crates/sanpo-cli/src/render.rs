//! Terminal rendering of selected spots.
//!
//! Pure formatting only; everything here is deterministic and unit-tested.

use sanpo_core::{geo, Candidate};

/// Tier labels in result order.
const TIER_LABELS: [&str; 3] = ["Near", "Mid", "Far"];

/// Formats a distance for display: meters below 1 km, otherwise one-decimal
/// kilometers (`850 m`, `1.2 km`).
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{meters:.0} m")
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}

/// Renders an integer with thousands separators (`1462` → `1,462`).
pub fn format_thousands(value: f64) -> String {
    let whole = format!("{:.0}", value.max(0.0));
    let mut out = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Google Maps walking-directions link to the candidate.
pub fn maps_url(candidate: &Candidate) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}&travelmode=walking",
        candidate.coord.lat, candidate.coord.lon
    )
}

/// Renders one result card.
///
/// `index` is the candidate's position in the selection (0 = near).
pub fn render_card(index: usize, candidate: &Candidate) -> String {
    let tier = TIER_LABELS.get(index).copied().unwrap_or("Near");
    let km = candidate.distance_meters / 1000.0;
    let steps = geo::km_to_steps(km);
    let minutes = geo::walk_minutes(km);

    format!(
        "[{tier}] {name} — {category}\n  distance: {distance} (~{steps} steps, ~{minutes:.0} min)\n  {url}",
        name = candidate.name,
        category = candidate.category,
        distance = format_distance(candidate.distance_meters),
        steps = format_thousands(steps),
        url = maps_url(candidate),
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use sanpo_core::Coord;

    use super::*;

    fn candidate(distance_meters: f64) -> Candidate {
        Candidate {
            name: "Midori Park".to_string(),
            coord: Coord {
                lat: 35.68,
                lon: 139.76,
            },
            category: "Park",
            distance_meters,
            tags: HashMap::new(),
        }
    }

    #[test]
    fn short_distances_render_in_meters() {
        assert_eq!(format_distance(850.0), "850 m");
        assert_eq!(format_distance(999.4), "999 m");
    }

    #[test]
    fn long_distances_render_in_kilometers() {
        assert_eq!(format_distance(1000.0), "1.0 km");
        assert_eq!(format_distance(2166.0), "2.2 km");
    }

    #[test]
    fn thousands_separator_groups_digits() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1462.0), "1,462");
        assert_eq!(format_thousands(1_234_567.0), "1,234,567");
    }

    #[test]
    fn maps_url_points_at_the_candidate() {
        assert_eq!(
            maps_url(&candidate(950.0)),
            "https://www.google.com/maps/dir/?api=1&destination=35.68,139.76&travelmode=walking"
        );
    }

    #[test]
    fn card_carries_tier_name_and_estimates() {
        let card = render_card(0, &candidate(950.0));
        assert!(card.starts_with("[Near] Midori Park — Park\n"));
        assert!(card.contains("distance: 950 m"), "{card}");
        // 0.95 km at 0.65 m stride ≈ 1,462 steps; at 4 km/h ≈ 14 min.
        assert!(card.contains("~1,462 steps"), "{card}");
        assert!(card.contains("~14 min"), "{card}");
    }

    #[test]
    fn tier_label_follows_selection_position() {
        assert!(render_card(1, &candidate(1500.0)).starts_with("[Mid]"));
        assert!(render_card(2, &candidate(2000.0)).starts_with("[Far]"));
    }
}
