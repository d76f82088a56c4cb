//! Maps OpenStreetMap tag sets to display category labels.
//!
//! The label table is closed configuration: extending the supported
//! categories means adding a row here (and it will flow into the Overpass
//! query allow-lists automatically), not changing the lookup algorithm.

use std::collections::HashMap;

/// Tag keys probed for a category value, in priority order.
pub const CATEGORY_KEYS: [&str; 4] = ["amenity", "leisure", "tourism", "natural"];

/// `amenity` values accepted by both the classifier and the Overpass query.
pub const AMENITY_VALUES: &[&str] = &[
    "cafe",
    "restaurant",
    "library",
    "community_centre",
    "place_of_worship",
];

/// `leisure` values accepted by both the classifier and the Overpass query.
pub const LEISURE_VALUES: &[&str] = &["park", "garden", "playground", "sports_centre", "pitch"];

/// `tourism` values accepted by both the classifier and the Overpass query.
pub const TOURISM_VALUES: &[&str] = &["viewpoint", "attraction", "museum", "artwork"];

/// `natural` values accepted by both the classifier and the Overpass query.
pub const NATURAL_VALUES: &[&str] = &["peak", "spring", "water", "wood"];

/// Label returned when no tag matches the table or the religion overrides.
pub const FALLBACK_LABEL: &str = "Spot";

/// Looks up the display label for a single tag value.
///
/// The table is keyed by value alone; the same value yields the same label
/// regardless of which tag key carried it.
fn label_for_value(value: &str) -> Option<&'static str> {
    let label = match value {
        "park" => "Park",
        "cafe" => "Cafe",
        "restaurant" => "Restaurant",
        "place_of_worship" => "Shrine or Temple",
        "library" => "Library",
        "community_centre" => "Community Centre",
        "garden" => "Garden",
        "playground" => "Playground",
        "sports_centre" | "pitch" => "Sports Centre",
        "viewpoint" => "Viewpoint",
        "attraction" => "Attraction",
        "museum" => "Museum",
        "artwork" => "Artwork",
        "peak" => "Peak",
        "spring" => "Spring",
        "water" => "Waterside",
        "wood" => "Woods",
        _ => return None,
    };
    Some(label)
}

/// Resolves the display category for a point's tag set.
///
/// Probes [`CATEGORY_KEYS`] in order and returns the label of the first
/// value found in the table. Unmatched worship sites are special-cased by
/// their `religion` tag. Total: always returns a non-empty label, falling
/// back to [`FALLBACK_LABEL`].
#[must_use]
pub fn category_label(tags: &HashMap<String, String>) -> &'static str {
    for key in CATEGORY_KEYS {
        if let Some(label) = tags.get(key).and_then(|v| label_for_value(v)) {
            return label;
        }
    }
    match tags.get("religion").map(String::as_str) {
        Some("shinto") => "Shrine",
        Some("buddhism") => "Temple",
        _ => FALLBACK_LABEL,
    }
}
