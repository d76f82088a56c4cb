//! Overpass API JSON response types.
//!
//! Only the fields the selector needs are modeled. Nodes carry `lat`/`lon`
//! directly; ways and relations queried with `out center` carry a `center`
//! object instead. `tags` may be absent entirely on untagged elements, so it
//! defaults to an empty map.

use std::collections::HashMap;

use serde::Deserialize;

use sanpo_core::{Coord, RawPoint};

/// Top-level Overpass envelope: `{"elements": [...]}`.
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// One element from the Overpass `elements` array.
#[derive(Debug, Deserialize)]
pub struct OverpassElement {
    pub id: i64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    /// Centroid supplied by `out center` for way/relation elements.
    #[serde(default)]
    pub center: Option<OverpassCenter>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// Centroid coordinate of an extended geometry.
#[derive(Debug, Deserialize)]
pub struct OverpassCenter {
    pub lat: f64,
    pub lon: f64,
}

impl From<OverpassElement> for RawPoint {
    fn from(el: OverpassElement) -> Self {
        let coord = match (el.lat, el.lon) {
            (Some(lat), Some(lon)) => Some(Coord { lat, lon }),
            _ => None,
        };
        let center = el.center.map(|c| Coord {
            lat: c.lat,
            lon: c.lon,
        });
        Self {
            id: el.id,
            coord,
            center,
            tags: el.tags,
        }
    }
}
