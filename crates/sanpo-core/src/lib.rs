//! Pure candidate-selection engine for the walking-distance spot finder.
//!
//! Everything here is synchronous and side-effect-free; the only external
//! input is the [`rand::Rng`] handed to [`select::select_candidates`].
//! Network I/O lives in `sanpo-overpass`, presentation in `sanpo-cli`.

pub mod category;
pub mod config;
pub mod geo;
pub mod radius;
pub mod select;
pub mod target;

pub use category::category_label;
pub use config::{load_app_config, AppConfig, ConfigError};
pub use geo::{distance_meters, km_to_steps, steps_to_km};
pub use radius::{search_radius_m, MAX_SPOTS, TOLERANCE_RATIO};
pub use select::{select_candidates, Candidate, Coord, RawPoint, Selection};
pub use target::{SliderRange, TargetDistance, Unit};
