//! Target walking distance and the slider bounds that validate it.
//!
//! [`TargetDistance`] is the value object the selection engine consumes:
//! always kilometers internally, never rounded. Rounding and step-snapping
//! happen in [`SliderRange`] before a value becomes a target, mirroring how
//! the UI slider constrains user input.

use crate::geo;

/// Unit the user expresses their target in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Steps,
    Distance,
}

/// A validated one-way walking-distance target.
///
/// Construction clamps negatives to zero; conversion between steps and
/// kilometers is exact (no rounding inside the core).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetDistance {
    km: f64,
}

impl TargetDistance {
    /// Builds a target from a step count.
    #[must_use]
    pub fn from_steps(steps: f64) -> Self {
        Self {
            km: geo::steps_to_km(steps.max(0.0)),
        }
    }

    /// Builds a target from kilometers.
    #[must_use]
    pub fn from_km(km: f64) -> Self {
        Self { km: km.max(0.0) }
    }

    /// One-way target distance in kilometers.
    #[must_use]
    pub fn km(self) -> f64 {
        self.km
    }

    /// The target expressed as a step count.
    #[must_use]
    pub fn steps(self) -> f64 {
        geo::km_to_steps(self.km)
    }
}

/// Slider bounds for one unit: {min, max, step increment, default}.
#[derive(Debug, Clone, Copy)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

/// Slider bounds when the unit is steps.
pub const STEPS_SLIDER: SliderRange = SliderRange {
    min: 1000.0,
    max: 15_000.0,
    step: 500.0,
    default: 3000.0,
};

/// Slider bounds when the unit is kilometers.
pub const DISTANCE_SLIDER: SliderRange = SliderRange {
    min: 0.5,
    max: 10.0,
    step: 0.5,
    default: 2.0,
};

impl SliderRange {
    /// The bounds for `unit`.
    #[must_use]
    pub fn for_unit(unit: Unit) -> Self {
        match unit {
            Unit::Steps => STEPS_SLIDER,
            Unit::Distance => DISTANCE_SLIDER,
        }
    }

    /// Snaps `value` to the nearest step increment, then clamps to
    /// `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        let snapped = (value / self.step).round() * self.step;
        snapped.clamp(self.min, self.max)
    }
}

/// Converts a slider value between units, snapping and clamping it into the
/// destination unit's range (the unit-toggle behavior).
#[must_use]
pub fn convert_slider_value(value: f64, from: Unit, to: Unit) -> f64 {
    if from == to {
        return SliderRange::for_unit(to).clamp(value);
    }
    let converted = match to {
        Unit::Steps => geo::km_to_steps(value),
        Unit::Distance => geo::steps_to_km(value),
    };
    SliderRange::for_unit(to).clamp(converted)
}
