//! Pointer-position to candidate-value mapping.

use serde::{Deserialize, Serialize};

use crate::model::StepUnit;

/// Largest fraction strictly below 1.
const MAX_FRACTION: f64 = 1.0 - f64::EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Horizontal extent of one selectable item, measured by the renderer.
pub struct ItemGeometry {
    /// Zero-based item index.
    pub index: u32,
    /// Left edge in the same coordinate space as pointer positions.
    pub left: f64,
    /// Item width.
    pub width: f64,
}

impl ItemGeometry {
    /// Creates geometry for item `index`.
    pub fn new(index: u32, left: f64, width: f64) -> Self {
        Self { index, left, width }
    }

    /// Normalized position of `pointer_x` within the item, clamped into `[0, 1)`.
    pub fn fraction_at(&self, pointer_x: f64) -> f64 {
        if self.width.is_nan() || self.width <= 0.0 {
            return 0.0;
        }
        clamp_fraction((pointer_x - self.left) / self.width)
    }

    /// Candidate value for a pointer at `pointer_x`.
    pub fn value_at(&self, pointer_x: f64, step: StepUnit) -> f64 {
        map(self.index, self.fraction_at(pointer_x), step)
    }
}

/// Clamps a fraction into `[0, 1)`. `NaN` maps to `0`.
pub fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        return 0.0;
    }
    fraction.clamp(0.0, MAX_FRACTION)
}

/// Maps an item index and horizontal fraction to a candidate value.
///
/// Whole steps always select the full item. Half steps select `index + 0.5` on the left half
/// and `index + 1` on the right half.
pub fn map(index: u32, fraction: f64, step: StepUnit) -> f64 {
    let base = f64::from(index);
    match step {
        StepUnit::Whole => base + 1.0,
        StepUnit::Half if clamp_fraction(fraction) < 0.5 => base + 0.5,
        StepUnit::Half => base + 1.0,
    }
}
