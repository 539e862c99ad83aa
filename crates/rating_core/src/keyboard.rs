//! Keyboard stepping over the selectable range.

use serde::{Deserialize, Serialize};

use crate::model::StepUnit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Navigation keys understood by the control.
pub enum RatingKey {
    /// Increase by one step.
    ArrowRight,
    /// Decrease by one step.
    ArrowLeft,
    /// Jump to `0`.
    Home,
    /// Jump to `max`.
    End,
}

impl RatingKey {
    /// Maps a DOM `KeyboardEvent.key` name. Unknown keys are not consumed.
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "Right" => Some(Self::ArrowRight),
            "ArrowLeft" | "Left" => Some(Self::ArrowLeft),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            _ => None,
        }
    }
}

/// Applies `key` to `current` and returns the stepped value, clamped to `[0, max]`.
pub fn step(current: f64, key: RatingKey, unit: StepUnit, max: u32) -> f64 {
    let upper = f64::from(max);
    match key {
        RatingKey::ArrowRight => (current + unit.size()).min(upper),
        RatingKey::ArrowLeft => (current - unit.size()).max(0.0),
        RatingKey::Home => 0.0,
        RatingKey::End => upper,
    }
}
