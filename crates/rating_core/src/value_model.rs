//! Authoritative value storage for one control instance.

use crate::model::{Authority, SelectionState, StepUnit};

const TIE_EPSILON: f64 = 1e-9;

/// Clamps `candidate` into `[0, max]` and snaps it to the nearest multiple of `step`.
///
/// Exact ties between two steps round in the direction of travel from `reference`: upward when
/// the candidate is at or above the reference, downward otherwise. `NaN` resolves to
/// `reference`, infinities clamp to the nearest bound.
pub fn resolve_value(candidate: f64, reference: f64, max: u32, step: StepUnit) -> f64 {
    let upper = f64::from(max);
    if candidate.is_nan() {
        return reference.clamp(0.0, upper);
    }

    let clamped = candidate.clamp(0.0, upper);
    let units = clamped / step.size();
    let floor = units.floor();
    let steps = if ((units - floor) - 0.5).abs() <= TIE_EPSILON {
        if clamped >= reference {
            floor + 1.0
        } else {
            floor
        }
    } else {
        units.round()
    };

    (steps * step.size()).clamp(0.0, upper)
}

#[derive(Debug, Clone, PartialEq)]
/// Owns the committed and preview values and enforces the quantization invariant.
pub struct ValueModel {
    state: SelectionState,
}

impl ValueModel {
    /// Creates a model seeded with `initial`, resolved against the bounds and step unit.
    pub fn new(authority: Authority, max: u32, step: StepUnit, initial: f64) -> Self {
        let max = max.max(1);
        Self {
            state: SelectionState {
                committed: resolve_value(initial, 0.0, max, step),
                preview: None,
                max,
                step,
                authority,
            },
        }
    }

    /// Value to display: the preview when one is active, otherwise the committed value.
    pub fn current_value(&self) -> f64 {
        self.state.preview.unwrap_or(self.state.committed)
    }

    /// Resolves `candidate` and, under uncontrolled authority, stores it as the committed value.
    ///
    /// The resolved value is always returned so the caller can forward it as a change
    /// notification. Controlled models are left untouched until [`Self::sync_external`].
    pub fn commit(&mut self, candidate: f64) -> f64 {
        let resolved = resolve_value(
            candidate,
            self.state.committed,
            self.state.max,
            self.state.step,
        );
        if self.state.authority == Authority::Uncontrolled {
            self.state.committed = resolved;
        }
        resolved
    }

    /// Applies the caller-owned value from a controlled render pass.
    ///
    /// Always overwrites the committed value, even when unchanged. Ignored under uncontrolled
    /// authority, where the seed is applied once at construction.
    pub fn sync_external(&mut self, value: f64) {
        if self.state.authority != Authority::Controlled {
            return;
        }
        self.state.committed = resolve_value(
            value,
            self.state.committed,
            self.state.max,
            self.state.step,
        );
    }

    /// Sets or clears the hover preview. Never touches the committed value.
    pub fn set_preview(&mut self, value: Option<f64>) {
        self.state.preview = value.map(|value| {
            resolve_value(value, self.state.committed, self.state.max, self.state.step)
        });
    }

    /// Committed value, ignoring any preview.
    pub fn committed(&self) -> f64 {
        self.state.committed
    }

    /// Active preview, if any.
    pub fn preview(&self) -> Option<f64> {
        self.state.preview
    }

    /// Item count.
    pub fn max(&self) -> u32 {
        self.state.max
    }

    /// Step unit.
    pub fn step(&self) -> StepUnit {
        self.state.step
    }

    /// Value ownership.
    pub fn authority(&self) -> Authority {
        self.state.authority
    }

    /// Snapshot of the full selection state.
    pub fn state(&self) -> SelectionState {
        self.state
    }
}
