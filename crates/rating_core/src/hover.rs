//! Transient hover preview driven by pointer movement.

use crate::geometry;
use crate::model::Gate;
use crate::value_model::ValueModel;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
/// Writes hover previews into a [`ValueModel`] while the control is interactive.
pub struct HoverPreviewTracker;

impl HoverPreviewTracker {
    /// Previews the value under the pointer. Returns the new preview, or `None` when gated.
    pub fn on_enter(
        &self,
        model: &mut ValueModel,
        gate: Gate,
        index: u32,
        fraction: f64,
    ) -> Option<f64> {
        if !gate.is_interactive() {
            return None;
        }
        model.set_preview(Some(geometry::map(index, fraction, model.step())));
        model.preview()
    }

    /// Clears the preview. Returns `false` when gated.
    pub fn on_leave(&self, model: &mut ValueModel, gate: Gate) -> bool {
        if !gate.is_interactive() {
            return false;
        }
        model.set_preview(None);
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Authority, StepUnit};

    fn model() -> ValueModel {
        ValueModel::new(Authority::Uncontrolled, 5, StepUnit::Half, 1.0)
    }

    #[test]
    fn enter_sets_preview_and_leave_clears_it() {
        let mut model = model();
        let tracker = HoverPreviewTracker;

        assert_eq!(
            tracker.on_enter(&mut model, Gate::Interactive, 3, 0.2),
            Some(3.5)
        );
        assert_eq!(model.current_value(), 3.5);
        assert_eq!(model.committed(), 1.0);

        assert!(tracker.on_leave(&mut model, Gate::Interactive));
        assert_eq!(model.preview(), None);
        assert_eq!(model.current_value(), 1.0);
    }

    #[test]
    fn gated_controls_offer_no_preview() {
        let tracker = HoverPreviewTracker;
        for gate in [Gate::ReadOnly, Gate::Disabled] {
            let mut model = model();
            assert_eq!(tracker.on_enter(&mut model, gate, 3, 0.8), None);
            assert_eq!(model.preview(), None);
            assert!(!tracker.on_leave(&mut model, gate));
        }
    }
}
