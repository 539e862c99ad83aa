//! Event orchestration for the selection control.

use serde::{Deserialize, Serialize};

use crate::config::{NormalizedConfig, RatingConfig};
use crate::display::{self, ItemFill, RatingAccessibility, RATING_ROLE};
use crate::geometry;
use crate::hover::HoverPreviewTracker;
use crate::keyboard;
use crate::model::{Authority, Gate, InteractionEvent, StepUnit};
use crate::value_model::ValueModel;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Side-effect intents emitted by [`RatingController::handle`] for the rendering layer to execute.
pub enum RatingEffect {
    /// Forward the resolved value to the `on_change` listener.
    Change(f64),
    /// Repaint with the new hover preview (`None` once cleared).
    Preview(Option<f64>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Observable controller state.
pub enum ControllerState {
    /// Interactive with no active preview.
    Idle,
    /// Interactive with a hover preview.
    Hovering,
    /// Gated: inactive.
    Disabled,
    /// Gated: inspectable only.
    ReadOnly,
}

#[derive(Debug, Clone, PartialEq)]
/// Routes interaction events through geometry/keyboard resolution, gating, and commits.
pub struct RatingController {
    model: ValueModel,
    gate: Gate,
    hover: HoverPreviewTracker,
}

impl RatingController {
    /// Builds a controller from raw options. Coercions are applied silently; call
    /// [`RatingConfig::normalize`] first when they need to be reported.
    pub fn new(config: &RatingConfig) -> Self {
        let (normalized, _) = config.normalize();
        Self::from_normalized(normalized)
    }

    /// Builds a controller from already-normalized options.
    pub fn from_normalized(config: NormalizedConfig) -> Self {
        Self {
            model: ValueModel::new(config.authority, config.max, config.step, config.seed),
            gate: config.gate,
            hover: HoverPreviewTracker,
        }
    }

    /// Applies one interaction event and collects resulting effects.
    ///
    /// Gated controls consume every event without mutating state or emitting effects.
    /// Commits are not debounced: re-selecting the committed value still emits
    /// [`RatingEffect::Change`]. [`RatingEffect::Preview`] is emitted only when the preview
    /// actually moved, so an empty result means nothing needs repainting.
    pub fn handle(&mut self, event: InteractionEvent) -> Vec<RatingEffect> {
        let mut effects = Vec::new();
        if !self.gate.is_interactive() {
            return effects;
        }

        match event {
            InteractionEvent::PointerDown { index, fraction } => {
                let candidate = geometry::map(index, fraction, self.model.step());
                effects.push(RatingEffect::Change(self.model.commit(candidate)));
            }
            InteractionEvent::PointerEnter { index, fraction } => {
                let previous = self.model.preview();
                let preview = self
                    .hover
                    .on_enter(&mut self.model, self.gate, index, fraction);
                if preview.is_some() && preview != previous {
                    effects.push(RatingEffect::Preview(preview));
                }
            }
            InteractionEvent::PointerLeave => {
                let had_preview = self.model.preview().is_some();
                if self.hover.on_leave(&mut self.model, self.gate) && had_preview {
                    effects.push(RatingEffect::Preview(None));
                }
            }
            InteractionEvent::KeyPress(key) => {
                let candidate = keyboard::step(
                    self.model.current_value(),
                    key,
                    self.model.step(),
                    self.model.max(),
                );
                effects.push(RatingEffect::Change(self.model.commit(candidate)));
            }
        }

        effects
    }

    /// Re-evaluates gating from props. Leaving the interactive gate drops any active preview.
    pub fn set_gate(&mut self, gate: Gate) -> Vec<RatingEffect> {
        self.gate = gate;
        if !gate.is_interactive() && self.model.preview().is_some() {
            self.model.set_preview(None);
            return vec![RatingEffect::Preview(None)];
        }
        Vec::new()
    }

    /// Applies the caller-owned value for a controlled render pass.
    pub fn sync_external(&mut self, value: f64) {
        self.model.sync_external(value);
    }

    /// Current observable state.
    pub fn state(&self) -> ControllerState {
        match self.gate {
            Gate::Disabled => ControllerState::Disabled,
            Gate::ReadOnly => ControllerState::ReadOnly,
            Gate::Interactive if self.model.preview().is_some() => ControllerState::Hovering,
            Gate::Interactive => ControllerState::Idle,
        }
    }

    /// Displayed value: the preview when hovering, otherwise the committed value.
    pub fn current_value(&self) -> f64 {
        self.model.current_value()
    }

    /// Committed value.
    pub fn committed_value(&self) -> f64 {
        self.model.committed()
    }

    /// Active preview.
    pub fn preview_value(&self) -> Option<f64> {
        self.model.preview()
    }

    /// Item count.
    pub fn max(&self) -> u32 {
        self.model.max()
    }

    /// Step unit.
    pub fn step(&self) -> StepUnit {
        self.model.step()
    }

    /// Value ownership.
    pub fn authority(&self) -> Authority {
        self.model.authority()
    }

    /// Interaction gating.
    pub fn gate(&self) -> Gate {
        self.gate
    }

    /// Underlying value model.
    pub fn model(&self) -> &ValueModel {
        &self.model
    }

    /// Per-item fills for the displayed value.
    pub fn item_fills(&self) -> Vec<ItemFill> {
        display::item_fills(self.current_value(), self.max())
    }

    /// Default value text for the displayed value.
    pub fn value_text(&self) -> String {
        display::format_value(self.current_value(), self.max())
    }

    /// Accessibility contract for the group element.
    ///
    /// An explicit `aria_label` wins; an `aria_labelledby` reference suppresses the synthesized
    /// label; otherwise the label is built from the displayed value. Read-only controls stay
    /// programmatically focusable but leave the tab order; disabled controls are not focusable.
    pub fn accessibility(
        &self,
        aria_label: Option<&str>,
        aria_labelledby: Option<&str>,
    ) -> RatingAccessibility {
        let label = match (aria_label, aria_labelledby) {
            (Some(label), _) => Some(label.to_string()),
            (None, Some(_)) => None,
            (None, None) => Some(display::accessible_label(
                self.current_value(),
                self.max(),
            )),
        };
        let tab_index = match self.gate {
            Gate::Interactive => Some(0),
            Gate::ReadOnly => Some(-1),
            Gate::Disabled => None,
        };

        RatingAccessibility {
            role: RATING_ROLE,
            label,
            labelled_by: aria_labelledby.map(str::to_string),
            tab_index,
            read_only: self.gate == Gate::ReadOnly,
            disabled: self.gate == Gate::Disabled,
            value_now: self.current_value(),
            value_max: self.max(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::keyboard::RatingKey;

    fn controller(config: RatingConfig) -> RatingController {
        RatingController::new(&config)
    }

    fn click(index: u32, fraction: f64) -> InteractionEvent {
        InteractionEvent::PointerDown { index, fraction }
    }

    fn hover(index: u32, fraction: f64) -> InteractionEvent {
        InteractionEvent::PointerEnter { index, fraction }
    }

    #[test]
    fn click_commits_and_notifies() {
        let mut rating = controller(RatingConfig::default());
        let effects = rating.handle(click(2, 0.7));
        assert_eq!(effects, vec![RatingEffect::Change(3.0)]);
        assert_eq!(rating.committed_value(), 3.0);
    }

    #[test]
    fn hover_moves_between_idle_and_hovering() {
        let mut rating = controller(RatingConfig::uncontrolled(1.0).with_allow_half(true));
        assert_eq!(rating.state(), ControllerState::Idle);

        let effects = rating.handle(hover(3, 0.1));
        assert_eq!(effects, vec![RatingEffect::Preview(Some(3.5))]);
        assert_eq!(rating.state(), ControllerState::Hovering);
        assert_eq!(rating.current_value(), 3.5);
        assert_eq!(rating.committed_value(), 1.0);

        let effects = rating.handle(InteractionEvent::PointerLeave);
        assert_eq!(effects, vec![RatingEffect::Preview(None)]);
        assert_eq!(rating.state(), ControllerState::Idle);
        assert_eq!(rating.current_value(), 1.0);
    }

    #[test]
    fn click_while_hovering_keeps_hover_state() {
        let mut rating = controller(RatingConfig::default());
        rating.handle(hover(1, 0.5));
        rating.handle(click(1, 0.5));
        assert_eq!(rating.state(), ControllerState::Hovering);
        assert_eq!(rating.committed_value(), 2.0);
    }

    #[test]
    fn keyboard_steps_from_displayed_value() {
        let mut rating = controller(RatingConfig::uncontrolled(1.0));
        rating.handle(hover(3, 0.9));
        let effects = rating.handle(InteractionEvent::KeyPress(RatingKey::ArrowRight));
        assert_eq!(effects, vec![RatingEffect::Change(5.0)]);
    }

    #[test]
    fn keyboard_after_pointer_leaves_steps_from_committed() {
        let mut rating = controller(RatingConfig::uncontrolled(3.0));
        rating.handle(hover(4, 0.9));
        rating.handle(InteractionEvent::PointerLeave);
        let effects = rating.handle(InteractionEvent::KeyPress(RatingKey::ArrowLeft));
        assert_eq!(effects, vec![RatingEffect::Change(2.0)]);
    }

    #[test]
    fn same_value_commits_still_notify() {
        let mut rating = controller(RatingConfig::uncontrolled(3.0));
        assert_eq!(rating.handle(click(2, 0.2)), vec![RatingEffect::Change(3.0)]);
        assert_eq!(
            controller(RatingConfig::uncontrolled(5.0))
                .handle(InteractionEvent::KeyPress(RatingKey::End)),
            vec![RatingEffect::Change(5.0)]
        );
    }

    #[test]
    fn controlled_same_value_commits_still_notify() {
        let mut rating = controller(RatingConfig::controlled(3.0));
        assert_eq!(rating.handle(click(2, 0.6)), vec![RatingEffect::Change(3.0)]);
        assert_eq!(rating.committed_value(), 3.0);
        assert_eq!(rating.authority(), Authority::Controlled);
    }

    #[test]
    fn unchanged_preview_emits_nothing() {
        let mut rating = controller(RatingConfig::uncontrolled(1.0).with_allow_half(true));
        assert_eq!(
            rating.handle(hover(2, 0.7)),
            vec![RatingEffect::Preview(Some(3.0))]
        );
        assert_eq!(rating.handle(hover(2, 0.9)), Vec::new());
        assert_eq!(
            rating.handle(hover(2, 0.2)),
            vec![RatingEffect::Preview(Some(2.5))]
        );

        assert_eq!(
            rating.handle(InteractionEvent::PointerLeave),
            vec![RatingEffect::Preview(None)]
        );
        assert_eq!(rating.handle(InteractionEvent::PointerLeave), Vec::new());
        assert_eq!(rating.current_value(), 1.0);
    }

    #[test]
    fn gated_controls_consume_events_silently() {
        for config in [
            RatingConfig::uncontrolled(3.0).with_disabled(true),
            RatingConfig::uncontrolled(3.0).with_read_only(true),
        ] {
            let mut rating = controller(config);
            let events = [
                click(0, 0.1),
                hover(4, 0.9),
                InteractionEvent::PointerLeave,
                InteractionEvent::KeyPress(RatingKey::Home),
                InteractionEvent::KeyPress(RatingKey::ArrowRight),
            ];
            for event in events {
                assert_eq!(rating.handle(event), Vec::new());
            }
            assert_eq!(rating.committed_value(), 3.0);
            assert_eq!(rating.preview_value(), None);
        }
    }

    #[test]
    fn gating_reports_distinct_states() {
        let disabled = controller(RatingConfig::default().with_disabled(true));
        let read_only = controller(RatingConfig::default().with_read_only(true));
        assert_eq!(disabled.state(), ControllerState::Disabled);
        assert_eq!(read_only.state(), ControllerState::ReadOnly);
    }

    #[test]
    fn leaving_interactive_gate_clears_preview() {
        let mut rating = controller(RatingConfig::default());
        rating.handle(hover(2, 0.5));
        assert_eq!(
            rating.set_gate(Gate::Disabled),
            vec![RatingEffect::Preview(None)]
        );
        assert_eq!(rating.preview_value(), None);
        assert_eq!(rating.set_gate(Gate::Interactive), Vec::new());
    }

    #[test]
    fn accessibility_synthesizes_preview_aware_label() {
        let mut rating = controller(RatingConfig::uncontrolled(2.0));
        rating.handle(hover(3, 0.9));
        let a11y = rating.accessibility(None, None);
        assert_eq!(a11y.role, "radiogroup");
        assert_eq!(a11y.label.as_deref(), Some("Rating: 4 out of 5 stars"));
        assert_eq!(a11y.tab_index, Some(0));
        assert_eq!(a11y.value_now, 4.0);
        assert_eq!(a11y.value_max, 5);
    }

    #[test]
    fn accessibility_respects_supplied_labels() {
        let rating = controller(RatingConfig::default());
        let labelled = rating.accessibility(Some("Quality"), Some("heading"));
        assert_eq!(labelled.label.as_deref(), Some("Quality"));
        assert_eq!(labelled.labelled_by.as_deref(), Some("heading"));

        let referenced = rating.accessibility(None, Some("heading"));
        assert_eq!(referenced.label, None);
    }

    #[test]
    fn accessibility_distinguishes_read_only_from_disabled() {
        let read_only = controller(RatingConfig::default().with_read_only(true));
        let a11y = read_only.accessibility(None, None);
        assert!(a11y.read_only);
        assert!(!a11y.disabled);
        assert_eq!(a11y.tab_index, Some(-1));

        let disabled = controller(RatingConfig::default().with_disabled(true));
        let a11y = disabled.accessibility(None, None);
        assert!(!a11y.read_only);
        assert!(a11y.disabled);
        assert_eq!(a11y.tab_index, None);
    }
}
