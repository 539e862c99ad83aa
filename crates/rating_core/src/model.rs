//! Shared value types for the selection engine.

use serde::{Deserialize, Serialize};

use crate::keyboard::RatingKey;

/// Item count used when the caller does not supply one.
pub const DEFAULT_MAX: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
/// Minimum granularity between adjacent selectable values.
pub enum StepUnit {
    /// Whole-item steps (`1`).
    #[default]
    Whole,
    /// Half-item steps (`0.5`).
    Half,
}

impl StepUnit {
    /// Resolves the step unit from the `allow_half` option.
    pub fn from_allow_half(allow_half: bool) -> Self {
        if allow_half {
            Self::Half
        } else {
            Self::Whole
        }
    }

    /// Numeric size of one step.
    pub fn size(self) -> f64 {
        match self {
            Self::Whole => 1.0,
            Self::Half => 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Which side owns the committed value. Fixed for the lifetime of a control instance.
pub enum Authority {
    /// The caller owns the value; the engine only proposes changes.
    Controlled,
    /// The engine owns and persists the value.
    Uncontrolled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
/// Interaction gating computed from the `disabled`/`read_only` props.
pub enum Gate {
    /// Pointer and keyboard input commit values.
    #[default]
    Interactive,
    /// Value is inspectable and focusable but not editable.
    ReadOnly,
    /// Control is inactive and removed from the tab order.
    Disabled,
}

impl Gate {
    /// Resolves the gate from props. `disabled` takes precedence over `read_only`.
    pub fn from_flags(disabled: bool, read_only: bool) -> Self {
        if disabled {
            Self::Disabled
        } else if read_only {
            Self::ReadOnly
        } else {
            Self::Interactive
        }
    }

    /// Whether input may change state.
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Interactive)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Abstracted input consumed by [`crate::RatingController::handle`].
pub enum InteractionEvent {
    /// Pointer pressed on an item.
    PointerDown {
        /// Zero-based item index.
        index: u32,
        /// Pointer position within the item width, normalized to `[0, 1)`.
        fraction: f64,
    },
    /// Pointer entered or moved over an item.
    PointerEnter {
        /// Zero-based item index.
        index: u32,
        /// Pointer position within the item width, normalized to `[0, 1)`.
        fraction: f64,
    },
    /// Pointer left the interactive region.
    PointerLeave,
    /// Keyboard navigation key.
    KeyPress(RatingKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Per-instance selection state.
pub struct SelectionState {
    /// Authoritative, externally visible value.
    pub committed: f64,
    /// Transient hover value. Display only.
    pub preview: Option<f64>,
    /// Count of selectable items, at least 1.
    pub max: u32,
    /// Active step unit.
    pub step: StepUnit,
    /// Value ownership.
    pub authority: Authority,
}
