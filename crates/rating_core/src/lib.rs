//! Headless interaction engine for bounded value-selection controls such as ratings.
//!
//! The crate resolves pointer geometry and keyboard input into candidate values, applies
//! disabled/read-only gating, and commits accepted values under either controlled or
//! uncontrolled authority. It has no DOM dependency: the primitive layer in `system_ui` feeds it
//! [`InteractionEvent`] values and executes the returned [`RatingEffect`] intents.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod config;
mod controller;
mod display;
mod geometry;
mod hover;
mod keyboard;
mod model;
mod value_model;

pub use config::{ConfigIssue, NormalizedConfig, RatingConfig, SeedField};
pub use controller::{ControllerState, RatingController, RatingEffect};
pub use display::{
    accessible_label, format_value, item_fills, ItemFill, RatingAccessibility, RATING_ROLE,
};
pub use geometry::{clamp_fraction, map as map_pointer, ItemGeometry};
pub use hover::HoverPreviewTracker;
pub use keyboard::{step as step_key, RatingKey};
pub use model::{Authority, Gate, InteractionEvent, SelectionState, StepUnit, DEFAULT_MAX};
pub use value_model::{resolve_value, ValueModel};
