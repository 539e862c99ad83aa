//! Shared UI primitive library for selection controls.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed by
//! the stylesheet layer. Interaction logic lives in `rating_core`; primitives here translate DOM
//! pointer and keyboard events into engine events and execute the resulting effects.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{ControlSize, FieldError, Rating, TextTone};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{ControlSize, FieldError, Rating, TextTone};
    pub use rating_core::{format_value, RatingConfig};
}
