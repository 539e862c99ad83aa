//! Shared control and feedback primitives.

use leptos::*;

mod feedback;
mod rating;

pub use feedback::FieldError;
pub use rating::Rating;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Text tone for feedback regions such as [`FieldError`].
pub enum TextTone {
    /// Primary text.
    Primary,
    /// Secondary text.
    Secondary,
    /// Danger tone.
    Danger,
}

impl Default for TextTone {
    fn default() -> Self {
        Self::Primary
    }
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared sizing tokens for selection controls.
pub enum ControlSize {
    /// Dense control.
    Sm,
    /// Default control.
    Md,
    /// Large control.
    Lg,
}

impl Default for ControlSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ControlSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-rating", None), "ui-rating");
        assert_eq!(merge_layout_class("ui-rating", Some("")), "ui-rating");
        assert_eq!(
            merge_layout_class("ui-rating", Some("review-stars")),
            "ui-rating review-stars"
        );
    }

    #[test]
    fn tokens_are_stable() {
        assert_eq!(ControlSize::default().token(), "md");
        assert_eq!(bool_token(true), "true");
    }

    #[test]
    fn field_error_tones_map_to_distinct_tokens() {
        let tokens = [TextTone::Primary, TextTone::Secondary, TextTone::Danger].map(TextTone::token);
        assert_eq!(tokens, ["primary", "secondary", "danger"]);
    }
}
