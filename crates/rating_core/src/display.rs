//! Display and accessibility projections consumed by the rendering layer.

use serde::{Deserialize, Serialize};

/// Group role exposed to assistive technology.
pub const RATING_ROLE: &str = "radiogroup";

/// Default value text, `"{value}/{max}"`.
pub fn format_value(value: f64, max: u32) -> String {
    format!("{value}/{max}")
}

/// Synthesized accessible label used when no `aria-label`/`aria-labelledby` is supplied.
pub fn accessible_label(value: f64, max: u32) -> String {
    format!("Rating: {value} out of {max} stars")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// How much of one item is painted for a given display value.
pub enum ItemFill {
    /// Not filled.
    Empty,
    /// Left half filled.
    Half,
    /// Fully filled.
    Full,
}

impl ItemFill {
    /// Fill for item `index` when `value` is displayed.
    pub fn for_item(value: f64, index: u32) -> Self {
        let base = f64::from(index);
        if value >= base + 1.0 {
            Self::Full
        } else if value >= base + 0.5 {
            Self::Half
        } else {
            Self::Empty
        }
    }

    /// Stable `data-ui-fill` token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Half => "half",
            Self::Full => "full",
        }
    }
}

/// Fills for every item `0..max`.
pub fn item_fills(value: f64, max: u32) -> Vec<ItemFill> {
    (0..max).map(|index| ItemFill::for_item(value, index)).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Accessibility contract for the control's group element.
pub struct RatingAccessibility {
    /// Always [`RATING_ROLE`].
    pub role: &'static str,
    /// Accessible name, when not delegated to `labelled_by`.
    pub label: Option<String>,
    /// Id reference supplied as `aria-labelledby`.
    pub labelled_by: Option<String>,
    /// Tab stop, present only for interactive controls.
    pub tab_index: Option<i32>,
    /// `aria-readonly`.
    pub read_only: bool,
    /// `aria-disabled`.
    pub disabled: bool,
    /// Displayed (preview-aware) value.
    pub value_now: f64,
    /// Item count.
    pub value_max: u32,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_formatter_renders_value_over_max() {
        assert_eq!(format_value(4.0, 5), "4/5");
        assert_eq!(format_value(2.5, 5), "2.5/5");
    }

    #[test]
    fn synthesized_label_mentions_value_and_max() {
        assert_eq!(accessible_label(3.0, 5), "Rating: 3 out of 5 stars");
        assert_eq!(accessible_label(3.5, 10), "Rating: 3.5 out of 10 stars");
    }

    #[test]
    fn fills_follow_display_value() {
        assert_eq!(
            item_fills(2.5, 5),
            vec![
                ItemFill::Full,
                ItemFill::Full,
                ItemFill::Half,
                ItemFill::Empty,
                ItemFill::Empty,
            ]
        );
        assert_eq!(item_fills(0.0, 3), vec![ItemFill::Empty; 3]);
    }
}
