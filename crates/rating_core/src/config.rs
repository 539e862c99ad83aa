//! Construction-time options and their one-time normalization.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Authority, Gate, StepUnit, DEFAULT_MAX};
use crate::value_model::resolve_value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Enumerated options recognized by the selection control.
pub struct RatingConfig {
    /// Caller-owned value. Presence selects controlled authority.
    pub value: Option<f64>,
    /// One-time seed for uncontrolled authority.
    pub default_value: Option<f64>,
    /// Item count.
    pub max: u32,
    /// Enables half-unit precision.
    pub allow_half: bool,
    /// Keeps the value inspectable but not editable.
    pub read_only: bool,
    /// Deactivates the control and removes it from the tab order.
    pub disabled: bool,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            value: None,
            default_value: None,
            max: DEFAULT_MAX,
            allow_half: false,
            read_only: false,
            disabled: false,
        }
    }
}

impl RatingConfig {
    /// Config for a caller-owned value.
    pub fn controlled(value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    /// Config for an engine-owned value seeded with `default_value`.
    pub fn uncontrolled(default_value: f64) -> Self {
        Self {
            default_value: Some(default_value),
            ..Self::default()
        }
    }

    /// Sets the item count.
    pub fn with_max(mut self, max: u32) -> Self {
        self.max = max;
        self
    }

    /// Enables or disables half-unit precision.
    pub fn with_allow_half(mut self, allow_half: bool) -> Self {
        self.allow_half = allow_half;
        self
    }

    /// Sets the read-only flag.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Sets the disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Authority implied by which value option is present.
    pub fn authority(&self) -> Authority {
        if self.value.is_some() {
            Authority::Controlled
        } else {
            Authority::Uncontrolled
        }
    }

    /// Coerces the options into a consistent configuration.
    ///
    /// Misconfiguration never fails: every coercion is applied and reported as a
    /// [`ConfigIssue`] so the rendering layer can log it.
    pub fn normalize(&self) -> (NormalizedConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let max = if self.max == 0 {
            issues.push(ConfigIssue::ZeroMax);
            1
        } else {
            self.max
        };
        let step = StepUnit::from_allow_half(self.allow_half);
        let authority = self.authority();

        let (field, raw) = match (self.value, self.default_value) {
            (Some(value), _) => (SeedField::Value, Some(value)),
            (None, default_value) => (SeedField::DefaultValue, default_value),
        };

        let seed = match raw {
            None => 0.0,
            Some(raw) if !raw.is_finite() => {
                issues.push(ConfigIssue::NonFiniteSeed { field });
                0.0
            }
            Some(raw) => {
                let resolved = resolve_value(raw, 0.0, max, step);
                if raw < 0.0 || raw > f64::from(max) {
                    issues.push(ConfigIssue::SeedOutOfRange {
                        field,
                        value: raw,
                        max,
                        resolved,
                    });
                } else if resolved != raw {
                    issues.push(ConfigIssue::SeedNotOnStep {
                        field,
                        value: raw,
                        step: step.size(),
                        resolved,
                    });
                }
                resolved
            }
        };

        (
            NormalizedConfig {
                authority,
                max,
                step,
                seed,
                gate: Gate::from_flags(self.disabled, self.read_only),
            },
            issues,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Options after coercion. Every field satisfies the engine invariants.
pub struct NormalizedConfig {
    /// Value ownership.
    pub authority: Authority,
    /// Item count, at least 1.
    pub max: u32,
    /// Step unit.
    pub step: StepUnit,
    /// Initial committed value, in range and on a step.
    pub seed: f64,
    /// Interaction gating.
    pub gate: Gate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Which option supplied the initial value.
pub enum SeedField {
    /// The controlled `value` option.
    Value,
    /// The uncontrolled `defaultValue` option.
    DefaultValue,
}

impl fmt::Display for SeedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value => f.write_str("value"),
            Self::DefaultValue => f.write_str("defaultValue"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
/// Misconfiguration that was coerced during [`RatingConfig::normalize`].
pub enum ConfigIssue {
    /// `max` was zero.
    #[error("max must be at least 1; using 1")]
    ZeroMax,
    /// The initial value was `NaN` or infinite.
    #[error("{field} is not a finite number; using 0")]
    NonFiniteSeed {
        /// Offending option.
        field: SeedField,
    },
    /// The initial value was outside `[0, max]`.
    #[error("{field} {value} is outside 0..={max}; using {resolved}")]
    SeedOutOfRange {
        /// Offending option.
        field: SeedField,
        /// Supplied value.
        value: f64,
        /// Effective item count.
        max: u32,
        /// Value actually used.
        resolved: f64,
    },
    /// The initial value was not a multiple of the step unit.
    #[error("{field} {value} is not a multiple of {step}; using {resolved}")]
    SeedNotOnStep {
        /// Offending option.
        field: SeedField,
        /// Supplied value.
        value: f64,
        /// Step unit size.
        step: f64,
        /// Value actually used.
        resolved: f64,
    },
}
