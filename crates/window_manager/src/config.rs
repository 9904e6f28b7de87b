//! Limits enforced by the window manager store.
//!
//! Defaults match the desktop shell's built-in limits; a TOML document can override any subset
//! of them through [`WindowManagerConfig::from_toml_str`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of simultaneously open windows.
pub const MAX_WINDOWS: usize = 20;
/// Minimum managed window width.
pub const MIN_WINDOW_WIDTH: f64 = 200.0;
/// Minimum managed window height.
pub const MIN_WINDOW_HEIGHT: f64 = 150.0;
/// Maximum managed window width.
pub const MAX_WINDOW_WIDTH: f64 = 3840.0;
/// Maximum managed window height.
pub const MAX_WINDOW_HEIGHT: f64 = 2160.0;
/// Lower bound for either position axis.
pub const MIN_POSITION: f64 = 0.0;
/// Upper bound for either position axis.
pub const MAX_POSITION: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Coerces `value` into `[min, max]`. NaN lands on `min`.
    pub fn clamp(self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.max(self.min).min(self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowManagerConfig {
    pub max_windows: usize,
    pub position: AxisBounds,
    pub width: AxisBounds,
    pub height: AxisBounds,
}

impl Default for WindowManagerConfig {
    fn default() -> Self {
        Self {
            max_windows: MAX_WINDOWS,
            position: AxisBounds::new(MIN_POSITION, MAX_POSITION),
            width: AxisBounds::new(MIN_WINDOW_WIDTH, MAX_WINDOW_WIDTH),
            height: AxisBounds::new(MIN_WINDOW_HEIGHT, MAX_WINDOW_HEIGHT),
        }
    }
}

#[derive(Debug, Error)]
/// Errors raised while loading a [`WindowManagerConfig`].
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("failed to parse window manager config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The window ceiling must allow at least one window.
    #[error("max_windows must be at least 1")]
    ZeroCapacity,
    /// The window ceiling may only be lowered.
    #[error("max_windows {max_windows} exceeds the built-in ceiling of {limit}")]
    CapacityAboveLimit {
        /// Configured ceiling.
        max_windows: usize,
        /// Built-in ceiling.
        limit: usize,
    },
    /// A bounds pair is inverted or not finite.
    #[error("invalid `{field}` bounds: min {min} must be finite and not exceed max {max}")]
    InvalidBounds {
        /// Name of the offending bounds table.
        field: &'static str,
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// A bounds pair reaches outside the built-in range for that field.
    #[error("`{field}` bounds [{min}, {max}] fall outside the built-in range [{allowed_min}, {allowed_max}]")]
    BoundsOutOfRange {
        /// Name of the offending bounds table.
        field: &'static str,
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
        /// Built-in lower bound.
        allowed_min: f64,
        /// Built-in upper bound.
        allowed_max: f64,
    },
}

impl WindowManagerConfig {
    /// Parses and validates a TOML config document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and the validation variants when the
    /// limits are inconsistent.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every limit describes a non-empty range inside the built-in limits.
    ///
    /// A config can only tighten the defaults, never widen them.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistent limit found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_windows == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.max_windows > MAX_WINDOWS {
            return Err(ConfigError::CapacityAboveLimit {
                max_windows: self.max_windows,
                limit: MAX_WINDOWS,
            });
        }

        let builtin = Self::default();
        for (field, bounds, allowed) in [
            ("position", self.position, builtin.position),
            ("width", self.width, builtin.width),
            ("height", self.height, builtin.height),
        ] {
            let finite = bounds.min.is_finite() && bounds.max.is_finite();
            if !finite || bounds.min > bounds.max {
                return Err(ConfigError::InvalidBounds {
                    field,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
            if bounds.min < allowed.min || bounds.max > allowed.max {
                return Err(ConfigError::BoundsOutOfRange {
                    field,
                    min: bounds.min,
                    max: bounds.max,
                    allowed_min: allowed.min,
                    allowed_max: allowed.max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_document_yields_builtin_limits() {
        let config = WindowManagerConfig::from_toml_str("").expect("parse");
        assert_eq!(config, WindowManagerConfig::default());
        assert_eq!(config.max_windows, 20);
    }

    #[test]
    fn partial_document_overrides_only_named_limits() {
        let config = WindowManagerConfig::from_toml_str(
            r#"
            max_windows = 4

            [width]
            min = 320.0
            max = 1920.0
            "#,
        )
        .expect("parse");

        assert_eq!(config.max_windows, 4);
        assert_eq!(config.width, AxisBounds::new(320.0, 1920.0));
        assert_eq!(config.height, WindowManagerConfig::default().height);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = WindowManagerConfig::from_toml_str(
            r#"
            [height]
            min = 900.0
            max = 100.0
            "#,
        )
        .expect_err("inverted bounds");
        assert!(matches!(err, ConfigError::InvalidBounds { field: "height", .. }));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = WindowManagerConfig::from_toml_str("max_windows = 0").expect_err("zero");
        assert!(matches!(err, ConfigError::ZeroCapacity));
    }

    #[test]
    fn capacity_above_builtin_ceiling_is_rejected() {
        let err = WindowManagerConfig::from_toml_str("max_windows = 50").expect_err("too many");
        assert!(matches!(
            err,
            ConfigError::CapacityAboveLimit {
                max_windows: 50,
                limit: 20
            }
        ));
    }

    #[test]
    fn bounds_wider_than_builtin_range_are_rejected() {
        let err = WindowManagerConfig::from_toml_str(
            r#"
            [width]
            min = 100.0
            max = 3000.0
            "#,
        )
        .expect_err("too narrow minimum");
        assert!(matches!(err, ConfigError::BoundsOutOfRange { field: "width", .. }));

        let config = WindowManagerConfig {
            position: AxisBounds::new(0.0, 20_000.0),
            ..WindowManagerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BoundsOutOfRange { field: "position", .. })
        ));
    }

    #[test]
    fn malformed_toml_reports_parse_error() {
        let err = WindowManagerConfig::from_toml_str("max_windows = [").expect_err("malformed");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn clamp_maps_nan_to_lower_bound() {
        let bounds = AxisBounds::new(0.0, 10.0);
        assert_eq!(bounds.clamp(f64::NAN), 0.0);
        assert_eq!(bounds.clamp(-3.0), 0.0);
        assert_eq!(bounds.clamp(42.0), 10.0);
        assert_eq!(bounds.clamp(7.5), 7.5);
    }
}
