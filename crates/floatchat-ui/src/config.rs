//! Widget configuration with validated construction.

use floatchat_animation::BounceDecaySpec;
use floatchat_foundation::{GestureThresholds, SUPPRESS_CLICK_MS};
use std::fmt;

/// Edge length of the floating button, in logical pixels.
pub const WIDGET_SIZE: f32 = 56.0;
/// Gap kept between the button and every viewport edge.
pub const VIEWPORT_MARGIN: f32 = 8.0;
/// Distance from the bottom-right corner at mount.
pub const INITIAL_INSET: f32 = 24.0;
/// Delay before the canned bot reply is appended.
pub const BOT_REPLY_DELAY_MS: u64 = 400;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidgetConfig {
    pub widget_size: f32,
    pub margin: f32,
    pub initial_inset: f32,
    pub gestures: GestureThresholds,
    pub suppression_ms: u64,
    pub reply_delay_ms: u64,
    pub inertia: BounceDecaySpec,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            widget_size: WIDGET_SIZE,
            margin: VIEWPORT_MARGIN,
            initial_inset: INITIAL_INSET,
            gestures: GestureThresholds::default(),
            suppression_ms: SUPPRESS_CLICK_MS,
            reply_delay_ms: BOT_REPLY_DELAY_MS,
            inertia: BounceDecaySpec::default(),
        }
    }
}

impl WidgetConfig {
    pub fn builder() -> WidgetConfigBuilder {
        WidgetConfigBuilder {
            config: Self::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("widget_size", self.widget_size)?;
        non_negative("margin", self.margin)?;
        non_negative("initial_inset", self.initial_inset)?;
        non_negative("click_tolerance", self.gestures.click_tolerance)?;
        non_negative("throw_threshold", self.gestures.throw_threshold)?;
        if self.gestures.sample_window_ms == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "sample_window_ms",
            });
        }

        let inertia = &self.inertia;
        positive("frame_interval_ms", inertia.frame_interval_ms)?;
        positive("stop_threshold", inertia.stop_threshold)?;
        if !(inertia.friction > 0.0 && inertia.friction < 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "friction",
                value: inertia.friction,
                range: "(0, 1)",
            });
        }
        if !(0.0..=1.0).contains(&inertia.bounce) {
            return Err(ConfigError::OutOfRange {
                field: "bounce",
                value: inertia.bounce,
                range: "[0, 1]",
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

#[derive(Clone, Debug)]
pub struct WidgetConfigBuilder {
    config: WidgetConfig,
}

impl WidgetConfigBuilder {
    pub fn widget_size(mut self, size: f32) -> Self {
        self.config.widget_size = size;
        self
    }

    pub fn margin(mut self, margin: f32) -> Self {
        self.config.margin = margin;
        self
    }

    pub fn initial_inset(mut self, inset: f32) -> Self {
        self.config.initial_inset = inset;
        self
    }

    pub fn click_tolerance(mut self, tolerance: f32) -> Self {
        self.config.gestures.click_tolerance = tolerance;
        self
    }

    pub fn sample_window_ms(mut self, window_ms: u64) -> Self {
        self.config.gestures.sample_window_ms = window_ms;
        self
    }

    pub fn throw_threshold(mut self, threshold: f32) -> Self {
        self.config.gestures.throw_threshold = threshold;
        self
    }

    pub fn suppression_ms(mut self, duration_ms: u64) -> Self {
        self.config.suppression_ms = duration_ms;
        self
    }

    pub fn reply_delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.reply_delay_ms = delay_ms;
        self
    }

    pub fn inertia(mut self, inertia: BounceDecaySpec) -> Self {
        self.config.inertia = inertia;
        self
    }

    pub fn build(self) -> Result<WidgetConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// A configuration field holds a value the widget cannot work with.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    NotFinite {
        field: &'static str,
    },
    NotPositive {
        field: &'static str,
        value: f32,
    },
    Negative {
        field: &'static str,
        value: f32,
    },
    ZeroDuration {
        field: &'static str,
    },
    OutOfRange {
        field: &'static str,
        value: f32,
        range: &'static str,
    },
}

impl ConfigError {
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::NotFinite { field }
            | ConfigError::NotPositive { field, .. }
            | ConfigError::Negative { field, .. }
            | ConfigError::ZeroDuration { field }
            | ConfigError::OutOfRange { field, .. } => field,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFinite { field } => write!(f, "{field} must be finite"),
            ConfigError::NotPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            ConfigError::Negative { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            ConfigError::ZeroDuration { field } => write!(f, "{field} must be non-zero"),
            ConfigError::OutOfRange {
                field,
                value,
                range,
            } => write!(f, "{field} must lie in {range}, got {value}"),
        }
    }
}

impl std::error::Error for ConfigError {}
