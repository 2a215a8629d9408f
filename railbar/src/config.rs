//! Construction-time widget configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;

/// Default track width in pixels.
pub const DEFAULT_TRACK_WIDTH: f64 = 10.0;

/// Options supplied once when a widget is constructed.
///
/// Color overrides take precedence over the resolved [`ColorScheme`] at
/// every application point; hover/active variants are derived from the
/// override so interaction feedback survives it.
///
/// [`ColorScheme`]: crate::theme::ColorScheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Width of the track (and thumb) in pixels.
    #[serde(default = "default_track_width")]
    pub track_width: f64,
    /// Replaces the scheme's thumb color when set.
    #[serde(default)]
    pub thumb_color: Option<Color>,
    /// Replaces the scheme's track color when set.
    #[serde(default)]
    pub track_color: Option<Color>,
}

fn default_track_width() -> f64 {
    DEFAULT_TRACK_WIDTH
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            track_width: DEFAULT_TRACK_WIDTH,
            thumb_color: None,
            track_color: None,
        }
    }
}

impl WidgetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the track width in pixels.
    pub fn track_width(mut self, width: f64) -> Self {
        self.track_width = width;
        self
    }

    /// Override the thumb color.
    pub fn thumb_color(mut self, color: Color) -> Self {
        self.thumb_color = Some(color);
        self
    }

    /// Override the track color.
    pub fn track_color(mut self, color: Color) -> Self {
        self.track_color = Some(color);
        self
    }

    /// Check the configuration for values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.track_width.is_finite() || self.track_width <= 0.0 {
            return Err(ConfigError::InvalidTrackWidth(self.track_width));
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("track width must be a positive finite number of pixels, got {0}")]
    InvalidTrackWidth(f64),
}
