//! Bar configuration
//!
//! Construction-time settings for a convex bar. A config can be built in
//! code, starting from [`BarConfig::default`], or loaded from TOML:
//!
//! ```toml
//! height = 56
//! curve_size = 80
//! top = -30
//! style = "fixed_circle"
//! easing = "ease_out_cubic"
//! background_color = "#3F51B5"
//! gradient = ["#3F51B5", "#1A237E"]
//! ```
//!
//! Every field is optional; missing fields take their default values.

use std::fs;
use std::path::Path;
use std::time::Duration;

use convex_animation::Easing;
use convex_core::{Brush, Color, Gradient, Point, Shadow, Size};
use serde::{Deserialize, Serialize};

use crate::error::{BarError, Result};
use crate::style::{StylePalette, TabStyle};

/// Where a transition starts when a tap arrives
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionOrigin {
    /// Start from the rest position of the previously active slot, even if
    /// the curve is still moving
    #[default]
    Rest,
    /// Start from the curve's current, possibly mid-flight, position
    Live,
}

/// Construction-time configuration of a convex bar
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Height of the bar body
    pub height: f32,
    /// Width of the convex curve
    pub curve_size: f32,
    /// Vertical displacement of the curve apex from the top edge
    pub curve_height: f32,
    /// Offset of the convex item above the bar; must be <= 0
    pub top: f32,
    /// Radius of the bar's top corners
    pub corner_radius: f32,
    /// Shadow magnitude; 0 disables the shadow
    pub elevation: f32,
    /// Solid background fill
    pub background_color: Color,
    /// Vertical gradient fill; takes precedence over `background_color`
    pub gradient: Option<Vec<Color>>,
    pub shadow_color: Color,
    /// Inactive item tint
    pub color: Color,
    /// Active item tint
    pub active_color: Color,
    /// Fill of tab badges
    pub badge_color: Color,
    pub style: TabStyle,
    pub easing: Easing,
    /// Duration of the curve transition in milliseconds
    pub transition_ms: u64,
    pub initial_active_index: usize,
    pub transition_origin: TransitionOrigin,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            height: 50.0,
            curve_size: 75.0,
            curve_height: 25.0,
            top: -25.0,
            corner_radius: 0.0,
            elevation: 2.0,
            background_color: Color::from_hex(0x2196F3),
            gradient: None,
            shadow_color: Color::BLACK.with_alpha(0.3),
            color: Color::WHITE.with_alpha(0.7),
            active_color: Color::WHITE,
            badge_color: Color::from_hex(0xF44336),
            style: TabStyle::React,
            easing: Easing::EaseInOut,
            transition_ms: 150,
            initial_active_index: 0,
            transition_origin: TransitionOrigin::Rest,
        }
    }
}

impl BarConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("loaded bar config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Check the settings that do not depend on the slot count
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("height", self.height),
            ("curve_size", self.curve_size),
            ("curve_height", self.curve_height),
            ("top", self.top),
            ("corner_radius", self.corner_radius),
            ("elevation", self.elevation),
        ];
        for (name, value) in lengths {
            if !value.is_finite() {
                return Err(BarError::config(format!("{name} must be finite")));
            }
        }
        if self.top > 0.0 {
            return Err(BarError::config(format!(
                "top inset must be <= 0, got {}",
                self.top
            )));
        }
        if matches!(self.gradient.as_deref(), Some([])) {
            return Err(BarError::config("gradient needs at least one color"));
        }
        if !self.easing.stays_in_range() {
            return Err(BarError::config(format!(
                "easing control points must lie in [0, 1], got {:?}",
                self.easing
            )));
        }
        Ok(())
    }

    /// Background brush for a bar of `size`
    pub fn background(&self, size: Size) -> Brush {
        match &self.gradient {
            Some(colors) if !colors.is_empty() => Gradient::linear_even(
                Point::ZERO,
                Point::new(0.0, size.height),
                colors,
            )
            .into(),
            _ => self.background_color.into(),
        }
    }

    /// Shadow cast by the bar, if it has any elevation
    pub fn shadow(&self) -> Option<Shadow> {
        (self.elevation > 0.0).then(|| Shadow::elevation(self.elevation, self.shadow_color))
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Colors handed to the built-in styles
    pub fn palette(&self) -> StylePalette {
        let circle_color = match &self.gradient {
            Some(colors) if !colors.is_empty() => colors[0],
            _ => self.background_color,
        };
        StylePalette {
            color: self.color,
            active_color: self.active_color,
            circle_color,
        }
    }
}
