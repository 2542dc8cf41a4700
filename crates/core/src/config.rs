//! Per-call render configuration.
//!
//! A [`RenderConfig`] is a plain value: there is no global or persisted
//! configuration. [`RenderConfig::from_params`] is the lenient entry point for
//! untyped input; every field falls back to its default instead of failing.
//! Deserializing goes through the same path, so a config read from JSON
//! resolves exactly like one built from form parameters.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::color::Rgb;
use crate::params::{param_color, param_color_opt, param_padding, param_shape};
use crate::shape::ShapeKind;

/// Default margin around the symbol, in modules.
pub const DEFAULT_PADDING: usize = 1;

/// Largest margin accepted from untyped input, in modules. Keeps the largest
/// symbol (177 modules) well inside the canvas size limit.
pub const MAX_PADDING: usize = 64;

/// Colors, shapes and margin for one render.
///
/// Serializes with the same camelCase keys [`RenderConfig::from_params`]
/// reads. `eye_color` is `None` until set explicitly; [`RenderConfig::eye_color`]
/// resolves it against the dot color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    pub dot_color: Rgb,
    #[serde(rename = "bgColor")]
    pub background_color: Rgb,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_color: Option<Rgb>,
    pub eye_shape: ShapeKind,
    pub dot_shape: ShapeKind,
    pub padding: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dot_color: Rgb::BLACK,
            background_color: Rgb::WHITE,
            eye_color: None,
            eye_shape: ShapeKind::Square,
            dot_shape: ShapeKind::Square,
            padding: DEFAULT_PADDING,
        }
    }
}

impl RenderConfig {
    /// Resolves a configuration from an untyped option object.
    ///
    /// Recognized keys: `dotColor`, `bgColor`, `eyeColor`, `eyeShape`,
    /// `dotShape`, `padding`. A missing or malformed `eyeColor` leaves the eye
    /// color unset so it follows the dot color.
    pub fn from_params(params: &Value) -> Self {
        let defaults = Self::default();
        Self {
            dot_color: param_color(params, "dotColor", defaults.dot_color),
            background_color: param_color(params, "bgColor", defaults.background_color),
            eye_color: param_color_opt(params, "eyeColor"),
            eye_shape: param_shape(params, "eyeShape", defaults.eye_shape),
            dot_shape: param_shape(params, "dotShape", defaults.dot_shape),
            padding: param_padding(params, "padding", defaults.padding),
        }
    }

    /// Color of finder-pattern modules: the explicit eye color, or the dot
    /// color when none was set.
    pub fn eye_color(&self) -> Rgb {
        self.eye_color.unwrap_or(self.dot_color)
    }

    /// Sets the data module color.
    pub fn with_dot_color(mut self, color: Rgb) -> Self {
        self.dot_color = color;
        self
    }

    /// Sets the background color.
    pub fn with_background_color(mut self, color: Rgb) -> Self {
        self.background_color = color;
        self
    }

    /// Sets an explicit finder-pattern color.
    pub fn with_eye_color(mut self, color: Rgb) -> Self {
        self.eye_color = Some(color);
        self
    }

    /// Sets the finder-pattern shape.
    pub fn with_eye_shape(mut self, shape: ShapeKind) -> Self {
        self.eye_shape = shape;
        self
    }

    /// Sets the data module shape.
    pub fn with_dot_shape(mut self, shape: ShapeKind) -> Self {
        self.dot_shape = shape;
        self
    }

    /// Sets the margin in modules. Sizes past the canvas limit fail at render.
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }
}

impl<'de> Deserialize<'de> for RenderConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|value| Self::from_params(&value))
    }
}
