//! Pure helper functions for extracting render options from a `serde_json::Value` object.
//!
//! Each helper takes a JSON value, a key name, and a default. If the key is
//! missing or the value is unusable, the default is returned. These never
//! fail; they always produce a usable value.

use serde_json::Value;

use crate::color::Rgb;
use crate::config::MAX_PADDING;
use crate::shape::ShapeKind;

/// Extracts a `#RRGGBB` color from `params[name]`.
///
/// Missing keys, non-string values and malformed strings all yield `default`.
pub fn param_color(params: &Value, name: &str, default: Rgb) -> Rgb {
    param_color_opt(params, name).unwrap_or(default)
}

/// Like [`param_color`], but reports an unusable value as `None` so the
/// caller can resolve the fallback later.
pub fn param_color_opt(params: &Value, name: &str) -> Option<Rgb> {
    match params.get(name) {
        Some(Value::String(s)) => Rgb::parse_lenient(s),
        Some(Value::Null) | None => None,
        Some(other) => {
            tracing::warn!(param = name, value = %other, "expected a color string");
            None
        }
    }
}

/// Extracts a shape from `params[name]`; unknown names resolve to square.
pub fn param_shape(params: &Value, name: &str, default: ShapeKind) -> ShapeKind {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(ShapeKind::from_name)
        .unwrap_or(default)
}

/// Extracts a non-negative module padding from `params[name]`.
///
/// Accepts a non-negative JSON integer or a string holding one (form input
/// arrives as text). Negative, fractional, non-numeric values and values above
/// [`MAX_PADDING`] yield `default`.
pub fn param_padding(params: &Value, name: &str, default: usize) -> usize {
    let parsed = match params.get(name) {
        Some(Value::Number(n)) => n.as_u64().and_then(|v| usize::try_from(v).ok()),
        Some(Value::String(s)) => s.trim().parse::<usize>().ok(),
        _ => return default,
    };
    parsed.filter(|&p| p <= MAX_PADDING).unwrap_or_else(|| {
        tracing::warn!(param = name, fallback = default, "invalid padding");
        default
    })
}
