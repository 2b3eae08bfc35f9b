//! Stroke styling configuration supplied by the host before finalization.
//!
//! Hosts hand options over as a JSON bag merged from user settings, so
//! parsing is tolerant: unknown keys are ignored and missing or mistyped
//! values fall back to their defaults. Only a structurally invalid value
//! (not a JSON object) is rejected. Out-of-range numbers are clamped where
//! they are consumed; a bad option degrades visual fidelity instead of
//! aborting the stroke.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Error returned by [`StrokeStyleConfig::from_value`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The options value is not a JSON object.
    #[error("stroke style options must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Which styling branch a finalized stroke takes.
///
/// A stroke is styled as either pen or sketch, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeStyle {
    /// Thinned and smoothed point buffer for a precise line.
    Pen,
    /// Jittered path with optional extra outlines for a pencil look.
    #[default]
    Sketch,
}

impl StrokeStyle {
    /// Parse a style name. Anything other than `"pen"` selects sketch,
    /// the default branch.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name == "pen" { Self::Pen } else { Self::Sketch }
    }
}

impl<'de> Deserialize<'de> for StrokeStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name))
    }
}

/// Recognized stroke styling options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrokeStyleConfig {
    /// Hand-drawn effect on or off. Off returns the built path unchanged.
    pub enabled: bool,
    /// Styling branch taken at finalization.
    pub style: StrokeStyle,
    /// Jitter strength for the sketch branch. Negative values act as zero.
    pub roughness: f64,
    /// Axis offset of the sketch drop shadow. Negative values act as zero.
    pub shadow_offset: f64,
    /// Total line passes for the sketch look; 1 draws no extra outlines.
    pub sketch_line_count: u32,
    /// Outline offset factor relative to the base jitter amplitude.
    pub sketch_offset_scale: f64,
    /// Distance threshold for pen-point decimation, floored to 1.
    pub decimate_min_distance: f64,
    /// Box-filter radius for pen-point smoothing; below 2 disables it.
    pub smoothing_window: u32,
}

impl Default for StrokeStyleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            style: StrokeStyle::Sketch,
            roughness: 0.85,
            shadow_offset: 0.9,
            sketch_line_count: 1,
            sketch_offset_scale: 0.65,
            decimate_min_distance: 3.0,
            smoothing_window: 2,
        }
    }
}

impl StrokeStyleConfig {
    /// Parse a host-supplied options bag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotAnObject`] when `value` is not a JSON
    /// object. Everything inside a valid object is recoverable.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let Some(options) = value.as_object() else {
            return Err(ConfigError::NotAnObject(json_type_name(value)));
        };
        let defaults = Self::default();

        Ok(Self {
            enabled: options
                .get("enabled")
                .and_then(Value::as_bool)
                .unwrap_or(defaults.enabled),
            style: options
                .get("style")
                .and_then(Value::as_str)
                .map_or(defaults.style, StrokeStyle::parse),
            roughness: number_or(options, "roughness", defaults.roughness),
            shadow_offset: number_or(options, "shadowOffset", defaults.shadow_offset),
            sketch_line_count: count_or(options, "sketchLineCount", defaults.sketch_line_count),
            sketch_offset_scale: number_or(
                options,
                "sketchOffsetScale",
                defaults.sketch_offset_scale,
            ),
            decimate_min_distance: number_or(
                options,
                "decimateMinDistance",
                defaults.decimate_min_distance,
            ),
            smoothing_window: count_or(options, "smoothingWindow", defaults.smoothing_window),
        })
    }
}

fn number_or(options: &Map<String, Value>, key: &str, default: f64) -> f64 {
    options.get(key).and_then(Value::as_f64).unwrap_or(default)
}

/// Read a count option. Hosts send counts as plain JSON numbers, so
/// fractional values round and negatives clamp to zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count_or(options: &Map<String, Value>, key: &str, default: u32) -> u32 {
    options
        .get(key)
        .and_then(Value::as_f64)
        .map_or(default, |value| {
            value.round().clamp(0.0, f64::from(u32::MAX)) as u32
        })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
