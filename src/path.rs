//! Path model: drawing commands and per-stroke style attributes.
//!
//! A finished stroke is one [`Path`]: an ordered command list plus the
//! style the host renders it with. Commands keep their coordinate
//! arguments as a flat list so the jitter passes can perturb every
//! coordinate uniformly without caring about the command kind.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CURVE_JITTER, LINE_JITTER};

/// The kind of a path drawing command.
///
/// Wire names use the single-letter SVG convention canvas hosts store
/// path data in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathOp {
    #[serde(rename = "M")]
    MoveTo,
    #[serde(rename = "L")]
    LineTo,
    #[serde(rename = "Q")]
    QuadTo,
    #[serde(rename = "C")]
    CubicTo,
    #[serde(rename = "Z")]
    Close,
}

impl PathOp {
    /// Jitter multiplier for this command kind. Curvature visually dampens
    /// small offsets, so curve commands wobble harder than straight ones.
    #[must_use]
    pub fn jitter_multiplier(self) -> f64 {
        match self {
            Self::QuadTo | Self::CubicTo => CURVE_JITTER,
            Self::MoveTo | Self::LineTo | Self::Close => LINE_JITTER,
        }
    }
}

/// One drawing instruction: a command kind plus its coordinate arguments.
///
/// Argument order is fixed per kind: `(x y)` for move/line,
/// `(cx cy x y)` for quadratic, `(c1x c1y c2x c2y x y)` for cubic, and
/// empty for close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathCommand {
    pub op: PathOp,
    pub args: Vec<f64>,
}

impl PathCommand {
    #[must_use]
    pub fn move_to(x: f64, y: f64) -> Self {
        Self { op: PathOp::MoveTo, args: vec![x, y] }
    }

    #[must_use]
    pub fn line_to(x: f64, y: f64) -> Self {
        Self { op: PathOp::LineTo, args: vec![x, y] }
    }

    #[must_use]
    pub fn quad_to(cx: f64, cy: f64, x: f64, y: f64) -> Self {
        Self { op: PathOp::QuadTo, args: vec![cx, cy, x, y] }
    }

    #[must_use]
    pub fn cubic_to(c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        Self { op: PathOp::CubicTo, args: vec![c1x, c1y, c2x, c2y, x, y] }
    }

    #[must_use]
    pub fn close() -> Self {
        Self { op: PathOp::Close, args: Vec::new() }
    }

    /// The command's endpoint (its final coordinate pair), when it has one.
    #[must_use]
    pub fn endpoint(&self) -> Option<(f64, f64)> {
        if self.args.len() < 2 {
            return None;
        }
        Some((self.args[self.args.len() - 2], self.args[self.args.len() - 1]))
    }
}

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

/// Line join style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// Which paint pass runs first when the path is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintOrder {
    Fill,
    Stroke,
}

/// Drop shadow attached to a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color as a CSS color string.
    pub color: String,
    /// Blur radius; 0 gives a hard offset copy.
    pub blur: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub opacity: f64,
    /// Whether the shadow follows the stroke rather than the fill.
    pub affect_stroke: bool,
}

/// A finished freehand stroke: ordered commands plus style attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub commands: Vec<PathCommand>,
    /// Fill color; freehand strokes are stroke-only, so this stays `None`.
    pub fill: Option<String>,
    /// Stroke color as a CSS color string.
    pub stroke: String,
    /// Stroke width in canvas units.
    pub stroke_width: f64,
    pub opacity: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub miter_limit: f64,
    /// Keep the stroke width fixed when the host scales the object.
    pub stroke_uniform: bool,
    /// Dash pattern, if the stroke is dashed.
    pub dash: Option<Vec<f64>>,
    pub shadow: Option<Shadow>,
    pub paint_order: PaintOrder,
}

/// Drop commands that land on the same endpoint as the previous kept one.
///
/// Repeated pointer samples leave the builder emitting commands whose
/// endpoints coincide exactly, so the comparison is bitwise. Commands
/// without an endpoint are kept and do not update the comparison state.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn dedupe_endpoints(commands: &[PathCommand]) -> Vec<PathCommand> {
    let mut deduped = Vec::with_capacity(commands.len());
    let mut last: Option<(f64, f64)> = None;

    for command in commands {
        if let Some(endpoint) = command.endpoint() {
            if last == Some(endpoint) {
                continue;
            }
            last = Some(endpoint);
        }
        deduped.push(command.clone());
    }

    deduped
}
