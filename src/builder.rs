//! Path construction: converts a point buffer into an initial styled path.
//!
//! Construction is a collaborator seam. The finalizer only needs something
//! that turns points plus brush attributes into a [`Path`]; hosts with
//! their own curve construction implement [`PathBuilder`], while
//! [`MidpointPathBuilder`] covers the common case.

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;

use serde::{Deserialize, Serialize};

use crate::consts::BUILT_MITER_LIMIT;
use crate::path::{LineCap, LineJoin, PaintOrder, Path, PathCommand};
use crate::point::Point;

/// Brush attributes carried onto a newly built path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushStyle {
    /// Stroke color as a CSS color string.
    pub color: String,
    /// Stroke width in canvas units.
    pub width: f64,
    pub opacity: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    /// Dash pattern, if the brush draws dashed.
    pub dash: Option<Vec<f64>>,
}

impl Default for BrushStyle {
    fn default() -> Self {
        Self {
            color: "#1F1A17".to_owned(),
            width: 1.0,
            opacity: 1.0,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            dash: None,
        }
    }
}

/// Converts a finished point buffer into an initial [`Path`].
pub trait PathBuilder {
    /// Build a path through `points`, styled by `brush`.
    fn build(&self, points: &[Point], brush: &BrushStyle) -> Path;
}

/// Default builder producing a quadratic chain through segment midpoints.
///
/// Each point becomes the control point of a quadratic segment ending at
/// the midpoint to its successor, which keeps the curve smooth without
/// overshooting the sampled positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct MidpointPathBuilder;

impl PathBuilder for MidpointPathBuilder {
    fn build(&self, points: &[Point], brush: &BrushStyle) -> Path {
        let mut commands = Vec::new();

        match points {
            [] => {}
            [point] => {
                // A tap: zero-length segment so round caps render a dot.
                commands.push(PathCommand::move_to(point.x, point.y));
                commands.push(PathCommand::line_to(point.x, point.y));
            }
            _ => {
                commands.push(PathCommand::move_to(points[0].x, points[0].y));
                for i in 1..points.len() {
                    let control = points[i - 1];
                    let mid = control.midpoint(points[i]);
                    commands.push(PathCommand::quad_to(control.x, control.y, mid.x, mid.y));
                }
                let last = points[points.len() - 1];
                commands.push(PathCommand::line_to(last.x, last.y));
            }
        }

        Path {
            commands,
            fill: None,
            stroke: brush.color.clone(),
            stroke_width: brush.width,
            opacity: brush.opacity,
            line_cap: brush.line_cap,
            line_join: brush.line_join,
            miter_limit: BUILT_MITER_LIMIT,
            stroke_uniform: false,
            dash: brush.dash.clone(),
            shadow: None,
            paint_order: PaintOrder::Fill,
        }
    }
}
