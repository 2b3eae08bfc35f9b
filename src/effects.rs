//! Stroke styling: precise-pen finishing and the pen-on-paper shadow.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use crate::consts::{PEN_MITER_LIMIT, SHADOW_OPACITY};
use crate::path::{LineCap, LineJoin, PaintOrder, Path, Shadow};

/// Style a path as a precise pen stroke.
///
/// Rounds caps and joins, tightens the miter limit, keeps the stroke width
/// uniform under host scaling, paints the stroke before any fill, and
/// clears any shadow. Applying twice produces the same state.
pub fn apply_pen_effect(path: &mut Path) {
    path.line_cap = LineCap::Round;
    path.line_join = LineJoin::Round;
    path.miter_limit = PEN_MITER_LIMIT;
    path.stroke_uniform = true;
    path.paint_order = PaintOrder::Stroke;
    path.shadow = None;
}

/// Add the one-time drop shadow that gives sketch strokes paper depth.
///
/// A path that already carries a shadow is left untouched. Otherwise the
/// caps and joins are rounded and a shadow is set in the stroke's own
/// color: zero blur, equal offset on both axes, affecting the stroke only.
pub fn apply_stroke_shadow(path: &mut Path, offset: f64) {
    if path.shadow.is_some() {
        return;
    }

    path.line_cap = LineCap::Round;
    path.line_join = LineJoin::Round;
    path.shadow = Some(Shadow {
        color: path.stroke.clone(),
        blur: 0.0,
        offset_x: offset,
        offset_y: offset,
        opacity: SHADOW_OPACITY,
        affect_stroke: true,
    });
}
