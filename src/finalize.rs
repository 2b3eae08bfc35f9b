//! Stroke finalization: the one-per-stroke styling pipeline.
//!
//! When the host reports pointer-up it hands the captured point buffer and
//! the current styling options to a fresh [`StrokeFinalizer`]:
//!
//! 1. Pen strokes preprocess the buffer first (decimation, then optional
//!    smoothing).
//! 2. The path builder converts the buffer into an initial styled path.
//! 3. With the hand-drawn effect off, the path is returned as built.
//!    Otherwise duplicate endpoints are dropped and exactly one styling
//!    branch runs: pen finishing, or the sketch chain of roughening,
//!    optional extra outlines, and the drop shadow.
//!
//! `finalize` consumes the finalizer, so each stroke gets a fresh instance
//! and no per-stroke state survives the call.

#[cfg(test)]
#[path = "finalize_test.rs"]
mod finalize_test;

use crate::builder::{BrushStyle, MidpointPathBuilder, PathBuilder};
use crate::config::{StrokeStyle, StrokeStyleConfig};
use crate::effects::{apply_pen_effect, apply_stroke_shadow};
use crate::outline::generate_outlines;
use crate::path::{Path, dedupe_endpoints};
use crate::point::{Point, decimate, smooth};
use crate::rng::{ThreadUniform, UniformSource};
use crate::rough::{jitter_scale, roughen};

/// Turns one captured stroke into a finished, styled path.
pub struct StrokeFinalizer<B = MidpointPathBuilder, R = ThreadUniform> {
    builder: B,
    random: R,
    brush: BrushStyle,
}

impl StrokeFinalizer {
    /// A finalizer for one stroke drawn with `brush`, using the default
    /// builder and thread-local randomness.
    #[must_use]
    pub fn new(brush: BrushStyle) -> Self {
        Self {
            builder: MidpointPathBuilder,
            random: ThreadUniform::new(),
            brush,
        }
    }
}

impl<B: PathBuilder, R: UniformSource> StrokeFinalizer<B, R> {
    /// A finalizer with explicit collaborators, for hosts that construct
    /// paths differently or need reproducible jitter.
    #[must_use]
    pub fn with_parts(builder: B, random: R, brush: BrushStyle) -> Self {
        Self { builder, random, brush }
    }

    /// Run the full stroke-completion pipeline and return the styled path.
    ///
    /// The caller guarantees at least one captured point; an empty buffer
    /// degrades to a path with no commands rather than failing.
    #[must_use]
    pub fn finalize(mut self, points: &[Point], config: &StrokeStyleConfig) -> Path {
        let preprocess =
            config.enabled && config.style == StrokeStyle::Pen && points.len() > 2;

        let buffer: Vec<Point>;
        let points = if preprocess {
            buffer = preprocess_pen_points(points, config);
            tracing::debug!(raw = points.len(), kept = buffer.len(), "preprocessed pen stroke");
            &buffer[..]
        } else {
            points
        };

        let mut path = self.builder.build(points, &self.brush);
        if !config.enabled {
            return path;
        }

        path.commands = dedupe_endpoints(&path.commands);

        match config.style {
            StrokeStyle::Pen => apply_pen_effect(&mut path),
            StrokeStyle::Sketch => self.apply_sketch_effect(&mut path, config),
        }

        tracing::debug!(style = ?config.style, commands = path.commands.len(), "stroke styled");
        path
    }

    fn apply_sketch_effect(&mut self, path: &mut Path, config: &StrokeStyleConfig) {
        let scale = jitter_scale(path.stroke_width, config.roughness);
        let base = std::mem::take(&mut path.commands);
        path.commands = roughen(&base, scale, &mut self.random);

        if config.sketch_line_count > 1 {
            // Outlines perturb the unjittered base so drift never compounds.
            let offset_scale = scale * config.sketch_offset_scale.max(0.0);
            let outlines = generate_outlines(
                &base,
                config.sketch_line_count,
                offset_scale,
                &mut self.random,
            );
            for outline in outlines {
                path.commands.extend(outline);
            }
        }

        apply_stroke_shadow(path, config.shadow_offset.max(0.0));
    }
}

/// Thin and soften a pen stroke's point buffer before path construction.
fn preprocess_pen_points(points: &[Point], config: &StrokeStyleConfig) -> Vec<Point> {
    let decimated = decimate(points, config.decimate_min_distance);
    if config.smoothing_window >= 2 {
        smooth(&decimated, config.smoothing_window as usize)
    } else {
        decimated
    }
}
