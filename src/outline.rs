//! Extra jittered outlines for the multi-pass pencil look.

#[cfg(test)]
#[path = "outline_test.rs"]
mod outline_test;

use crate::consts::OUTLINE_DRIFT_STEP;
use crate::path::{PathCommand, PathOp};
use crate::rng::UniformSource;
use crate::rough::jitter_command;

/// Build independently jittered copies of `base` for layering.
///
/// A stroke drawn with `line_count` passes needs `line_count - 1` outlines
/// on top of the roughened base line; a count of 1 (or 0) yields none.
/// Each outline re-jitters the unjittered base at a progressively wider
/// offset, and its first command is forced to [`PathOp::MoveTo`] so it
/// starts a disconnected sub-path when the caller appends it to the
/// stroke's command list.
#[must_use]
pub fn generate_outlines(
    base: &[PathCommand],
    line_count: u32,
    offset_scale: f64,
    random: &mut dyn UniformSource,
) -> Vec<Vec<PathCommand>> {
    let extra = line_count.saturating_sub(1);
    let mut outlines = Vec::with_capacity(extra as usize);

    for i in 0..extra {
        let scale = offset_scale * OUTLINE_DRIFT_STEP.mul_add(f64::from(i), 1.0);
        let mut outline: Vec<PathCommand> = base
            .iter()
            .map(|command| jitter_command(command, scale, random))
            .collect();
        if let Some(first) = outline.first_mut() {
            first.op = PathOp::MoveTo;
        }
        outlines.push(outline);
    }

    outlines
}
