//! Randomized coordinate jitter for the hand-drawn sketch look.

#[cfg(test)]
#[path = "rough_test.rs"]
mod rough_test;

use crate::consts::{JITTER_FLOOR, JITTER_WIDTH_FACTOR};
use crate::path::PathCommand;
use crate::rng::UniformSource;

/// Jitter amplitude for a stroke.
///
/// Wider strokes tolerate larger wobble before the effect reads as noise,
/// so the amplitude follows the stroke width with a floor for thin strokes.
/// `roughness` scales the result linearly; zero (or any negative value)
/// disables jitter entirely.
#[must_use]
pub fn jitter_scale(stroke_width: f64, roughness: f64) -> f64 {
    (stroke_width * JITTER_WIDTH_FACTOR).max(JITTER_FLOOR) * roughness.max(0.0)
}

/// Apply symmetric jitter to every coordinate of every command.
///
/// Returns a new command list and leaves the input untouched, so callers
/// can derive further perturbations (sketch outlines) from the unjittered
/// original instead of compounding drift across passes.
#[must_use]
pub fn roughen(
    commands: &[PathCommand],
    scale: f64,
    random: &mut dyn UniformSource,
) -> Vec<PathCommand> {
    commands
        .iter()
        .map(|command| jitter_command(command, scale, random))
        .collect()
}

/// Jitter a single command: each coordinate moves by `U(-1, 1)` scaled by
/// the amplitude and the command-kind multiplier. The kind is untouched.
pub(crate) fn jitter_command(
    command: &PathCommand,
    scale: f64,
    random: &mut dyn UniformSource,
) -> PathCommand {
    let multiplier = command.op.jitter_multiplier();
    let args = command
        .args
        .iter()
        .map(|value| value + (random.next_unit() - 0.5) * 2.0 * scale * multiplier)
        .collect();

    PathCommand { op: command.op, args }
}
