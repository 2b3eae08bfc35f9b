#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;
use crate::rng::SequenceUniform;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn base_commands() -> Vec<PathCommand> {
    vec![
        PathCommand::move_to(0.0, 0.0),
        PathCommand::quad_to(1.0, 1.0, 2.0, 2.0),
        PathCommand::line_to(3.0, 3.0),
    ]
}

#[test]
fn single_line_count_yields_no_outlines() {
    let mut source = SequenceUniform::constant(0.5);
    assert!(generate_outlines(&base_commands(), 1, 1.0, &mut source).is_empty());
}

#[test]
fn zero_line_count_yields_no_outlines() {
    let mut source = SequenceUniform::constant(0.5);
    assert!(generate_outlines(&base_commands(), 0, 1.0, &mut source).is_empty());
}

#[test]
fn three_line_count_yields_two_outlines() {
    let base = base_commands();
    let mut source = SequenceUniform::constant(0.5);
    let outlines = generate_outlines(&base, 3, 1.0, &mut source);

    assert_eq!(outlines.len(), 2);
    for outline in &outlines {
        assert_eq!(outline.len(), base.len());
    }
}

#[test]
fn every_outline_starts_with_move_to() {
    // Even when the base starts with a line command.
    let base = vec![
        PathCommand::line_to(5.0, 5.0),
        PathCommand::line_to(6.0, 6.0),
    ];
    let mut source = SequenceUniform::constant(0.5);
    let outlines = generate_outlines(&base, 4, 1.0, &mut source);

    assert_eq!(outlines.len(), 3);
    for outline in &outlines {
        assert_eq!(outline[0].op, PathOp::MoveTo);
    }
}

#[test]
fn forced_move_to_keeps_original_args() {
    let base = vec![PathCommand::quad_to(1.0, 2.0, 3.0, 4.0)];
    let mut source = SequenceUniform::constant(0.5);
    let outlines = generate_outlines(&base, 2, 1.0, &mut source);

    assert_eq!(outlines[0][0].op, PathOp::MoveTo);
    assert_eq!(outlines[0][0].args, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn outlines_drift_progressively_wider() {
    // With a constant full-strength draw, each coordinate offset equals
    // scale_i * multiplier, so successive outlines grow by the drift step.
    let base = vec![PathCommand::line_to(0.0, 0.0)];
    let mut source = SequenceUniform::constant(1.0);
    let outlines = generate_outlines(&base, 3, 1.0, &mut source);

    let first = outlines[0][0].args[0] - base[0].args[0];
    let second = outlines[1][0].args[0] - base[0].args[0];
    assert!(approx_eq(first, 1.2));
    assert!(approx_eq(second, 1.2 * 1.35));
}

#[test]
fn outlines_jitter_independently() {
    let base = vec![PathCommand::line_to(0.0, 0.0), PathCommand::line_to(9.0, 9.0)];
    let mut source = SequenceUniform::new(vec![0.0, 0.25, 0.5, 0.75]);
    let outlines = generate_outlines(&base, 3, 1.0, &mut source);

    // Each outline consumed its own draws, so the two differ.
    assert_ne!(outlines[0], outlines[1]);
}

#[test]
fn base_commands_are_left_untouched() {
    let base = base_commands();
    let copy = base.clone();
    let mut source = SequenceUniform::new(vec![0.9, 0.1]);
    let _outlines = generate_outlines(&base, 5, 2.0, &mut source);
    assert_eq!(base, copy);
}

#[test]
fn zero_offset_scale_copies_base_geometry() {
    let base = base_commands();
    let mut source = SequenceUniform::new(vec![0.9, 0.1]);
    let outlines = generate_outlines(&base, 2, 0.0, &mut source);

    assert_eq!(outlines[0][0].args, base[0].args);
    assert_eq!(outlines[0][1], base[1]);
    assert_eq!(outlines[0][2], base[2]);
}
