#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;
use crate::rng::SequenceUniform;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn sample_commands() -> Vec<PathCommand> {
    vec![
        PathCommand::move_to(0.0, 0.0),
        PathCommand::quad_to(1.0, 2.0, 3.0, 4.0),
        PathCommand::line_to(5.0, 6.0),
    ]
}

// --- jitter_scale ---

#[test]
fn scale_floor_with_zero_width() {
    assert_eq!(jitter_scale(0.0, 1.0), 0.6);
}

#[test]
fn scale_follows_wide_strokes() {
    assert!(approx_eq(jitter_scale(10.0, 1.0), 3.5));
}

#[test]
fn scale_floor_applies_below_cutoff() {
    // Widths up to 0.6 / 0.35 sit on the floor.
    assert_eq!(jitter_scale(1.0, 1.0), 0.6);
}

#[test]
fn scale_is_linear_in_roughness() {
    assert!(approx_eq(jitter_scale(10.0, 2.0), 7.0));
    assert!(approx_eq(jitter_scale(10.0, 0.5), 1.75));
}

#[test]
fn scale_zero_roughness_disables_jitter() {
    assert_eq!(jitter_scale(10.0, 0.0), 0.0);
}

#[test]
fn scale_negative_roughness_acts_as_zero() {
    assert_eq!(jitter_scale(10.0, -3.0), 0.0);
}

#[test]
fn scale_negative_width_falls_back_to_floor() {
    assert_eq!(jitter_scale(-10.0, 1.0), 0.6);
}

// --- roughen ---

#[test]
fn roughen_preserves_structure() {
    let commands = sample_commands();
    let mut source = SequenceUniform::new(vec![0.1, 0.9, 0.4]);
    let out = roughen(&commands, 2.0, &mut source);

    assert_eq!(out.len(), commands.len());
    for (jittered, original) in out.iter().zip(&commands) {
        assert_eq!(jittered.op, original.op);
        assert_eq!(jittered.args.len(), original.args.len());
    }
}

#[test]
fn roughen_leaves_input_untouched() {
    let commands = sample_commands();
    let copy = commands.clone();
    let mut source = SequenceUniform::new(vec![0.0, 1.0]);
    let _out = roughen(&commands, 5.0, &mut source);
    assert_eq!(commands, copy);
}

#[test]
fn roughen_neutral_draw_changes_nothing() {
    // A draw of 0.5 maps to zero offset.
    let commands = sample_commands();
    let mut source = SequenceUniform::constant(0.5);
    assert_eq!(roughen(&commands, 3.0, &mut source), commands);
}

#[test]
fn roughen_zero_scale_changes_nothing() {
    let commands = sample_commands();
    let mut source = SequenceUniform::new(vec![0.0, 0.17, 0.99]);
    assert_eq!(roughen(&commands, 0.0, &mut source), commands);
}

#[test]
fn roughen_offsets_are_bounded_by_scale_and_multiplier() {
    let commands = sample_commands();
    let scale = 2.0;
    let mut source = SequenceUniform::new(vec![0.0, 0.25, 0.5, 0.75, 0.999]);
    let out = roughen(&commands, scale, &mut source);

    for (jittered, original) in out.iter().zip(&commands) {
        let bound = scale * original.op.jitter_multiplier();
        for (new, old) in jittered.args.iter().zip(&original.args) {
            assert!((new - old).abs() <= bound);
        }
    }
}

#[test]
fn roughen_extreme_draw_hits_multiplier_bound() {
    // A draw of exactly 1.0 maps to the full positive offset, which makes
    // the line/curve multipliers directly observable.
    let commands = vec![
        PathCommand::line_to(0.0, 0.0),
        PathCommand::quad_to(0.0, 0.0, 0.0, 0.0),
    ];
    let mut source = SequenceUniform::constant(1.0);
    let out = roughen(&commands, 1.0, &mut source);

    for value in &out[0].args {
        assert!(approx_eq(*value, 1.2));
    }
    for value in &out[1].args {
        assert!(approx_eq(*value, 1.8));
    }
}

#[test]
fn roughen_low_draw_moves_negative() {
    let commands = vec![PathCommand::line_to(10.0, 10.0)];
    let mut source = SequenceUniform::constant(0.0);
    let out = roughen(&commands, 1.0, &mut source);
    for value in &out[0].args {
        assert!(*value < 10.0);
        assert!(approx_eq(*value, 10.0 - 1.2));
    }
}

#[test]
fn roughen_consumes_one_draw_per_coordinate() {
    let commands = vec![
        PathCommand::move_to(0.0, 0.0),
        PathCommand::quad_to(0.0, 0.0, 0.0, 0.0),
    ];
    // Six coordinates; the seventh draw is the sequence's head again.
    let mut source = SequenceUniform::new(vec![0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 1.0]);
    let out = roughen(&commands, 1.0, &mut source);
    assert_eq!(out, commands);
    assert_eq!(source.next_unit(), 1.0);
}
