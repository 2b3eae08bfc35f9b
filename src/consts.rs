//! Shared numeric constants for the stroke shaping pipeline.

// ── Jitter ──────────────────────────────────────────────────────

/// Fraction of the stroke width contributing to the jitter amplitude.
pub const JITTER_WIDTH_FACTOR: f64 = 0.35;

/// Lower bound for the jitter amplitude, so thin strokes still wobble.
pub const JITTER_FLOOR: f64 = 0.6;

/// Jitter multiplier for quadratic and cubic commands. Curvature visually
/// dampens small offsets, so control points need a larger wobble.
pub const CURVE_JITTER: f64 = 1.8;

/// Jitter multiplier for move, line, and close commands.
pub const LINE_JITTER: f64 = 1.2;

// ── Sketch outlines ─────────────────────────────────────────────

/// Per-outline growth of the offset scale: outline `i` is jittered at
/// `offset_scale * (1 + i * OUTLINE_DRIFT_STEP)`.
pub const OUTLINE_DRIFT_STEP: f64 = 0.35;

// ── Pen ─────────────────────────────────────────────────────────

/// Miter limit set by the pen effect.
pub const PEN_MITER_LIMIT: f64 = 2.0;

/// Miter limit on a freshly built path, before any styling.
pub const BUILT_MITER_LIMIT: f64 = 4.0;

// ── Shadow ──────────────────────────────────────────────────────

/// Opacity of the pen-on-paper drop shadow.
pub const SHADOW_OPACITY: f64 = 0.5;

// ── Preprocessing ───────────────────────────────────────────────

/// Hard floor for the decimation distance threshold.
pub const MIN_DECIMATE_DISTANCE: f64 = 1.0;
