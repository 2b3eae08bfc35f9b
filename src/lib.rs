//! Freehand stroke shaping engine for canvas drawing hosts.
//!
//! This crate is the compute stage between raw pointer capture and a
//! finished vector stroke. The host owns input wiring and rendering: it
//! accumulates `{x, y}` samples while the user drags and, on pointer-up,
//! hands the buffer plus the current styling options to a fresh
//! [`finalize::StrokeFinalizer`], which returns a styled [`path::Path`]
//! ready to draw.
//!
//! Two stroke philosophies are supported. The pen style thins and smooths
//! the point buffer for a precise line. The sketch style jitters the built
//! path for a hand-drawn pencil look, optionally layering extra jittered
//! outlines and a small drop shadow on top.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`point`] | Sample points, decimation, and smoothing |
//! | [`path`] | Path commands and per-stroke style attributes |
//! | [`config`] | Host-supplied styling options |
//! | [`builder`] | Point-buffer to path conversion |
//! | [`rough`] | Coordinate jitter for the sketch look |
//! | [`outline`] | Extra jittered outlines for multi-pass strokes |
//! | [`effects`] | Pen finishing and the sketch drop shadow |
//! | [`finalize`] | The one-per-stroke orchestration pipeline |
//! | [`rng`] | Injectable uniform randomness |
//! | [`consts`] | Shared numeric constants |

pub mod builder;
pub mod config;
pub mod consts;
pub mod effects;
pub mod finalize;
pub mod outline;
pub mod path;
pub mod point;
pub mod rng;
pub mod rough;
