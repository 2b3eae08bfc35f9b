//! Injectable uniform randomness for the jitter passes.
//!
//! Jitter amounts are drawn through a small trait seam so production
//! strokes use the thread-local generator while tests and reproducible
//! previews supply fixed sequences.

#[cfg(test)]
#[path = "rng_test.rs"]
mod rng_test;

use rand::Rng;

/// A source of uniform values in `[0, 1)`.
pub trait UniformSource {
    /// The next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Production source backed by the thread-local generator.
#[derive(Debug)]
pub struct ThreadUniform {
    rng: rand::rngs::ThreadRng,
}

impl ThreadUniform {
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformSource for ThreadUniform {
    fn next_unit(&mut self) -> f64 {
        self.rng.random()
    }
}

/// Deterministic source cycling over a fixed sequence.
///
/// Intended for tests and reproducible previews. An empty sequence behaves
/// as a constant `0.5`, the jitter-neutral midpoint.
#[derive(Debug, Clone)]
pub struct SequenceUniform {
    values: Vec<f64>,
    index: usize,
}

impl SequenceUniform {
    /// A source that repeats `values` in order.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }

    /// A source that always returns `value`.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl UniformSource for SequenceUniform {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let value = self.values[self.index];
        self.index = (self.index + 1) % self.values.len();
        value
    }
}
