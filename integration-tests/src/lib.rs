//! Shared fixtures for the cross-crate scenario tests.

use placeline_core::{Segment, UniformSource};

/// The canonical segment every scenario runs on.
#[must_use]
pub fn canonical_segment() -> Segment {
    Segment::new(0.0, 2.0).unwrap()
}

/// A source that returns the same draw forever.
///
/// Pins every sampled point to a known location, making the cost
/// landscape deterministic so stage-by-stage behavior can be asserted
/// exactly.
#[derive(Debug, Clone, Copy)]
pub struct ConstantSource(pub f64);

impl UniformSource for ConstantSource {
    fn draw(&mut self) -> f64 {
        self.0
    }
}

/// Sample standard deviation, `None` below two values.
#[must_use]
pub fn sample_stdev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values
        .iter()
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / (values.len() - 1) as f64;

    Some(variance.sqrt())
}
