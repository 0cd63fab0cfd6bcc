use rand::{Rng, SeedableRng, rngs::StdRng};
use thiserror::Error;

use crate::{PointSet, PointSetError, Segment};

/// A capability providing uniform random draws in `[0, 1)`.
///
/// The core never touches global random state; every sampling operation
/// takes an explicit source, which makes deterministic seeding possible
/// for tests and keeps repeated runs reproducible.
pub trait UniformSource {
    /// Returns the next uniform draw in `[0, 1)`.
    fn draw(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn draw(&mut self) -> f64 {
        (**self).draw()
    }
}

/// A [`UniformSource`] backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Creates a source seeded from operating-system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a deterministic source from a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformSource for RandomSource {
    fn draw(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Errors that can occur when sampling points.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SampleError {
    #[error("point count must be at least 1, got 0")]
    ZeroCount,

    /// The uniform source violated its `[0, 1)` contract.
    #[error(transparent)]
    Points(#[from] PointSetError),
}

/// Draws `count` independent points uniformly distributed on the segment.
///
/// Each call produces a fresh [`PointSet`]; nothing is retained between
/// calls.
///
/// # Errors
///
/// Returns an error if `count` is zero or the source produces a draw
/// outside `[0, 1)`.
pub fn sample_points<S: UniformSource>(
    segment: &Segment,
    count: usize,
    source: &mut S,
) -> Result<PointSet, SampleError> {
    if count == 0 {
        return Err(SampleError::ZeroCount);
    }

    let width = segment.width();
    let points = (0..count)
        .map(|_| segment.start() + source.draw() * width)
        .collect();

    // Well-behaved draws land in [start, end); a stray draw surfaces as an
    // out-of-range point rather than a panic.
    Ok(PointSet::new(points, segment)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment() -> Segment {
        Segment::new(0.0, 2.0).unwrap()
    }

    #[test]
    fn zero_count_rejected() {
        let mut source = RandomSource::seeded(7);

        let result = sample_points(&segment(), 0, &mut source);

        assert_eq!(result, Err(SampleError::ZeroCount));
    }

    #[test]
    fn samples_requested_count_in_bounds() {
        let segment = segment();
        let mut source = RandomSource::seeded(7);

        let set = sample_points(&segment, 100, &mut source).unwrap();

        assert_eq!(set.len(), 100);
        assert!(set.as_slice().iter().all(|&p| segment.contains(p)));
    }

    #[test]
    fn identical_seeds_reproduce_draws() {
        let segment = segment();
        let mut a = RandomSource::seeded(42);
        let mut b = RandomSource::seeded(42);

        let first = sample_points(&segment, 10, &mut a).unwrap();
        let second = sample_points(&segment, 10, &mut b).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_diverge() {
        let segment = segment();
        let mut a = RandomSource::seeded(1);
        let mut b = RandomSource::seeded(2);

        let first = sample_points(&segment, 10, &mut a).unwrap();
        let second = sample_points(&segment, 10, &mut b).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn degenerate_segment_samples_its_only_point() {
        let segment = Segment::new(1.5, 1.5).unwrap();
        let mut source = RandomSource::seeded(7);

        let set = sample_points(&segment, 5, &mut source).unwrap();

        assert!(set.as_slice().iter().all(|&p| p == 1.5));
    }
}
