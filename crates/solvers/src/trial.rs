//! Monte Carlo averaging of traversal cost at a fixed starting position.

use thiserror::Error;

use placeline_core::{SampleError, Segment, UniformSource, sample_points, traversal_distance};

/// Errors that can occur while gathering trials.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TrialError {
    #[error("trial count must be at least 1, got 0")]
    ZeroTrials,

    #[error(transparent)]
    Sample(#[from] SampleError),
}

/// Returns the mean traversal cost over `trials` independent samples.
///
/// Each trial draws a fresh set of `point_count` points on the segment and
/// evaluates the traversal cost from `start_position`. Averaging reduces
/// the Monte Carlo noise in the cost estimate; the variance shrinks as
/// `trials` grows.
///
/// # Errors
///
/// Returns an error if `trials` or `point_count` is zero.
pub fn mean_traversal<S: UniformSource>(
    segment: &Segment,
    point_count: usize,
    start_position: f64,
    trials: usize,
    source: &mut S,
) -> Result<f64, TrialError> {
    if trials == 0 {
        return Err(TrialError::ZeroTrials);
    }

    let mut total = 0.0;
    for _ in 0..trials {
        let points = sample_points(segment, point_count, source)?;
        total += traversal_distance(&points, start_position);
    }

    Ok(total / trials as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use placeline_core::RandomSource;

    fn segment() -> Segment {
        Segment::new(0.0, 2.0).unwrap()
    }

    #[test]
    fn zero_trials_rejected() {
        let mut source = RandomSource::seeded(3);

        let result = mean_traversal(&segment(), 1, 1.0, 0, &mut source);

        assert_eq!(result, Err(TrialError::ZeroTrials));
    }

    #[test]
    fn zero_points_rejected() {
        let mut source = RandomSource::seeded(3);

        let result = mean_traversal(&segment(), 0, 1.0, 10, &mut source);

        assert_eq!(
            result,
            Err(TrialError::Sample(SampleError::ZeroCount))
        );
    }

    #[test]
    fn degenerate_segment_has_exact_mean() {
        // Every point lands on 1.5, so the cost is always |1.0 - 1.5|.
        let segment = Segment::new(1.5, 1.5).unwrap();
        let mut source = RandomSource::seeded(3);

        let mean = mean_traversal(&segment, 4, 1.0, 25, &mut source).unwrap();

        assert_relative_eq!(mean, 0.5);
    }

    #[test]
    fn single_point_mean_approximates_expected_distance() {
        // For one uniform point on [0, 2], E|1 - X| = 0.5.
        let mut source = RandomSource::seeded(11);

        let mean = mean_traversal(&segment(), 1, 1.0, 20_000, &mut source).unwrap();

        assert_relative_eq!(mean, 0.5, epsilon = 0.02);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut a = RandomSource::seeded(99);
        let mut b = RandomSource::seeded(99);

        let first = mean_traversal(&segment(), 3, 0.8, 100, &mut a).unwrap();
        let second = mean_traversal(&segment(), 3, 0.8, 100, &mut b).unwrap();

        assert_eq!(first, second);
    }
}
