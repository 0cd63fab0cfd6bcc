//! Summary statistics over sweep results.

use std::collections::BTreeMap;

use placeline_solvers::sweep::SweepResult;

/// Summary statistics for one point count's estimate distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// The point count the estimates belong to.
    pub point_count: usize,

    /// Number of estimates in the distribution.
    pub count: usize,

    /// Mean of the estimates.
    pub mean: f64,

    /// Sample standard deviation; `None` below two estimates.
    pub stdev: Option<f64>,
}

/// Summarizes every distribution in a sweep result, in key order.
///
/// Point counts whose distribution holds no estimates (every repetition
/// failed) are skipped.
#[must_use]
pub fn summarize(result: &SweepResult) -> Vec<Summary> {
    result
        .distributions()
        .iter()
        .filter(|(_, distribution)| !distribution.is_empty())
        .map(|(&point_count, distribution)| {
            let estimates = &distribution.estimates;
            Summary {
                point_count,
                count: estimates.len(),
                mean: mean(estimates),
                stdev: stdev(estimates),
            }
        })
        .collect()
}

/// Maps each distribution to distances from a reference center.
///
/// A display convenience: the estimate's offset `|estimate - center|`
/// rather than its absolute position.
#[must_use]
pub fn distances_from_center(result: &SweepResult, center: f64) -> BTreeMap<usize, Vec<f64>> {
    result
        .distributions()
        .iter()
        .map(|(&point_count, distribution)| {
            let distances = distribution
                .estimates
                .iter()
                .map(|estimate| (estimate - center).abs())
                .collect();
            (point_count, distances)
        })
        .collect()
}

/// Rounds a value to the given number of decimal places.
///
/// Used for user-facing display only; stored estimates are never rounded.
#[must_use]
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn stdev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let mean = mean(values);
    let variance = values
        .iter()
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / (values.len() - 1) as f64;

    Some(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use placeline_core::{RandomSource, Segment};
    use placeline_solvers::funnel;
    use placeline_solvers::sweep::{SweepConfig, run_sweep};

    fn small_sweep() -> SweepResult {
        let segment = Segment::new(0.0, 2.0).unwrap();
        let funnel = funnel::Config::new(2, 50).unwrap();
        let config = SweepConfig::new(segment, 4, funnel).unwrap();
        let mut source = RandomSource::seeded(13);

        run_sweep(1, 3, &config, &mut source, ()).unwrap()
    }

    #[test]
    fn summarizes_each_point_count() {
        let result = small_sweep();

        let summaries = summarize(&result);

        assert_eq!(summaries.len(), 3);
        for (summary, expected_n) in summaries.iter().zip(1..) {
            assert_eq!(summary.point_count, expected_n);
            assert_eq!(summary.count, 4);
            assert!(summary.stdev.is_some());
        }
    }

    #[test]
    fn mean_and_stdev_match_hand_computation() {
        let values = [1.0, 2.0, 3.0, 4.0];

        assert_relative_eq!(mean(&values), 2.5);
        // Sample variance of 1..4 is 5/3.
        assert_relative_eq!(stdev(&values).unwrap(), (5.0_f64 / 3.0).sqrt());
    }

    #[test]
    fn stdev_needs_two_values() {
        assert_eq!(stdev(&[1.0]), None);
    }

    #[test]
    fn distances_are_offsets_from_the_center() {
        let result = small_sweep();

        let distances = distances_from_center(&result, 1.0);

        for (point_count, offsets) in &distances {
            let estimates = &result.get(*point_count).unwrap().estimates;
            assert_eq!(offsets.len(), estimates.len());
            for (offset, estimate) in offsets.iter().zip(estimates) {
                assert_relative_eq!(*offset, (estimate - 1.0).abs());
                assert!(*offset >= 0.0);
            }
        }
    }

    #[test]
    fn rounding_is_display_only_precision() {
        assert_relative_eq!(round_to(1.23456, 2), 1.23);
        assert_relative_eq!(round_to(1.235, 2), 1.24);
        assert_relative_eq!(round_to(-0.005, 2), -0.01);
    }
}
