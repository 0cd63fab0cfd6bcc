//! Reproducibility and variance behavior of seeded runs.

use integration_tests::{canonical_segment, sample_stdev};
use placeline_core::RandomSource;
use placeline_solvers::{estimator, funnel, sweep};

#[test]
fn identical_seeds_reproduce_the_full_sweep() {
    let segment = canonical_segment();
    let funnel = funnel::Config::new(2, 40).unwrap();
    let config = sweep::SweepConfig::new(segment, 3, funnel).unwrap();

    let mut a = RandomSource::seeded(123);
    let mut b = RandomSource::seeded(123);

    let first = sweep::run_sweep(1, 3, &config, &mut a, ()).unwrap();
    let second = sweep::run_sweep(1, 3, &config, &mut b, ()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn different_seeds_produce_different_estimates() {
    let segment = canonical_segment();
    let config = funnel::Config::new(3, 100).unwrap();

    let mut a = RandomSource::seeded(1);
    let mut b = RandomSource::seeded(2);

    let first = estimator::run(&segment, 3, 6, &config, &mut a, ()).unwrap();
    let second = estimator::run(&segment, 3, 6, &config, &mut b, ()).unwrap();

    assert_ne!(first.estimates, second.estimates);
}

/// Averaging more trials per candidate narrows the spread of repeated
/// estimates for the same problem.
#[test]
fn more_trials_reduce_the_estimate_spread() {
    let segment = canonical_segment();
    let repetitions = 10;

    let noisy = funnel::Config::new(2, 10).unwrap();
    let mut source = RandomSource::seeded(55);
    let wide = estimator::run(&segment, 1, repetitions, &noisy, &mut source, ()).unwrap();

    let averaged = funnel::Config::new(2, 5_000).unwrap();
    let mut source = RandomSource::seeded(55);
    let tight = estimator::run(&segment, 1, repetitions, &averaged, &mut source, ()).unwrap();

    let wide_spread = sample_stdev(&wide.estimates).unwrap();
    let tight_spread = sample_stdev(&tight.estimates).unwrap();

    assert!(
        tight_spread < wide_spread,
        "spread did not shrink: {tight_spread} >= {wide_spread}"
    );
}
