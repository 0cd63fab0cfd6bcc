//! Sweeping the estimator across a range of point counts.
//!
//! For each integer point count `n` in `[n_min, n_max]` the sweep runs an
//! independent [`estimator`](crate::estimator) pass and stores the
//! resulting distribution under key `n`. Point counts share nothing but
//! the output map and the observer, so output ordering is determined by
//! the keys and repetition indices alone.
//!
//! Observers receive every repetition event plus a
//! [`Event::PointCountCompleted`] per finished `n`, and may return
//! [`Action::Cancel`] at either granularity. Cancellation returns the
//! partially filled result rather than discarding completed work.

use std::collections::BTreeMap;

use thiserror::Error;

use placeline_core::{Observer, Segment, UniformSource};

use crate::estimator::{self, Distribution};
use crate::funnel;

/// Configuration for a sweep across point counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    segment: Segment,
    repetitions: usize,
    funnel: funnel::Config,
}

/// Errors that can occur when validating a sweep config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SweepConfigError {
    #[error("repetitions must be at least 1, got 0")]
    ZeroRepetitions,
}

impl Default for SweepConfig {
    fn default() -> Self {
        // The canonical run: segment [0, 2] with a symmetric initial
        // start at the midpoint. Known-good values, unwrap is safe.
        let segment = Segment::new(0.0, 2.0).unwrap();
        let funnel = funnel::Config::default().with_origin(segment.midpoint());
        Self::new(segment, 3, funnel).unwrap()
    }
}

impl SweepConfig {
    /// Creates a sweep config with a validated repetition count.
    ///
    /// # Errors
    ///
    /// Returns an error if `repetitions` is zero.
    pub fn new(
        segment: Segment,
        repetitions: usize,
        funnel: funnel::Config,
    ) -> Result<Self, SweepConfigError> {
        if repetitions == 0 {
            return Err(SweepConfigError::ZeroRepetitions);
        }

        Ok(Self {
            segment,
            repetitions,
            funnel,
        })
    }

    /// Returns the segment every point count is simulated on.
    #[must_use]
    pub fn segment(&self) -> Segment {
        self.segment
    }

    /// Returns the number of repetitions per point count.
    #[must_use]
    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// Returns the funnel search configuration.
    #[must_use]
    pub fn funnel(&self) -> &funnel::Config {
        &self.funnel
    }
}

/// Errors that can occur before any estimation starts.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SweepError {
    #[error("point count range is reversed: {n_min} > {n_max}")]
    ReversedRange { n_min: usize, n_max: usize },

    #[error("point counts must be at least 1, got 0")]
    ZeroPointCount,

    #[error(transparent)]
    Estimator(#[from] estimator::EstimatorError),
}

/// Events emitted while sweeping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A repetition finished for some point count.
    RepetitionCompleted {
        point_count: usize,
        repetition: usize,
        repetitions: usize,
        estimate: f64,
    },

    /// A repetition failed for some point count.
    RepetitionFailed {
        point_count: usize,
        repetition: usize,
        repetitions: usize,
    },

    /// All repetitions for one point count finished.
    PointCountCompleted {
        point_count: usize,
        completed: usize,
        failed: usize,
    },
}

/// Actions an observer can take during a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the sweep and return the partially filled result.
    Cancel,
}

/// Indicates whether the sweep covered every point count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every point count in the range was estimated.
    Completed,

    /// Cancelled by an observer; the result holds the work finished so
    /// far.
    Cancelled,
}

/// One distribution of estimates per point count, keyed by `n`.
///
/// Built incrementally during the sweep; immutable once handed to the
/// caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    distributions: BTreeMap<usize, Distribution>,
    status: Status,
}

impl SweepResult {
    /// Returns the distributions keyed by point count, in key order.
    #[must_use]
    pub fn distributions(&self) -> &BTreeMap<usize, Distribution> {
        &self.distributions
    }

    /// Returns the distribution for one point count, if it was reached.
    #[must_use]
    pub fn get(&self, point_count: usize) -> Option<&Distribution> {
        self.distributions.get(&point_count)
    }

    /// Returns whether the sweep completed or was cancelled.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }
}

/// Runs the estimator for every point count in `[n_min, n_max]`.
///
/// # Errors
///
/// Returns an error if the range is reversed or starts below 1. Failures
/// inside individual repetitions are recorded in the affected
/// distribution and do not abort the sweep.
pub fn run_sweep<S, Obs>(
    n_min: usize,
    n_max: usize,
    config: &SweepConfig,
    source: &mut S,
    mut observer: Obs,
) -> Result<SweepResult, SweepError>
where
    S: UniformSource,
    Obs: Observer<Event, Action>,
{
    if n_min > n_max {
        return Err(SweepError::ReversedRange { n_min, n_max });
    }
    if n_min == 0 {
        return Err(SweepError::ZeroPointCount);
    }

    let segment = config.segment();
    let mut distributions = BTreeMap::new();

    for point_count in n_min..=n_max {
        let forward = |event: &estimator::Event| {
            let mapped = match *event {
                estimator::Event::RepetitionCompleted {
                    repetition,
                    repetitions,
                    estimate,
                } => Event::RepetitionCompleted {
                    point_count,
                    repetition,
                    repetitions,
                    estimate,
                },
                estimator::Event::RepetitionFailed {
                    repetition,
                    repetitions,
                } => Event::RepetitionFailed {
                    point_count,
                    repetition,
                    repetitions,
                },
            };

            observer.observe(&mapped).map(|action| match action {
                Action::Cancel => estimator::Action::Cancel,
            })
        };

        let distribution = estimator::run(
            &segment,
            point_count,
            config.repetitions(),
            config.funnel(),
            source,
            forward,
        )?;

        let cancelled = distribution.status == estimator::Status::Cancelled;
        let completed = distribution.estimates.len();
        let failed = distribution.failures.len();
        distributions.insert(point_count, distribution);

        if cancelled {
            return Ok(SweepResult {
                distributions,
                status: Status::Cancelled,
            });
        }

        let event = Event::PointCountCompleted {
            point_count,
            completed,
            failed,
        };
        if observer.observe(&event) == Some(Action::Cancel) {
            return Ok(SweepResult {
                distributions,
                status: Status::Cancelled,
            });
        }
    }

    Ok(SweepResult {
        distributions,
        status: Status::Completed,
    })
}
