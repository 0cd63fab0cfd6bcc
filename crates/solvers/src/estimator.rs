//! Repeated funnel searches producing a distribution of estimates.
//!
//! Each repetition runs an independent funnel search with fresh
//! randomness. A failed repetition is recorded as a [`Failure`] marker and
//! the run continues, so one bad repetition never discards the rest of the
//! distribution. Observers are notified synchronously after every
//! repetition and may return [`Action::Cancel`] to stop between
//! repetitions, keeping the work completed so far.

use thiserror::Error;

use placeline_core::{Observer, Segment, UniformSource};

use crate::funnel;

/// Events emitted after each repetition.
///
/// Repetitions are numbered from 0 in completion order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A repetition finished with an estimate.
    RepetitionCompleted {
        /// Index of the repetition that just finished.
        repetition: usize,

        /// Total number of repetitions requested.
        repetitions: usize,

        /// The estimated optimal starting position.
        estimate: f64,
    },

    /// A repetition failed; its error is recorded in the distribution.
    RepetitionFailed {
        /// Index of the repetition that failed.
        repetition: usize,

        /// Total number of repetitions requested.
        repetitions: usize,
    },
}

/// Actions an observer can take between repetitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current repetition and return the partial
    /// distribution.
    Cancel,
}

/// Indicates whether the estimator ran every repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// All repetitions ran.
    Completed,

    /// Cancelled by an observer; the distribution is partial.
    Cancelled,
}

/// A failed repetition, kept alongside the successful estimates.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    /// Index of the repetition that failed.
    pub repetition: usize,

    /// The search error.
    pub error: funnel::Error,
}

/// The estimates gathered for one point count.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    /// Estimated optimal positions, in repetition order.
    pub estimates: Vec<f64>,

    /// Markers for repetitions that failed.
    pub failures: Vec<Failure>,

    /// Whether the run completed or was cancelled.
    pub status: Status,
}

impl Distribution {
    /// Returns the number of repetitions that produced an estimate.
    #[must_use]
    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    /// Returns `true` if no repetition produced an estimate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }
}

/// Errors that can occur before any repetition starts.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EstimatorError {
    #[error("repetitions must be at least 1, got 0")]
    ZeroRepetitions,
}

/// Runs the funnel search `repetitions` times and collects the estimates.
///
/// # Errors
///
/// Returns an error if `repetitions` is zero. Failures inside individual
/// repetitions do not abort the run; they are recorded in the returned
/// [`Distribution`].
pub fn run<S, Obs>(
    segment: &Segment,
    point_count: usize,
    repetitions: usize,
    config: &funnel::Config,
    source: &mut S,
    mut observer: Obs,
) -> Result<Distribution, EstimatorError>
where
    S: UniformSource,
    Obs: Observer<Event, Action>,
{
    if repetitions == 0 {
        return Err(EstimatorError::ZeroRepetitions);
    }

    let mut estimates = Vec::with_capacity(repetitions);
    let mut failures = Vec::new();

    for repetition in 0..repetitions {
        let event = match funnel::search_unobserved(segment, point_count, config, source) {
            Ok(solution) => {
                estimates.push(solution.position);
                Event::RepetitionCompleted {
                    repetition,
                    repetitions,
                    estimate: solution.position,
                }
            }
            Err(error) => {
                failures.push(Failure { repetition, error });
                Event::RepetitionFailed {
                    repetition,
                    repetitions,
                }
            }
        };

        if observer.observe(&event) == Some(Action::Cancel) {
            return Ok(Distribution {
                estimates,
                failures,
                status: Status::Cancelled,
            });
        }
    }

    Ok(Distribution {
        estimates,
        failures,
        status: Status::Completed,
    })
}
