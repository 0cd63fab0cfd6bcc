use thiserror::Error;

use crate::trial::TrialError;

/// Errors that can occur during the funnel search.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("search origin {origin} lies outside the segment [{start}, {end}]")]
    OriginOutOfBounds { origin: f64, start: f64, end: f64 },

    #[error("refinement stage {stage} produced no candidates (bounds [{left}, {right}])")]
    NoCandidates { stage: usize, left: f64, right: f64 },

    #[error(transparent)]
    Trial(#[from] TrialError),
}
