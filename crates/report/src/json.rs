//! JSON interchange for sweep runs.
//!
//! A [`RunRecord`] pairs the parameters a sweep ran with (its meta block)
//! and the raw estimates it produced, keyed by point count. Estimates are
//! stored at full precision so a reloaded run is numerically identical to
//! the one that was saved.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use placeline_solvers::sweep::{SweepConfig, SweepResult};

/// The parameters a recorded sweep ran with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunMeta {
    /// Left endpoint of the segment.
    pub segment_start: f64,

    /// Right endpoint of the segment.
    pub segment_end: f64,

    /// Smallest point count in the sweep.
    pub n_min: usize,

    /// Largest point count in the sweep.
    pub n_max: usize,

    /// Number of funnel stages per search.
    pub significant_figures: usize,

    /// Trials averaged per candidate position.
    pub trials_per_candidate: usize,

    /// Repetitions per point count.
    pub repetitions: usize,
}

/// A saved sweep: its parameters plus every estimate it produced.
///
/// Failed repetitions are absent from the dataset, so a point count's
/// vector may be shorter than `meta.repetitions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// The parameters the sweep ran with.
    pub meta: RunMeta,

    /// Raw estimates keyed by point count.
    pub dataset: BTreeMap<usize, Vec<f64>>,
}

/// Errors that can occur while serializing or deserializing a record.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("cannot record an empty sweep result")]
    EmptyResult,

    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

impl RunRecord {
    /// Builds a record from a finished sweep and the config it ran with.
    ///
    /// The point count range is read back off the result's keys, so a
    /// cancelled sweep records exactly the range it covered.
    ///
    /// # Errors
    ///
    /// Returns an error if the result holds no distributions.
    pub fn from_sweep(result: &SweepResult, config: &SweepConfig) -> Result<Self, JsonError> {
        let distributions = result.distributions();
        let (Some(&n_min), Some(&n_max)) = (
            distributions.keys().next(),
            distributions.keys().next_back(),
        ) else {
            return Err(JsonError::EmptyResult);
        };

        let segment = config.segment();
        let funnel = config.funnel();
        let meta = RunMeta {
            segment_start: segment.start(),
            segment_end: segment.end(),
            n_min,
            n_max,
            significant_figures: funnel.significant_figures(),
            trials_per_candidate: funnel.trials_per_candidate(),
            repetitions: config.repetitions(),
        };

        let dataset = distributions
            .iter()
            .map(|(&point_count, distribution)| (point_count, distribution.estimates.clone()))
            .collect();

        Ok(Self { meta, dataset })
    }

    /// Serializes the record as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, JsonError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a record from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid record.
    pub fn from_json(text: &str) -> Result<Self, JsonError> {
        Ok(serde_json::from_str(text)?)
    }
}
