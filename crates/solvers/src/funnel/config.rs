use thiserror::Error;

/// How next-stage bounds are clamped against the segment after a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClampPolicy {
    /// Clamp both bounds only against the segment's upper limit.
    ///
    /// This reproduces the historical refinement update exactly: the lower
    /// bound is never floored at `segment.start()`, so a stage may test
    /// candidate positions below the segment.
    #[default]
    UpperOnly,

    /// Clamp against both segment limits.
    ///
    /// Every tested candidate stays within the segment.
    Symmetric,
}

/// Configuration for the funnel search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    significant_figures: usize,
    trials_per_candidate: usize,
    origin: Option<f64>,
    clamp: ClampPolicy,
}

/// Errors that can occur when validating a funnel search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("significant_figures must be at least 1")]
    ZeroSignificantFigures,

    #[error("trials_per_candidate must be at least 1")]
    ZeroTrials,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(3, 1000).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated counts.
    ///
    /// # Errors
    ///
    /// Returns an error if either count is zero.
    pub fn new(
        significant_figures: usize,
        trials_per_candidate: usize,
    ) -> Result<Self, ConfigError> {
        if significant_figures == 0 {
            return Err(ConfigError::ZeroSignificantFigures);
        }
        if trials_per_candidate == 0 {
            return Err(ConfigError::ZeroTrials);
        }

        Ok(Self {
            significant_figures,
            trials_per_candidate,
            origin: None,
            clamp: ClampPolicy::default(),
        })
    }

    /// Sets the initial left bound of the search.
    ///
    /// Defaults to `segment.start()`. The sweep supplies the segment
    /// midpoint here for a symmetric start. Validated against the segment
    /// when the search runs.
    #[must_use]
    pub fn with_origin(mut self, origin: f64) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Sets the bound clamp policy.
    #[must_use]
    pub fn with_clamp(mut self, clamp: ClampPolicy) -> Self {
        self.clamp = clamp;
        self
    }

    /// Returns the number of refinement stages.
    #[must_use]
    pub fn significant_figures(&self) -> usize {
        self.significant_figures
    }

    /// Returns the number of Monte Carlo trials per candidate.
    #[must_use]
    pub fn trials_per_candidate(&self) -> usize {
        self.trials_per_candidate
    }

    /// Returns the caller-supplied initial left bound, if any.
    #[must_use]
    pub fn origin(&self) -> Option<f64> {
        self.origin
    }

    /// Returns the bound clamp policy.
    #[must_use]
    pub fn clamp(&self) -> ClampPolicy {
        self.clamp
    }
}
