use super::Candidate;

/// Events emitted by the funnel search.
///
/// Stages are numbered from 1; stage `s` resolves the position to
/// `10^-s`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A candidate position was scored.
    Evaluated {
        /// The refinement stage this evaluation belongs to.
        stage: usize,

        /// The candidate that was just scored.
        candidate: Candidate,

        /// The best candidate of the stage so far.
        best: Candidate,
    },

    /// A refinement stage finished.
    StageCompleted {
        /// The stage that completed.
        stage: usize,

        /// The step size used during this stage.
        step: f64,

        /// The stage's winning candidate.
        best: Candidate,
    },
}

impl Event {
    /// Returns the refinement stage the event belongs to.
    #[must_use]
    pub fn stage(&self) -> usize {
        match self {
            Self::Evaluated { stage, .. } | Self::StageCompleted { stage, .. } => *stage,
        }
    }

    /// Returns the best candidate known at the time of the event.
    #[must_use]
    pub fn best(&self) -> Candidate {
        match self {
            Self::Evaluated { best, .. } | Self::StageCompleted { best, .. } => *best,
        }
    }
}
