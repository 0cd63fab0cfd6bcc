//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types,
//! enabling observers to work generically across the funnel search, the
//! estimator, and the sweep.
//!
//! # Event traits
//!
//! - [`HasObjective`] — events that carry a scored cost
//! - [`HasEstimate`] — events that carry a finished position estimate
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can halt a search
//! - [`CanCancel`] — actions that can cancel a run between repetitions
//!
//! # Example
//!
//! ```rust
//! use placeline_core::Observer;
//! use placeline_observers::traits::{CanCancel, HasEstimate};
//!
//! struct StopAfter {
//!     limit: usize,
//!     seen: usize,
//! }
//!
//! impl<E: HasEstimate, A: CanCancel> Observer<E, A> for StopAfter {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.estimate().is_nan() {
//!             return None;
//!         }
//!         self.seen += 1;
//!         (self.seen >= self.limit).then(A::cancel)
//!     }
//! }
//! ```

use placeline_solvers::{estimator, funnel, sweep};

/// An event that carries a scored cost.
pub trait HasObjective {
    /// Returns the cost for this event.
    fn objective(&self) -> f64;
}

/// An event that carries a finished position estimate.
pub trait HasEstimate {
    /// Returns the estimate for this event.
    ///
    /// Returns `f64::NAN` when the event represents a failed repetition
    /// and no estimate is available.
    fn estimate(&self) -> f64;
}

/// An action type that can halt a search early.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can cancel a run between repetitions.
pub trait CanCancel {
    /// Returns the action that cancels the run.
    fn cancel() -> Self;
}

// --- HasObjective for funnel::Event ---

impl HasObjective for funnel::Event {
    fn objective(&self) -> f64 {
        match self {
            funnel::Event::Evaluated { candidate, .. } => candidate.cost,
            funnel::Event::StageCompleted { best, .. } => best.cost,
        }
    }
}

// --- HasEstimate impls ---

impl HasEstimate for estimator::Event {
    fn estimate(&self) -> f64 {
        match self {
            estimator::Event::RepetitionCompleted { estimate, .. } => *estimate,
            estimator::Event::RepetitionFailed { .. } => f64::NAN,
        }
    }
}

impl HasEstimate for sweep::Event {
    fn estimate(&self) -> f64 {
        match self {
            sweep::Event::RepetitionCompleted { estimate, .. } => *estimate,
            sweep::Event::RepetitionFailed { .. }
            | sweep::Event::PointCountCompleted { .. } => f64::NAN,
        }
    }
}

// --- CanStopEarly impl ---

impl CanStopEarly for funnel::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- CanCancel impls ---

impl CanCancel for estimator::Action {
    fn cancel() -> Self {
        Self::Cancel
    }
}

impl CanCancel for sweep::Action {
    fn cancel() -> Self {
        Self::Cancel
    }
}
