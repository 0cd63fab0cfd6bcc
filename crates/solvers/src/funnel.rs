//! Staged resolution search for the optimal starting position.
//!
//! # Algorithm
//!
//! The funnel search estimates the starting position that minimizes the
//! expected traversal cost on a segment. It walks a grid of candidate
//! positions, scores each candidate by Monte Carlo averaging
//! ([`mean_traversal`](crate::trial::mean_traversal)), then narrows the
//! grid around the winner and divides the step by 10. One stage per
//! significant figure: after `s` stages the winning position is resolved
//! to `10^-s`.
//!
//! Candidate positions are generated by index scaling (`left + i * step`),
//! never by repeated addition, so the upper boundary candidate is not lost
//! to floating-point accumulation.
//!
//! # Tie Break
//!
//! Within a stage the minimum-cost candidate wins, and ties go to the
//! leftmost candidate. The cost landscape is frequently symmetric for
//! small point counts, so this rule is what makes runs reproducible.
//!
//! # Bound Clamping
//!
//! The historical bound update clamps both next-stage bounds only against
//! the segment's upper limit, never its lower one, so a stage may test
//! positions below `segment.start()`. [`ClampPolicy::UpperOnly`] preserves
//! that behavior exactly and is the default; [`ClampPolicy::Symmetric`]
//! additionally floors both bounds at `segment.start()`.
//!
//! # Observer Events
//!
//! The search emits one [`Event::Evaluated`] per scored candidate and one
//! [`Event::StageCompleted`] per stage. Observers can return
//! [`Action::StopEarly`] to halt and receive the best candidate found so
//! far.

mod action;
mod candidate;
mod config;
mod error;
mod event;
mod grid;
mod search;
mod solution;


pub use action::Action;
pub use candidate::Candidate;
pub use config::{ClampPolicy, Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use placeline_core::{Observer, Segment, UniformSource};

/// Runs the funnel search for the minimal-cost starting position.
///
/// The search covers `[origin, segment.end()]`, where the origin defaults
/// to `segment.start()` (see [`Config::with_origin`]). The observer
/// receives an [`Event`] per evaluation and per completed stage; see the
/// [module docs](self).
///
/// # Errors
///
/// Returns an error if the origin lies outside the segment, a refinement
/// stage produces no candidates, or trial sampling fails.
pub fn search<S, Obs>(
    segment: &Segment,
    point_count: usize,
    config: &Config,
    source: &mut S,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    S: UniformSource,
    Obs: Observer<Event, Action>,
{
    search::search(segment, point_count, config, source, &mut observer)
}

/// Runs the funnel search without observer support.
///
/// This is a convenience wrapper around [`search`] that uses a no-op
/// observer.
///
/// # Errors
///
/// Returns an error if the origin lies outside the segment, a refinement
/// stage produces no candidates, or trial sampling fails.
pub fn search_unobserved<S>(
    segment: &Segment,
    point_count: usize,
    config: &Config,
    source: &mut S,
) -> Result<Solution, Error>
where
    S: UniformSource,
{
    search(segment, point_count, config, source, ())
}
