//! Downstream collaborators for placeline sweep results.
//!
//! Everything here is a pure transform over a finished
//! [`SweepResult`](placeline_solvers::sweep::SweepResult); nothing feeds
//! back into the solvers.
//!
//! - [`stats`] — per-point-count summaries (mean, standard deviation) and
//!   the distance-from-center convenience transform
//! - [`json`] — a JSON interchange format for saving and reloading runs

pub mod json;
pub mod stats;

pub use json::{RunMeta, RunRecord};
pub use stats::Summary;
