//! Solvers for the placeline simulation.
//!
//! The layers build strictly upward, each depending only on the one below:
//!
//! - [`trial`] — averages traversal cost over repeated fresh samples at a
//!   fixed starting position
//! - [`funnel`] — the staged resolution search that narrows in on the
//!   starting position with minimal expected cost
//! - [`estimator`] — repeats the funnel search to build a distribution of
//!   estimates for one point count
//! - [`sweep`] — runs the estimator across a range of point counts
//!
//! Every layer draws its randomness through an explicit
//! [`UniformSource`](placeline_core::UniformSource) and reports progress
//! through [`Observer`](placeline_core::Observer) events, so runs are
//! reproducible under a fixed seed and free of global state.

pub mod estimator;
pub mod funnel;
pub mod sweep;
pub mod trial;
