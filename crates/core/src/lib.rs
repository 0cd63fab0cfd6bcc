//! Core types for the placeline simulation.
//!
//! This crate defines the shared building blocks that solvers, observers,
//! and reporting build on:
//!
//! - [`Segment`] — the closed 1-D interval under study
//! - [`PointSet`] — a non-empty set of points sampled within a segment
//! - [`UniformSource`] — a capability providing uniform draws in `[0, 1)`
//! - [`traversal_distance`] — the cost of visiting every point from a
//!   starting position
//! - [`Observer`] — receives solver events and optionally returns control
//!   actions

mod cost;
mod observe;
mod points;
mod sample;
mod segment;

pub use cost::traversal_distance;
pub use observe::Observer;
pub use points::{PointSet, PointSetError};
pub use sample::{RandomSource, SampleError, UniformSource, sample_points};
pub use segment::{Segment, SegmentError};
