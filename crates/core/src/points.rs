use thiserror::Error;

use crate::Segment;

/// A non-empty ordered set of points within a segment.
///
/// The length invariant (at least one point, every point in bounds) is
/// enforced at construction, so consumers can take the extremes without
/// checking for emptiness. A point set lives for a single cost evaluation
/// and is discarded afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<f64>,
}

/// Errors that can occur when constructing a [`PointSet`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PointSetError {
    #[error("point set must contain at least one point")]
    Empty,

    #[error("point {point} is outside the segment [{start}, {end}]")]
    OutOfBounds { point: f64, start: f64, end: f64 },
}

impl PointSet {
    /// Creates a point set, validating that it is non-empty and in bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if `points` is empty or any point lies outside the
    /// segment.
    pub fn new(points: Vec<f64>, segment: &Segment) -> Result<Self, PointSetError> {
        if points.is_empty() {
            return Err(PointSetError::Empty);
        }
        if let Some(&point) = points.iter().find(|p| !segment.contains(**p)) {
            return Err(PointSetError::OutOfBounds {
                point,
                start: segment.start(),
                end: segment.end(),
            });
        }

        Ok(Self { points })
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; the constructor rejects empty sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the smallest point.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.points.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Returns the largest point.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.points
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Returns the distance between the extreme points.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max() - self.min()
    }

    /// Returns the points in sampling order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.points
    }
}
