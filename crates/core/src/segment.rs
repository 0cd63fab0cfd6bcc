use thiserror::Error;

/// The closed interval `[start, end]` on which points are placed.
///
/// A segment is immutable once constructed and always satisfies
/// `start <= end` with both bounds finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: f64,
    end: f64,
}

/// Errors that can occur when constructing a [`Segment`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SegmentError {
    #[error("segment bounds are reversed: start {start} > end {end}")]
    Reversed { start: f64, end: f64 },

    #[error("segment bounds must be finite, got [{start}, {end}]")]
    NonFinite { start: f64, end: f64 },
}

impl Segment {
    /// Creates a segment from validated bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is non-finite or `start > end`.
    pub fn new(start: f64, end: f64) -> Result<Self, SegmentError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(SegmentError::NonFinite { start, end });
        }
        if start > end {
            return Err(SegmentError::Reversed { start, end });
        }

        Ok(Self { start, end })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns the width of the segment.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Returns the midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.start + self.end)
    }

    /// Returns `true` if `x` lies within the segment, bounds included.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.start <= x && x <= self.end
    }
}
