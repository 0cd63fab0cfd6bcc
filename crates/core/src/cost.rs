use crate::PointSet;

/// Returns the traversal distance for visiting every point from a start.
///
/// Because the points are colinear, visiting both extremes visits every
/// point between them. The best single pass moves to whichever extreme is
/// nearer, then sweeps to the other:
///
/// `min(|s - max|, |s - min|) + (max - min)`
///
/// Only the extremes matter; interior points never change the result.
/// The cost is always at least the span of the point set.
#[must_use]
pub fn traversal_distance(points: &PointSet, start_position: f64) -> f64 {
    let lo = points.min();
    let hi = points.max();

    let to_lo = (start_position - lo).abs();
    let to_hi = (start_position - hi).abs();

    to_lo.min(to_hi) + (hi - lo)
}
