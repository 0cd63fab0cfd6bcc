/// Relative nudge applied when counting grid positions.
///
/// `span / step` lands just below an integer when the boundary is an exact
/// multiple of the step (e.g. `2.0 / 0.1` is `19.999…`), which would drop
/// the final candidate. The nudge restores it without admitting positions
/// a full step beyond the boundary.
const BOUNDARY_NUDGE: f64 = 1e-9;

/// The candidate grid for one refinement stage.
///
/// Positions form a strictly increasing sequence `left + i * step` for
/// `i = 0..count`, covering `left..=right`. Index scaling, rather than
/// repeated addition, keeps the positions free of accumulated rounding
/// drift.
#[derive(Debug, Clone, Copy)]
pub(super) struct StageGrid {
    left: f64,
    step: f64,
    count: usize,
}

impl StageGrid {
    /// Creates the grid walking `left..=right` in increments of `step`.
    ///
    /// An inverted range (`left > right`) yields an empty grid.
    pub(super) fn new(left: f64, right: f64, step: f64) -> Self {
        let span = right - left;
        let count = if span < 0.0 {
            0
        } else {
            (span / step + BOUNDARY_NUDGE).floor() as usize + 1
        };

        Self { left, step, count }
    }

    pub(super) fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the candidate positions in ascending order.
    pub(super) fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(|i| self.left + i as f64 * self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn includes_both_boundaries() {
        let grid = StageGrid::new(0.0, 2.0, 0.1);

        let positions: Vec<f64> = grid.positions().collect();

        assert_eq!(positions.len(), 21);
        assert_relative_eq!(positions[0], 0.0);
        assert_relative_eq!(positions[20], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn upper_boundary_survives_rounding() {
        // 2.0 / 0.1 computes as 19.999…; without the nudge the final
        // candidate at 2.0 would be dropped.
        let grid = StageGrid::new(0.0, 2.0, 0.1);

        let last = grid.positions().last().unwrap();

        assert!(last >= 2.0 - 1e-12, "boundary candidate lost: {last}");
    }

    #[test]
    fn positions_strictly_increase() {
        let grid = StageGrid::new(0.3, 1.7, 0.01);

        let positions: Vec<f64> = grid.positions().collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn partial_final_step_is_excluded() {
        // 0.0..=0.25 in steps of 0.1: candidates 0.0, 0.1, 0.2 only.
        let grid = StageGrid::new(0.0, 0.25, 0.1);

        let positions: Vec<f64> = grid.positions().collect();

        assert_eq!(positions.len(), 3);
        assert_relative_eq!(positions[2], 0.2);
    }

    #[test]
    fn degenerate_range_has_single_candidate() {
        let grid = StageGrid::new(1.0, 1.0, 0.1);

        assert_eq!(grid.positions().count(), 1);
        assert_relative_eq!(grid.positions().next().unwrap(), 1.0);
    }

    #[test]
    fn inverted_range_is_empty() {
        let grid = StageGrid::new(1.0, 0.5, 0.1);

        assert!(grid.is_empty());
        assert_eq!(grid.positions().count(), 0);
    }

    #[test]
    fn negative_left_bound_is_walked() {
        // The historical clamp can push the left bound below the segment.
        let grid = StageGrid::new(-0.1, 0.1, 0.01);

        let positions: Vec<f64> = grid.positions().collect();

        assert_eq!(positions.len(), 21);
        assert_relative_eq!(positions[0], -0.1);
        assert_relative_eq!(positions[20], 0.1, epsilon = 1e-12);
    }
}
