//! Properties of the traversal cost model.

use approx::assert_relative_eq;

use integration_tests::canonical_segment;
use placeline_core::{PointSet, traversal_distance};

#[test]
fn cost_never_drops_below_the_point_span() {
    let segment = canonical_segment();
    let points = PointSet::new(vec![0.25, 0.9, 1.6], &segment).unwrap();

    for start in [0.0, 0.25, 0.9, 1.0, 1.6, 2.0] {
        assert!(traversal_distance(&points, start) >= points.span());
    }
}

#[test]
fn interior_points_do_not_change_the_cost() {
    let segment = canonical_segment();
    let sparse = PointSet::new(vec![0.5, 1.5], &segment).unwrap();
    let dense = PointSet::new(vec![0.5, 0.7, 1.1, 1.3, 1.5], &segment).unwrap();

    for start in [0.0, 0.6, 1.0, 1.9] {
        assert_relative_eq!(
            traversal_distance(&sparse, start),
            traversal_distance(&dense, start)
        );
    }
}

#[test]
fn single_point_cost_is_the_distance_to_it() {
    let segment = canonical_segment();
    let points = PointSet::new(vec![1.3], &segment).unwrap();

    assert_relative_eq!(traversal_distance(&points, 0.2), 1.1);
    assert_relative_eq!(traversal_distance(&points, 1.3), 0.0);
    assert_relative_eq!(traversal_distance(&points, 2.0), 0.7);
}
