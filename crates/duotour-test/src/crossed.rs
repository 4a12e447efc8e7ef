//! Two unit triangles far apart, with the starting tours crossing between
//! them.
//!
//! Nodes 0..3 sit at `(0,0) (0,1) (1,1)` and nodes 3..6 at
//! `(10,10) (10,11) (11,11)`. Each triangle has rounded length 3, so the
//! optimum is 6.

use duotour_core::{DistanceMatrix, Point, TourPair};

/// Total length of the two separate triangles.
pub const OPTIMAL_LENGTH: i64 = 6;

pub fn points() -> Vec<Point> {
    vec![
        Point::new(0, 0),
        Point::new(0, 1),
        Point::new(1, 1),
        Point::new(10, 10),
        Point::new(10, 11),
        Point::new(11, 11),
    ]
}

pub fn matrix() -> DistanceMatrix {
    DistanceMatrix::from_points(&points())
}

/// Tour A holds one far node and tour B one near node.
pub fn crossed_tours() -> TourPair {
    TourPair::new(vec![0, 1, 3], vec![2, 4, 5]).expect("crossed tours are a valid partition")
}

/// Tour A holds two far nodes and tour B two near ones. One swap reaches
/// the optimum: exchanging 0 and 5 leaves the far triangle in tour A.
pub fn flipped_crossed_tours() -> TourPair {
    TourPair::new(vec![0, 3, 4], vec![1, 5, 2]).expect("crossed tours are a valid partition")
}

/// The two triangles themselves.
pub fn optimal_tours() -> TourPair {
    TourPair::new(vec![0, 1, 2], vec![3, 4, 5]).expect("optimal tours are a valid partition")
}
