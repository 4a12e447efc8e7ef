//! Seeded random instances.

use duotour_core::{DistanceMatrix, NodeId, Point, TourPair};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Coordinates are drawn from `0..COORD_RANGE` on both axes.
pub const COORD_RANGE: i64 = 1000;

/// Returns `n` points drawn uniformly with a fixed seed.
pub fn random_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point::new(
                rng.random_range(0..COORD_RANGE),
                rng.random_range(0..COORD_RANGE),
            )
        })
        .collect()
}

/// Returns a random instance and a random starting pair with
/// `n / 2` nodes in tour A.
///
/// # Panics
///
/// Panics if `n < 4`.
pub fn random_instance(n: usize, seed: u64) -> (DistanceMatrix, TourPair) {
    assert!(n >= 4, "two tours need at least four nodes");
    let matrix = DistanceMatrix::from_points(&random_points(n, seed));

    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
    let mut order: Vec<NodeId> = (0..n).collect();
    order.shuffle(&mut rng);
    let b = order.split_off(n / 2);
    let tours = TourPair::new(order, b).expect("shuffled split is a valid partition");

    (matrix, tours)
}
