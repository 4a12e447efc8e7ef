//! From-scratch checks on a [`TourPair`].

use std::collections::BTreeSet;

use duotour_core::{NodeId, TourId, TourPair};

/// Panics unless the tours partition `0..n` with a consistent index.
pub fn assert_valid_partition(tours: &TourPair) {
    let mut all: Vec<NodeId> = tours
        .tour(TourId::A)
        .iter()
        .chain(tours.tour(TourId::B))
        .copied()
        .collect();
    all.sort_unstable();
    let expected: Vec<NodeId> = (0..tours.node_count()).collect();
    assert_eq!(all, expected, "tours do not partition 0..{}", tours.node_count());

    if let Err(e) = tours.validate() {
        panic!("tour index is inconsistent: {}", e);
    }
}

/// Undirected edges of `tour` as ordered pairs `(min, max)`.
pub fn undirected_edges(tours: &TourPair, tour: TourId) -> BTreeSet<(NodeId, NodeId)> {
    let nodes = tours.tour(tour);
    (0..nodes.len())
        .map(|i| {
            let a = nodes[i];
            let b = nodes[(i + 1) % nodes.len()];
            (a.min(b), a.max(b))
        })
        .collect()
}

/// Sorted node set of `tour`.
pub fn node_set(tours: &TourPair, tour: TourId) -> BTreeSet<NodeId> {
    tours.tour(tour).iter().copied().collect()
}
