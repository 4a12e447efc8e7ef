//! Exhaustive optimum over every split and every cyclic order.
//!
//! Only usable for tiny instances: the work grows factorially.

use duotour_core::{DistanceOracle, NodeId};

/// Minimum total length of two tours with `a_len` nodes in tour A.
///
/// # Panics
///
/// Panics if either tour would have fewer than two nodes or the instance
/// has more than ten nodes.
pub fn optimal_length<D: DistanceOracle + ?Sized>(oracle: &D, a_len: usize) -> i64 {
    let n = oracle.node_count();
    assert!(a_len >= 2 && n - a_len >= 2, "both tours need two nodes");
    assert!(n <= 10, "brute force is limited to ten nodes");

    let mut best = i64::MAX;
    for mask in 0u32..(1 << n) {
        if mask.count_ones() as usize != a_len {
            continue;
        }
        let (a, b): (Vec<NodeId>, Vec<NodeId>) = (0..n).partition(|&i| mask & (1 << i) != 0);
        best = best.min(best_cycle(oracle, &a) + best_cycle(oracle, &b));
    }
    best
}

/// Shortest cycle through `nodes`, with the first node fixed.
fn best_cycle<D: DistanceOracle + ?Sized>(oracle: &D, nodes: &[NodeId]) -> i64 {
    let mut rest = nodes[1..].to_vec();
    let mut best = i64::MAX;
    permute(&mut rest, 0, &mut |perm| {
        let mut length = 0;
        let mut prev = nodes[0];
        for &node in perm {
            length += oracle.distance(prev, node);
            prev = node;
        }
        length += oracle.distance(prev, nodes[0]);
        best = best.min(length);
    });
    best
}

fn permute(items: &mut [NodeId], k: usize, visit: &mut impl FnMut(&[NodeId])) {
    if k == items.len() {
        visit(items);
        return;
    }
    for i in k..items.len() {
        items.swap(k, i);
        permute(items, k + 1, visit);
        items.swap(k, i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossed;

    #[test]
    fn test_crossed_optimum() {
        assert_eq!(optimal_length(&crossed::matrix(), 3), crossed::OPTIMAL_LENGTH);
    }

    #[test]
    fn test_optimal_tours_reach_optimum() {
        let matrix = crossed::matrix();
        assert_eq!(
            crossed::optimal_tours().total_length(&matrix),
            crossed::OPTIMAL_LENGTH
        );
    }
}
