//! Move generation.
//!
//! The full enumeration is the only O(n²) step of the cached search. The
//! per-anchor variants are O(n) and are what the incremental updater uses
//! after each applied move.
//!
//! Only strictly improving moves are emitted. Pairs of adjacent nodes always
//! have a delta of zero and are therefore never emitted.

use duotour_core::{DistanceOracle, DuotourError, NodeId, Result, TourId, TourPair};

use super::r#move::{EdgeExchangeMove, InterSwapMove, TourMove};

/// Delta of replacing `(n1, sn1)` and `(n2, sn2)` with `(n1, n2)` and
/// `(sn1, sn2)`.
#[inline]
pub fn edge_delta<D: DistanceOracle + ?Sized>(
    oracle: &D,
    n1: NodeId,
    sn1: NodeId,
    n2: NodeId,
    sn2: NodeId,
) -> i64 {
    oracle.distance(n1, n2) + oracle.distance(sn1, sn2)
        - oracle.distance(n1, sn1)
        - oracle.distance(n2, sn2)
}

/// Delta of swapping `n1` (between `pn1` and `sn1`) with `n2` (between
/// `pn2` and `sn2`).
#[inline]
pub fn swap_delta<D: DistanceOracle + ?Sized>(
    oracle: &D,
    [pn1, n1, sn1]: [NodeId; 3],
    [pn2, n2, sn2]: [NodeId; 3],
) -> i64 {
    let before = oracle.distance(pn1, n1)
        + oracle.distance(n1, sn1)
        + oracle.distance(pn2, n2)
        + oracle.distance(n2, sn2);
    let after = oracle.distance(pn1, n2)
        + oracle.distance(n2, sn1)
        + oracle.distance(pn2, n1)
        + oracle.distance(n1, sn2);
    after - before
}

/// Number of candidate pairs a full enumeration evaluates.
pub fn neighbourhood_size(tours: &TourPair) -> usize {
    let a = tours.len(TourId::A);
    let b = tours.len(TourId::B);
    a * b + a * (a - 1) / 2 + b * (b - 1) / 2
}

/// Builds candidate moves against the current tours.
///
/// # Example
///
/// ```
/// use duotour_core::{DistanceMatrix, Point, TourPair};
/// use duotour_solver::heuristic::MoveGenerator;
///
/// let matrix = DistanceMatrix::from_points(&[
///     Point::new(0, 0),
///     Point::new(0, 1),
///     Point::new(1, 1),
///     Point::new(10, 10),
///     Point::new(10, 11),
///     Point::new(11, 11),
/// ]);
/// let tours = TourPair::new(vec![0, 1, 3], vec![2, 4, 5]).unwrap();
///
/// let moves = MoveGenerator::new(&matrix).enumerate(&tours);
/// assert!(!moves.is_empty());
/// assert!(moves.windows(2).all(|w| w[0].delta() <= w[1].delta()));
/// assert!(moves.iter().all(|m| m.delta() < 0));
/// ```
#[derive(Debug)]
pub struct MoveGenerator<'a, D: DistanceOracle + ?Sized> {
    oracle: &'a D,
    mirrors: bool,
}

impl<'a, D: DistanceOracle + ?Sized> MoveGenerator<'a, D> {
    /// Creates a generator that emits every edge exchange together with its
    /// mirror.
    pub fn new(oracle: &'a D) -> Self {
        Self {
            oracle,
            mirrors: true,
        }
    }

    /// Enables or disables mirror copies of edge exchanges.
    pub fn with_mirrors(mut self, mirrors: bool) -> Self {
        self.mirrors = mirrors;
        self
    }

    pub fn oracle(&self) -> &'a D {
        self.oracle
    }

    /// Edge exchange of the nodes at positions `p1` and `p2` of `tour`.
    pub fn edge_move(
        &self,
        tours: &TourPair,
        tour: TourId,
        p1: usize,
        p2: usize,
    ) -> EdgeExchangeMove {
        let n1 = tours.node_at(tour, p1);
        let n2 = tours.node_at(tour, p2);
        let sn1 = tours.successor_at(tour, p1);
        let sn2 = tours.successor_at(tour, p2);
        let delta = edge_delta(self.oracle, n1, sn1, n2, sn2);
        EdgeExchangeMove::new(tour, n1, n2, sn1, sn2, delta)
    }

    /// Swap of the node at `pos_a` in tour A with the node at `pos_b` in
    /// tour B.
    pub fn swap_move(&self, tours: &TourPair, pos_a: usize, pos_b: usize) -> InterSwapMove {
        let a = [
            tours.predecessor_at(TourId::A, pos_a),
            tours.node_at(TourId::A, pos_a),
            tours.successor_at(TourId::A, pos_a),
        ];
        let b = [
            tours.predecessor_at(TourId::B, pos_b),
            tours.node_at(TourId::B, pos_b),
            tours.successor_at(TourId::B, pos_b),
        ];
        let delta = swap_delta(self.oracle, a, b);
        InterSwapMove::new(a[1], b[1], a[0], a[2], b[0], b[2], delta)
    }

    /// Every improving move, swaps first, then edge exchanges of tour A, then
    /// of tour B, stably sorted by delta.
    pub fn enumerate(&self, tours: &TourPair) -> Vec<TourMove> {
        let mut moves = Vec::new();
        self.push_all_swaps(tours, &mut moves);
        for tour in TourId::ALL {
            self.push_all_edges(tours, tour, &mut moves);
        }
        moves.sort_by_key(TourMove::delta);
        moves
    }

    /// Pushes every improving swap.
    pub fn push_all_swaps(&self, tours: &TourPair, out: &mut Vec<TourMove>) {
        for pos_a in 0..tours.len(TourId::A) {
            for pos_b in 0..tours.len(TourId::B) {
                self.push_swap(tours, pos_a, pos_b, out);
            }
        }
    }

    /// Pushes every improving edge exchange within `tour`.
    pub fn push_all_edges(&self, tours: &TourPair, tour: TourId, out: &mut Vec<TourMove>) {
        let len = tours.len(tour);
        for p1 in 0..len {
            for p2 in (p1 + 1)..len {
                self.push_edge(tours, tour, p1, p2, out);
            }
        }
    }

    /// Pushes every improving edge exchange that pairs `anchor` with another
    /// node of its tour.
    pub fn push_edges_from(
        &self,
        tours: &TourPair,
        anchor: NodeId,
        out: &mut Vec<TourMove>,
    ) -> Result<()> {
        let slot = tours.slot(anchor).ok_or_else(|| {
            DuotourError::InvariantViolation(format!("anchor {} is in neither tour", anchor))
        })?;
        for p2 in 0..tours.len(slot.tour) {
            if p2 != slot.position {
                self.push_edge(tours, slot.tour, slot.position, p2, out);
            }
        }
        Ok(())
    }

    /// Pushes every improving swap of `node` with a node of the opposite
    /// tour.
    pub fn push_swaps_from(
        &self,
        tours: &TourPair,
        node: NodeId,
        out: &mut Vec<TourMove>,
    ) -> Result<()> {
        let slot = tours.slot(node).ok_or_else(|| {
            DuotourError::InvariantViolation(format!("node {} is in neither tour", node))
        })?;
        for other in 0..tours.len(slot.tour.other()) {
            match slot.tour {
                TourId::A => self.push_swap(tours, slot.position, other, out),
                TourId::B => self.push_swap(tours, other, slot.position, out),
            }
        }
        Ok(())
    }

    fn push_edge(
        &self,
        tours: &TourPair,
        tour: TourId,
        p1: usize,
        p2: usize,
        out: &mut Vec<TourMove>,
    ) {
        let m = self.edge_move(tours, tour, p1, p2);
        if m.delta() < 0 {
            out.push(m.into());
            if self.mirrors {
                out.push(m.mirror().into());
            }
        }
    }

    fn push_swap(&self, tours: &TourPair, pos_a: usize, pos_b: usize, out: &mut Vec<TourMove>) {
        let m = self.swap_move(tours, pos_a, pos_b);
        if m.delta() < 0 {
            out.push(m.into());
        }
    }
}
