//! Two-tour store.
//!
//! A [`TourPair`] owns two array-backed cyclic sequences that together
//! partition the node universe `0..n`, plus a node → [`Slot`] index kept
//! consistent by every mutation. Lookups of a node's position, successor
//! and predecessor are O(1).

use std::fmt;

use crate::distance::DistanceOracle;
use crate::error::{DuotourError, Result};

/// Node identifier in `0..n`.
pub type NodeId = usize;

/// Minimum number of nodes a tour needs to form a cycle.
pub const MIN_TOUR_LEN: usize = 2;

/// One of the two tours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TourId {
    A,
    B,
}

impl TourId {
    /// Both tours, in index order.
    pub const ALL: [TourId; 2] = [TourId::A, TourId::B];

    /// Returns the opposite tour.
    #[inline]
    pub fn other(self) -> TourId {
        match self {
            TourId::A => TourId::B,
            TourId::B => TourId::A,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            TourId::A => 0,
            TourId::B => 1,
        }
    }
}

impl fmt::Display for TourId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TourId::A => f.write_str("A"),
            TourId::B => f.write_str("B"),
        }
    }
}

/// Where a node currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// The tour holding the node.
    pub tour: TourId,
    /// The index of the node within that tour.
    pub position: usize,
}

/// Two disjoint cyclic tours over `0..n`.
///
/// # Example
///
/// ```
/// use duotour_core::{TourId, TourPair};
///
/// let mut tours = TourPair::new(vec![0, 1, 2, 3], vec![4, 5]).unwrap();
///
/// assert_eq!(tours.successor(TourId::A, 3).unwrap(), 0);
/// assert_eq!(tours.predecessor(TourId::B, 4).unwrap(), 5);
///
/// // Swap node 1 (position 1 in A) with node 5 (position 1 in B)
/// tours.exchange(1, 1);
/// assert_eq!(tours.tour(TourId::A), &[0, 5, 2, 3]);
/// assert_eq!(tours.tour(TourId::B), &[4, 1]);
/// assert!(tours.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourPair {
    tours: [Vec<NodeId>; 2],
    slots: Vec<Slot>,
}

impl TourPair {
    /// Creates a tour pair, checking that `a` and `b` partition `0..n`.
    ///
    /// # Errors
    ///
    /// Returns [`DuotourError::TourTooShort`] if either tour has fewer than
    /// [`MIN_TOUR_LEN`] nodes, or [`DuotourError::Partition`] if a node is
    /// out of range or repeated.
    pub fn new(a: Vec<NodeId>, b: Vec<NodeId>) -> Result<Self> {
        for (tour, nodes) in TourId::ALL.into_iter().zip([&a, &b]) {
            if nodes.len() < MIN_TOUR_LEN {
                return Err(DuotourError::TourTooShort {
                    tour,
                    len: nodes.len(),
                    min: MIN_TOUR_LEN,
                });
            }
        }

        let n = a.len() + b.len();
        let mut slots: Vec<Option<Slot>> = vec![None; n];
        for (tour, nodes) in TourId::ALL.into_iter().zip([&a, &b]) {
            for (position, &node) in nodes.iter().enumerate() {
                let entry = slots.get_mut(node).ok_or_else(|| {
                    DuotourError::Partition(format!("node {} outside 0..{}", node, n))
                })?;
                if entry.is_some() {
                    return Err(DuotourError::Partition(format!(
                        "node {} appears more than once",
                        node
                    )));
                }
                *entry = Some(Slot { tour, position });
            }
        }

        // n distinct nodes below n cover the whole range
        let slots = slots.into_iter().flatten().collect();
        Ok(Self { tours: [a, b], slots })
    }

    #[inline]
    pub fn tour(&self, tour: TourId) -> &[NodeId] {
        &self.tours[tour.index()]
    }

    #[inline]
    pub fn len(&self, tour: TourId) -> usize {
        self.tours[tour.index()].len()
    }

    /// Total number of nodes across both tours.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns where `node` currently sits, or `None` if it is out of range.
    #[inline]
    pub fn slot(&self, node: NodeId) -> Option<Slot> {
        self.slots.get(node).copied()
    }

    /// Returns true if `node` is currently in `tour`.
    #[inline]
    pub fn contains(&self, tour: TourId, node: NodeId) -> bool {
        self.slot(node).is_some_and(|s| s.tour == tour)
    }

    /// Position of `node` in `tour`.
    ///
    /// # Errors
    ///
    /// Returns [`DuotourError::NodeNotFound`] if the node is in the other
    /// tour or out of range.
    #[inline]
    pub fn position(&self, tour: TourId, node: NodeId) -> Result<usize> {
        match self.slot(node) {
            Some(slot) if slot.tour == tour => Ok(slot.position),
            _ => Err(DuotourError::NodeNotFound { node, tour }),
        }
    }

    /// Node following `node` in `tour`.
    #[inline]
    pub fn successor(&self, tour: TourId, node: NodeId) -> Result<NodeId> {
        let pos = self.position(tour, node)?;
        Ok(self.successor_at(tour, pos))
    }

    /// Node preceding `node` in `tour`.
    #[inline]
    pub fn predecessor(&self, tour: TourId, node: NodeId) -> Result<NodeId> {
        let pos = self.position(tour, node)?;
        Ok(self.predecessor_at(tour, pos))
    }

    #[inline]
    pub fn node_at(&self, tour: TourId, position: usize) -> NodeId {
        self.tours[tour.index()][position]
    }

    #[inline]
    pub fn successor_at(&self, tour: TourId, position: usize) -> NodeId {
        let nodes = &self.tours[tour.index()];
        nodes[(position + 1) % nodes.len()]
    }

    #[inline]
    pub fn predecessor_at(&self, tour: TourId, position: usize) -> NodeId {
        let nodes = &self.tours[tour.index()];
        nodes[(position + nodes.len() - 1) % nodes.len()]
    }

    /// Reverses the cyclic range `from..=to` of `tour`.
    ///
    /// The range runs forward from `from` and wraps past the end. When it
    /// covers more than half the tour the complement is reversed instead,
    /// which leaves the same undirected cycle with fewer writes.
    pub fn reverse_segment(&mut self, tour: TourId, from: usize, to: usize) {
        let len = self.len(tour);
        debug_assert!(from < len && to < len);

        let seg_len = (to + len - from) % len + 1;
        let (mut i, mut j, count) = if seg_len * 2 > len {
            ((to + 1) % len, (from + len - 1) % len, len - seg_len)
        } else {
            (from, to, seg_len)
        };

        let nodes = &mut self.tours[tour.index()];
        for _ in 0..count / 2 {
            nodes.swap(i, j);
            self.slots[nodes[i]].position = i;
            self.slots[nodes[j]].position = j;
            i = (i + 1) % len;
            j = (j + len - 1) % len;
        }
    }

    /// Exchanges the node at `pos_a` in tour A with the node at `pos_b` in
    /// tour B.
    pub fn exchange(&mut self, pos_a: usize, pos_b: usize) {
        let [a, b] = &mut self.tours;
        std::mem::swap(&mut a[pos_a], &mut b[pos_b]);
        self.slots[a[pos_a]] = Slot {
            tour: TourId::A,
            position: pos_a,
        };
        self.slots[b[pos_b]] = Slot {
            tour: TourId::B,
            position: pos_b,
        };
    }

    /// Length of `tour` computed from scratch.
    pub fn tour_length<D: DistanceOracle + ?Sized>(&self, oracle: &D, tour: TourId) -> i64 {
        let nodes = self.tour(tour);
        nodes
            .iter()
            .zip(nodes.iter().cycle().skip(1))
            .map(|(&a, &b)| oracle.distance(a, b))
            .sum()
    }

    /// Sum of both tour lengths computed from scratch.
    pub fn total_length<D: DistanceOracle + ?Sized>(&self, oracle: &D) -> i64 {
        self.tour_length(oracle, TourId::A) + self.tour_length(oracle, TourId::B)
    }

    /// Re-checks the partition and the position index.
    pub fn validate(&self) -> Result<()> {
        let mut seen = vec![false; self.slots.len()];
        for tour in TourId::ALL {
            if self.len(tour) < MIN_TOUR_LEN {
                return Err(DuotourError::TourTooShort {
                    tour,
                    len: self.len(tour),
                    min: MIN_TOUR_LEN,
                });
            }
            for (position, &node) in self.tour(tour).iter().enumerate() {
                match seen.get_mut(node) {
                    Some(s) if !*s => *s = true,
                    Some(_) => {
                        return Err(DuotourError::Partition(format!(
                            "node {} appears more than once",
                            node
                        )))
                    }
                    None => {
                        return Err(DuotourError::Partition(format!(
                            "node {} outside 0..{}",
                            node,
                            self.slots.len()
                        )))
                    }
                }
                if self.slots[node] != (Slot { tour, position }) {
                    return Err(DuotourError::InvariantViolation(format!(
                        "index for node {} is {:?}, found at {}[{}]",
                        node, self.slots[node], tour, position
                    )));
                }
            }
        }
        if self.len(TourId::A) + self.len(TourId::B) != self.slots.len() {
            return Err(DuotourError::Partition(format!(
                "tours hold {} nodes, expected {}",
                self.len(TourId::A) + self.len(TourId::B),
                self.slots.len()
            )));
        }
        Ok(())
    }

    /// Consumes the pair, returning tours A and B.
    pub fn into_tours(self) -> (Vec<NodeId>, Vec<NodeId>) {
        let [a, b] = self.tours;
        (a, b)
    }
}

#[cfg(test)]
#[path = "tour_tests.rs"]
mod tests;
