//! EdgeExchangeMove - 2-opt within a single tour.
//!
//! Removes the edges `(n1, sn1)` and `(n2, sn2)` and adds `(n1, n2)` and
//! `(sn1, sn2)` by reversing the tour between them.

use duotour_core::{DuotourError, NodeId, Result, TourId, TourPair};

use super::Applicability;

/// A 2-opt move recorded against the successors its nodes had when it was
/// generated.
///
/// # Example
///
/// ```
/// use duotour_core::{TourId, TourPair};
/// use duotour_solver::heuristic::r#move::{Applicability, EdgeExchangeMove};
///
/// let mut tours = TourPair::new(vec![0, 1, 2, 3, 4, 5], vec![6, 7]).unwrap();
///
/// // Replace (0,1) and (3,4) with (0,3) and (1,4)
/// let m = EdgeExchangeMove::new(TourId::A, 0, 3, 1, 4, -7);
/// assert_eq!(m.classify(&tours), Applicability::Applicable);
///
/// m.execute(&mut tours).unwrap();
/// assert_eq!(tours.tour(TourId::A), &[0, 3, 2, 1, 4, 5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeExchangeMove {
    tour: TourId,
    n1: NodeId,
    n2: NodeId,
    sn1: NodeId,
    sn2: NodeId,
    delta: i64,
}

impl EdgeExchangeMove {
    pub fn new(tour: TourId, n1: NodeId, n2: NodeId, sn1: NodeId, sn2: NodeId, delta: i64) -> Self {
        Self {
            tour,
            n1,
            n2,
            sn1,
            sn2,
            delta,
        }
    }

    /// The same exchange seen from the reversed orientation of the tour.
    ///
    /// Applicable exactly when the tour runs `sn1 -> n1` and `sn2 -> n2`.
    pub fn mirror(&self) -> Self {
        Self {
            tour: self.tour,
            n1: self.sn1,
            n2: self.sn2,
            sn1: self.n1,
            sn2: self.n2,
            delta: self.delta,
        }
    }

    #[inline]
    pub fn tour(&self) -> TourId {
        self.tour
    }

    #[inline]
    pub fn n1(&self) -> NodeId {
        self.n1
    }

    #[inline]
    pub fn n2(&self) -> NodeId {
        self.n2
    }

    #[inline]
    pub fn sn1(&self) -> NodeId {
        self.sn1
    }

    #[inline]
    pub fn sn2(&self) -> NodeId {
        self.sn2
    }

    #[inline]
    pub fn delta(&self) -> i64 {
        self.delta
    }

    #[inline]
    pub fn set_delta(&mut self, delta: i64) {
        self.delta = delta;
    }

    /// Nodes whose incident edges change when this move is applied.
    pub fn endpoints(&self) -> [NodeId; 4] {
        [self.n1, self.n2, self.sn1, self.sn2]
    }

    /// Compares the recorded successors with the live tour.
    ///
    /// Both edges forward is [`Applicable`](Applicability::Applicable). One
    /// edge forward and the other reversed is
    /// [`MayBeApplicable`](Applicability::MayBeApplicable). Anything else,
    /// including either node having left the tour, is
    /// [`NotApplicable`](Applicability::NotApplicable).
    pub fn classify(&self, tours: &TourPair) -> Applicability {
        let (Ok(p1), Ok(p2)) = (
            tours.position(self.tour, self.n1),
            tours.position(self.tour, self.n2),
        ) else {
            return Applicability::NotApplicable;
        };

        let forward1 = tours.successor_at(self.tour, p1) == self.sn1;
        let forward2 = tours.successor_at(self.tour, p2) == self.sn2;
        if forward1 && forward2 {
            return Applicability::Applicable;
        }

        let intact1 = forward1 || tours.predecessor_at(self.tour, p1) == self.sn1;
        let intact2 = forward2 || tours.predecessor_at(self.tour, p2) == self.sn2;
        if (forward1 || forward2) && intact1 && intact2 {
            Applicability::MayBeApplicable
        } else {
            Applicability::NotApplicable
        }
    }

    /// Reverses the cyclic range from `sn1` to `n2`.
    pub fn execute(&self, tours: &mut TourPair) -> Result<()> {
        if self.n1 == self.n2 {
            return Err(DuotourError::DegenerateMove(self.n1));
        }
        let p1 = tours.position(self.tour, self.n1)?;
        let p2 = tours.position(self.tour, self.n2)?;
        if self.classify(tours) != Applicability::Applicable {
            return Err(DuotourError::InvariantViolation(format!(
                "edge exchange ({}, {}) in tour {} no longer matches its recorded successors",
                self.n1, self.n2, self.tour
            )));
        }

        let len = tours.len(self.tour);
        tours.reverse_segment(self.tour, (p1 + 1) % len, p2);
        Ok(())
    }
}
