//! InterSwapMove - exchanges one node between the two tours.

use duotour_core::{DuotourError, NodeId, Result, TourId, TourPair};

use super::Applicability;

/// Moves `n1` from tour A into the slot of `n2` in tour B and vice versa.
///
/// The neighbours of both nodes are recorded at generation time. The delta
/// only holds while they are unchanged, so classification demands an exact
/// match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterSwapMove {
    n1: NodeId,
    n2: NodeId,
    pn1: NodeId,
    sn1: NodeId,
    pn2: NodeId,
    sn2: NodeId,
    delta: i64,
}

impl InterSwapMove {
    /// Creates a swap of `n1` (tour A) and `n2` (tour B).
    pub fn new(
        n1: NodeId,
        n2: NodeId,
        pn1: NodeId,
        sn1: NodeId,
        pn2: NodeId,
        sn2: NodeId,
        delta: i64,
    ) -> Self {
        Self {
            n1,
            n2,
            pn1,
            sn1,
            pn2,
            sn2,
            delta,
        }
    }

    /// Node taken out of tour A.
    #[inline]
    pub fn n1(&self) -> NodeId {
        self.n1
    }

    /// Node taken out of tour B.
    #[inline]
    pub fn n2(&self) -> NodeId {
        self.n2
    }

    #[inline]
    pub fn pn1(&self) -> NodeId {
        self.pn1
    }

    #[inline]
    pub fn sn1(&self) -> NodeId {
        self.sn1
    }

    #[inline]
    pub fn pn2(&self) -> NodeId {
        self.pn2
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

    /// The two swapped nodes and their four former neighbours.
    pub fn affected(&self) -> [NodeId; 6] {
        [self.n1, self.n2, self.pn1, self.sn1, self.pn2, self.sn2]
    }

    pub fn classify(&self, tours: &TourPair) -> Applicability {
        let (Ok(p1), Ok(p2)) = (
            tours.position(TourId::A, self.n1),
            tours.position(TourId::B, self.n2),
        ) else {
            return Applicability::NotApplicable;
        };

        if tours.predecessor_at(TourId::A, p1) == self.pn1
            && tours.successor_at(TourId::A, p1) == self.sn1
            && tours.predecessor_at(TourId::B, p2) == self.pn2
            && tours.successor_at(TourId::B, p2) == self.sn2
        {
            Applicability::Applicable
        } else {
            Applicability::NotApplicable
        }
    }

    pub fn execute(&self, tours: &mut TourPair) -> Result<()> {
        let p1 = tours.position(TourId::A, self.n1)?;
        let p2 = tours.position(TourId::B, self.n2)?;
        if self.classify(tours) != Applicability::Applicable {
            return Err(DuotourError::InvariantViolation(format!(
                "swap of {} and {} no longer matches its recorded neighbours",
                self.n1, self.n2
            )));
        }
        tours.exchange(p1, p2);
        Ok(())
    }
}
