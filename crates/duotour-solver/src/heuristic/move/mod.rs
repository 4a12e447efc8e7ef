//! Move model for two-tour local search.
//!
//! A move is one elementary change to a [`TourPair`] together with the
//! change in total length it was computed to produce and the neighbour
//! state it was computed against.
//!
//! # Architecture
//!
//! The move kinds form a closed set:
//! - [`EdgeExchangeMove`] - 2-opt within one tour, by segment reversal
//! - [`InterSwapMove`] - exchanges one node of tour A with one node of tour B
//!
//! [`TourMove`] wraps them so a single cache can hold both. Each move can
//! [`classify`](TourMove::classify) itself against the live tours, which is
//! how cached moves are revalidated after other moves have been applied.

mod applicability;
mod edge_exchange;
mod inter_swap;

use duotour_core::{Result, TourPair};

pub use applicability::Applicability;
pub use edge_exchange::EdgeExchangeMove;
pub use inter_swap::InterSwapMove;

/// A cached candidate move of either kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourMove {
    EdgeExchange(EdgeExchangeMove),
    InterSwap(InterSwapMove),
}

impl TourMove {
    /// Change in total length if applied now; negative improves.
    #[inline]
    pub fn delta(&self) -> i64 {
        match self {
            TourMove::EdgeExchange(m) => m.delta(),
            TourMove::InterSwap(m) => m.delta(),
        }
    }

    #[inline]
    pub fn set_delta(&mut self, delta: i64) {
        match self {
            TourMove::EdgeExchange(m) => m.set_delta(delta),
            TourMove::InterSwap(m) => m.set_delta(delta),
        }
    }

    /// Checks the recorded neighbour state against `tours`.
    #[inline]
    pub fn classify(&self, tours: &TourPair) -> Applicability {
        match self {
            TourMove::EdgeExchange(m) => m.classify(tours),
            TourMove::InterSwap(m) => m.classify(tours),
        }
    }

    /// Applies the move to `tours`.
    ///
    /// # Errors
    ///
    /// Fails without touching `tours` unless the move is
    /// [`Applicable`](Applicability::Applicable).
    pub fn execute(&self, tours: &mut TourPair) -> Result<()> {
        match self {
            TourMove::EdgeExchange(m) => m.execute(tours),
            TourMove::InterSwap(m) => m.execute(tours),
        }
    }

    /// Short kind name for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TourMove::EdgeExchange(_) => "EdgeExchange",
            TourMove::InterSwap(_) => "InterSwap",
        }
    }
}

impl From<EdgeExchangeMove> for TourMove {
    fn from(m: EdgeExchangeMove) -> Self {
        TourMove::EdgeExchange(m)
    }
}

impl From<InterSwapMove> for TourMove {
    fn from(m: InterSwapMove) -> Self {
        TourMove::InterSwap(m)
    }
}

#[cfg(test)]
mod tests;
