//! Local search implementations.
//!
//! All searches share one contract: take a valid [`TourPair`], improve it in
//! place until no improving move remains, and report a [`SearchOutcome`].
//!
//! - [`CachedSteepestSearch`] - steepest descent over a sorted move cache
//!   that is updated incrementally after each move
//! - [`SteepestSearch`] - steepest descent that re-enumerates every step
//! - [`GreedySearch`] - first improvement over a shuffled neighbourhood

mod cached;
mod greedy;
mod steepest;

use std::fmt::Debug;

use duotour_config::{EnvironmentMode, SearchConfig};
use duotour_core::{DistanceOracle, DuotourError, Result, TourId, TourPair};
use tracing::info;

use crate::event::SearchEventSupport;
use crate::stats::SearchStats;

pub use cached::{CachedSteepestSearch, SearchState, StepOutcome};
pub use greedy::GreedySearch;
pub use steepest::SteepestSearch;

/// A local search over two tours.
pub trait LocalSearch<D: DistanceOracle + ?Sized>: Send + Debug {
    /// Improves `tours` in place until a local optimum is reached.
    fn search(&mut self, tours: &mut TourPair, oracle: &D) -> Result<SearchOutcome>;

    /// Returns the name of this search for logging.
    fn search_type_name(&self) -> &'static str;
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// No improving move remains.
    Converged,
}

/// Result of a completed search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub status: SearchStatus,
    pub applied_moves: u64,
    pub initial_length: i64,
    pub final_length: i64,
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Total improvement, always non-negative.
    pub fn improvement(&self) -> i64 {
        self.initial_length - self.final_length
    }
}

/// Rejects inputs the searches cannot work on.
pub(crate) fn check_input<D: DistanceOracle + ?Sized>(
    tours: &TourPair,
    oracle: &D,
    config: &SearchConfig,
) -> Result<()> {
    config
        .validate()
        .map_err(|e| DuotourError::Config(e.to_string()))?;
    tours.validate()?;

    if tours.node_count() != oracle.node_count() {
        return Err(DuotourError::Partition(format!(
            "tours cover {} nodes, distance oracle has {}",
            tours.node_count(),
            oracle.node_count()
        )));
    }

    if let Some(expected) = config.expected_split(tours.node_count()) {
        if tours.len(TourId::A) != expected {
            return Err(DuotourError::Partition(format!(
                "tour A has {} nodes, split ratio expects {}",
                tours.len(TourId::A),
                expected
            )));
        }
    }
    Ok(())
}

/// In full assert mode, recomputes the length and partition from scratch.
pub(crate) fn verify_step<D: DistanceOracle + ?Sized>(
    tours: &TourPair,
    oracle: &D,
    tracked_length: i64,
    mode: EnvironmentMode,
) -> Result<()> {
    if !mode.is_fully_asserted() {
        return Ok(());
    }
    tours.validate()?;
    let actual = tours.total_length(oracle);
    if actual != tracked_length {
        return Err(DuotourError::InvariantViolation(format!(
            "tracked length {} but tours measure {}",
            tracked_length, actual
        )));
    }
    Ok(())
}

/// Logs the start of a search and notifies listeners.
pub(crate) fn announce_start(
    search_type: &'static str,
    tours: &TourPair,
    length: i64,
    events: &SearchEventSupport,
) {
    info!(
        event = "search_start",
        search_type,
        node_count = tours.node_count(),
        tour_a = tours.len(TourId::A),
        tour_b = tours.len(TourId::B),
        length,
    );
    events.fire_search_started(search_type, tours, length);
}

/// Stops the clock, logs the end of a search and notifies listeners.
pub(crate) fn conclude(
    search_type: &'static str,
    mut stats: SearchStats,
    initial_length: i64,
    final_length: i64,
    events: &SearchEventSupport,
) -> SearchOutcome {
    stats.stop();
    let outcome = SearchOutcome {
        status: SearchStatus::Converged,
        applied_moves: stats.moves_applied,
        initial_length,
        final_length,
        stats,
    };

    info!(
        event = "search_end",
        search_type,
        duration_ms = outcome.stats.elapsed().as_millis() as u64,
        applied_moves = outcome.applied_moves,
        moves_evaluated = outcome.stats.moves_evaluated,
        speed = outcome.stats.moves_per_second() as u64,
        length = final_length,
    );
    events.fire_search_ended(&outcome);
    outcome
}
