//! Steepest descent over an incrementally maintained move cache.
//!
//! The neighbourhood is enumerated once. Afterwards each step scans the
//! cache from the best delta, revalidates entries against the live tours,
//! applies the first applicable one and regenerates only the moves around
//! the nodes it touched.
//!
//! Tour length strictly decreases with every applied move, because only
//! moves with a negative delta are ever cached and an applicable move's
//! delta is exact.

use std::sync::Arc;

use duotour_config::SearchConfig;
use duotour_core::{DistanceOracle, DuotourError, Result, TourPair};
use tracing::{debug, trace};

use super::{announce_start, check_input, conclude, verify_step, LocalSearch, SearchOutcome};
use crate::event::{SearchEventListener, SearchEventSupport};
use crate::heuristic::r#move::{Applicability, TourMove};
use crate::heuristic::{updater, MoveCache, MoveGenerator};
use crate::stats::SearchStats;

const SEARCH_TYPE: &str = "CachedSteepest";

/// Driver state between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Looking for the best applicable cached move.
    Scanning,
    /// Executing a move and merging its regenerated neighbours.
    Applying,
    /// No applicable improving move remains.
    Converged,
}

/// Result of a single [`CachedSteepestSearch::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Applied(TourMove),
    Converged,
}

/// Steepest-descent local search with a sorted, incrementally updated move
/// cache.
///
/// # Example
///
/// ```
/// use duotour_core::{DistanceMatrix, Point, TourPair};
/// use duotour_solver::phase::{CachedSteepestSearch, StepOutcome};
///
/// let matrix = DistanceMatrix::from_points(&[
///     Point::new(0, 0),
///     Point::new(0, 1),
///     Point::new(1, 1),
///     Point::new(10, 10),
///     Point::new(10, 11),
///     Point::new(11, 11),
/// ]);
/// let mut tours = TourPair::new(vec![0, 1, 3], vec![2, 4, 5]).unwrap();
///
/// let mut search = CachedSteepestSearch::new();
/// search.start(&tours, &matrix).unwrap();
/// while let StepOutcome::Applied(_) = search.step(&mut tours, &matrix).unwrap() {}
///
/// assert_eq!(search.length(), 6);
/// assert_eq!(tours.total_length(&matrix), 6);
/// ```
#[derive(Debug)]
pub struct CachedSteepestSearch {
    config: SearchConfig,
    cache: MoveCache,
    state: SearchState,
    stats: SearchStats,
    events: SearchEventSupport,
    initial_length: i64,
    length: i64,
    started: bool,
}

impl Default for CachedSteepestSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl CachedSteepestSearch {
    pub fn new() -> Self {
        Self::from_config(SearchConfig::default())
    }

    pub fn from_config(config: SearchConfig) -> Self {
        Self {
            config,
            cache: MoveCache::new(),
            state: SearchState::Scanning,
            stats: SearchStats::default(),
            events: SearchEventSupport::new(),
            initial_length: 0,
            length: 0,
            started: false,
        }
    }

    pub fn with_listener(mut self, listener: Arc<dyn SearchEventListener>) -> Self {
        self.events.add_listener(listener);
        self
    }

    pub fn add_listener(&mut self, listener: Arc<dyn SearchEventListener>) {
        self.events.add_listener(listener);
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn cache(&self) -> &MoveCache {
        &self.cache
    }

    /// Total tour length tracked from applied deltas.
    pub fn length(&self) -> i64 {
        self.length
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Validates the input and seeds the cache with a full enumeration.
    pub fn start<D: DistanceOracle + ?Sized>(
        &mut self,
        tours: &TourPair,
        oracle: &D,
    ) -> Result<()> {
        check_input(tours, oracle, &self.config)?;

        self.stats = SearchStats::default();
        self.stats.start();
        self.length = tours.total_length(oracle);
        self.initial_length = self.length;

        let moves = MoveGenerator::new(oracle).enumerate(tours);
        self.stats.record_generated(moves.len());
        self.cache.replace(moves);
        self.state = SearchState::Scanning;
        self.started = true;

        announce_start(SEARCH_TYPE, tours, self.length, &self.events);
        debug!(event = "cache_seeded", cached_moves = self.cache.len());
        Ok(())
    }

    /// Applies the best applicable cached move, or converges.
    ///
    /// Starts the search first if [`start`](Self::start) was not called.
    pub fn step<D: DistanceOracle + ?Sized>(
        &mut self,
        tours: &mut TourPair,
        oracle: &D,
    ) -> Result<StepOutcome> {
        if !self.started {
            self.start(tours, oracle)?;
        }
        match self.state {
            SearchState::Converged => return Ok(StepOutcome::Converged),
            SearchState::Applying => {
                return Err(DuotourError::InvariantViolation(
                    "search was interrupted while applying a move".to_string(),
                ))
            }
            SearchState::Scanning => {}
        }

        let generator = MoveGenerator::new(oracle);
        let mut confirmed = false;
        loop {
            let (found, removed) = self.scan(tours);

            if let Some(mv) = found {
                self.state = SearchState::Applying;
                self.apply(tours, oracle, &generator, mv, &removed)?;
                self.state = SearchState::Scanning;
                return Ok(StepOutcome::Applied(mv));
            }

            self.cache.remove_at(&removed);
            if self.config.confirm_local_optimum && !confirmed {
                confirmed = true;
                let fresh = generator.enumerate(tours);
                self.stats.record_generated(fresh.len());
                if fresh.iter().any(|m| m.classify(tours).is_applicable()) {
                    self.stats.record_reseed();
                    debug!(
                        event = "cache_reseeded",
                        cached_moves = fresh.len(),
                        length = self.length,
                    );
                    self.cache.replace(fresh);
                    continue;
                }
            }

            self.state = SearchState::Converged;
            debug!(
                event = "converged",
                applied_moves = self.stats.moves_applied,
                remaining_cached = self.cache.len(),
                length = self.length,
            );
            return Ok(StepOutcome::Converged);
        }
    }

    /// Walks the cache from the best delta. Returns the first applicable
    /// move and the indices to drop, in ascending order.
    fn scan(&mut self, tours: &TourPair) -> (Option<TourMove>, Vec<usize>) {
        let mut removed = Vec::new();
        let limit = self.config.stale_move_limit;

        for (index, entry) in self.cache.iter_mut().enumerate() {
            self.stats.record_evaluated();
            match entry.mv.classify(tours) {
                Applicability::Applicable => {
                    removed.push(index);
                    return (Some(entry.mv), removed);
                }
                Applicability::NotApplicable => removed.push(index),
                Applicability::MayBeApplicable => {
                    entry.misses += 1;
                    if limit.is_some_and(|l| entry.misses > l) {
                        self.stats.record_stale_drop();
                        removed.push(index);
                    }
                }
            }
        }
        (None, removed)
    }

    fn apply<D: DistanceOracle + ?Sized>(
        &mut self,
        tours: &mut TourPair,
        oracle: &D,
        generator: &MoveGenerator<'_, D>,
        mv: TourMove,
        removed: &[usize],
    ) -> Result<()> {
        mv.execute(tours)?;
        self.length += mv.delta();
        self.stats.record_applied();
        verify_step(tours, oracle, self.length, self.config.environment_mode)?;

        let batch = updater::regenerate(generator, tours, &mv)?;
        self.stats.record_generated(batch.len());
        self.cache.remove_at(removed);
        self.cache.merge_sorted(batch);

        if self.config.environment_mode.is_asserted() && !self.cache.is_sorted() {
            return Err(DuotourError::InvariantViolation(
                "move cache is out of delta order".to_string(),
            ));
        }

        trace!(
            event = "move_applied",
            step = self.stats.moves_applied,
            kind = mv.kind_name(),
            delta = mv.delta(),
            length = self.length,
            cached_moves = self.cache.len(),
        );
        self.events
            .fire_move_applied(self.stats.moves_applied, &mv, tours, self.length);
        Ok(())
    }
}

impl<D: DistanceOracle + ?Sized> LocalSearch<D> for CachedSteepestSearch {
    fn search(&mut self, tours: &mut TourPair, oracle: &D) -> Result<SearchOutcome> {
        self.start(tours, oracle)?;
        while let StepOutcome::Applied(_) = self.step(tours, oracle)? {}

        Ok(conclude(
            SEARCH_TYPE,
            self.stats.clone(),
            self.initial_length,
            self.length,
            &self.events,
        ))
    }

    fn search_type_name(&self) -> &'static str {
        SEARCH_TYPE
    }
}

#[cfg(test)]
#[path = "cached_tests.rs"]
mod tests;
