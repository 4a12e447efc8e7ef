//! Steepest descent with a full re-enumeration every step.
//!
//! Quadratic per applied move. Useful as a reference for the cached search
//! and on small instances where bookkeeping costs more than it saves.

use std::sync::Arc;

use duotour_config::SearchConfig;
use duotour_core::{DistanceOracle, Result, TourPair};
use tracing::trace;

use super::{announce_start, check_input, conclude, verify_step, LocalSearch, SearchOutcome};
use crate::event::{SearchEventListener, SearchEventSupport};
use crate::heuristic::generator::neighbourhood_size;
use crate::heuristic::MoveGenerator;
use crate::stats::SearchStats;

const SEARCH_TYPE: &str = "Steepest";

/// Applies the single best improving move until none remains.
#[derive(Debug, Default)]
pub struct SteepestSearch {
    config: SearchConfig,
    events: SearchEventSupport,
}

impl SteepestSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: SearchConfig) -> Self {
        Self {
            config,
            events: SearchEventSupport::new(),
        }
    }

    pub fn with_listener(mut self, listener: Arc<dyn SearchEventListener>) -> Self {
        self.events.add_listener(listener);
        self
    }
}

impl<D: DistanceOracle + ?Sized> LocalSearch<D> for SteepestSearch {
    fn search(&mut self, tours: &mut TourPair, oracle: &D) -> Result<SearchOutcome> {
        check_input(tours, oracle, &self.config)?;

        let mut stats = SearchStats::default();
        stats.start();
        let initial_length = tours.total_length(oracle);
        let mut length = initial_length;
        announce_start(SEARCH_TYPE, tours, length, &self.events);

        let generator = MoveGenerator::new(oracle).with_mirrors(false);
        loop {
            stats.record_evaluated_many(neighbourhood_size(tours));
            let moves = generator.enumerate(tours);
            stats.record_generated(moves.len());
            let Some(best) = moves.first().copied() else {
                break;
            };

            best.execute(tours)?;
            length += best.delta();
            stats.record_applied();
            verify_step(tours, oracle, length, self.config.environment_mode)?;

            trace!(
                event = "move_applied",
                step = stats.moves_applied,
                kind = best.kind_name(),
                delta = best.delta(),
                length,
            );
            self.events
                .fire_move_applied(stats.moves_applied, &best, tours, length);
        }

        Ok(conclude(SEARCH_TYPE, stats, initial_length, length, &self.events))
    }

    fn search_type_name(&self) -> &'static str {
        SEARCH_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duotour_config::EnvironmentMode;
    use duotour_test::{assert_valid_partition, crossed, random_instance};

    #[test]
    fn test_crossed_instance_reaches_optimum() {
        let matrix = crossed::matrix();
        let mut tours = crossed::flipped_crossed_tours();

        let outcome = SteepestSearch::new().search(&mut tours, &matrix).unwrap();

        assert_eq!(outcome.final_length, crossed::OPTIMAL_LENGTH);
        assert_eq!(tours.total_length(&matrix), crossed::OPTIMAL_LENGTH);
        assert!(outcome.applied_moves >= 1);
    }

    #[test]
    fn test_random_instance_under_full_assert() {
        let (matrix, mut tours) = random_instance(40, 2);
        let config = SearchConfig::new().with_environment_mode(EnvironmentMode::FullAssert);

        let outcome = SteepestSearch::from_config(config)
            .search(&mut tours, &matrix)
            .unwrap();

        assert_valid_partition(&tours);
        assert!(outcome.final_length < outcome.initial_length);
        assert_eq!(outcome.final_length, tours.total_length(&matrix));
        assert!(MoveGenerator::new(&matrix).enumerate(&tours).is_empty());
    }

    #[test]
    fn test_search_type_name() {
        let search = SteepestSearch::new();
        assert_eq!(
            LocalSearch::<duotour_core::DistanceMatrix>::search_type_name(&search),
            "Steepest"
        );
    }
}
