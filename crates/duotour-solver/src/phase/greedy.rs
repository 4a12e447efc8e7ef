//! First-improvement descent over a shuffled neighbourhood.
//!
//! Every step visits candidate pairs in a fresh random order and applies
//! the first one with a negative delta. The search converges once a full
//! pass finds none.

use std::sync::Arc;

use duotour_config::SearchConfig;
use duotour_core::{DistanceOracle, Result, TourId, TourPair};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use super::{announce_start, check_input, conclude, verify_step, LocalSearch, SearchOutcome};
use crate::event::{SearchEventListener, SearchEventSupport};
use crate::heuristic::r#move::TourMove;
use crate::heuristic::MoveGenerator;
use crate::stats::SearchStats;

const SEARCH_TYPE: &str = "Greedy";

/// Seed used in reproducible modes when none is configured.
const DEFAULT_SEED: u64 = 0;

/// A candidate pair, by position. Tour sizes never change, so the set of
/// pairs is fixed for a run.
#[derive(Debug, Clone, Copy)]
enum Candidate {
    Edge(TourId, usize, usize),
    Swap(usize, usize),
}

fn candidates(tours: &TourPair) -> Vec<Candidate> {
    let mut out = Vec::new();
    for pos_a in 0..tours.len(TourId::A) {
        for pos_b in 0..tours.len(TourId::B) {
            out.push(Candidate::Swap(pos_a, pos_b));
        }
    }
    for tour in TourId::ALL {
        let len = tours.len(tour);
        for p1 in 0..len {
            for p2 in (p1 + 1)..len {
                out.push(Candidate::Edge(tour, p1, p2));
            }
        }
    }
    out
}

/// Applies the first improving move found in random order.
#[derive(Debug)]
pub struct GreedySearch {
    config: SearchConfig,
    rng: ChaCha8Rng,
    events: SearchEventSupport,
}

impl Default for GreedySearch {
    fn default() -> Self {
        Self::from_config(SearchConfig::default())
    }
}

impl GreedySearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds from `random_seed`, falling back to a fixed seed in
    /// reproducible modes and to OS entropy otherwise.
    pub fn from_config(config: SearchConfig) -> Self {
        let rng = match config.random_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None if config.environment_mode.is_reproducible() => {
                ChaCha8Rng::seed_from_u64(DEFAULT_SEED)
            }
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            config,
            rng,
            events: SearchEventSupport::new(),
        }
    }

    /// Creates a search with a specific seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_config(SearchConfig::new().with_random_seed(seed))
    }

    pub fn with_listener(mut self, listener: Arc<dyn SearchEventListener>) -> Self {
        self.events.add_listener(listener);
        self
    }
}

impl<D: DistanceOracle + ?Sized> LocalSearch<D> for GreedySearch {
    fn search(&mut self, tours: &mut TourPair, oracle: &D) -> Result<SearchOutcome> {
        check_input(tours, oracle, &self.config)?;

        let mut stats = SearchStats::default();
        stats.start();
        let initial_length = tours.total_length(oracle);
        let mut length = initial_length;
        announce_start(SEARCH_TYPE, tours, length, &self.events);

        let generator = MoveGenerator::new(oracle);
        let mut order = candidates(tours);
        loop {
            order.shuffle(&mut self.rng);

            let mut improving: Option<TourMove> = None;
            for candidate in &order {
                stats.record_evaluated();
                let mv: TourMove = match *candidate {
                    Candidate::Edge(tour, p1, p2) => {
                        generator.edge_move(tours, tour, p1, p2).into()
                    }
                    Candidate::Swap(pos_a, pos_b) => {
                        generator.swap_move(tours, pos_a, pos_b).into()
                    }
                };
                if mv.delta() < 0 {
                    improving = Some(mv);
                    break;
                }
            }
            let Some(mv) = improving else {
                break;
            };

            mv.execute(tours)?;
            length += mv.delta();
            stats.record_applied();
            verify_step(tours, oracle, length, self.config.environment_mode)?;

            trace!(
                event = "move_applied",
                step = stats.moves_applied,
                kind = mv.kind_name(),
                delta = mv.delta(),
                length,
            );
            self.events
                .fire_move_applied(stats.moves_applied, &mv, tours, length);
        }

        Ok(conclude(SEARCH_TYPE, stats, initial_length, length, &self.events))
    }

    fn search_type_name(&self) -> &'static str {
        SEARCH_TYPE
    }
}
