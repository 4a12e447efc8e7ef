//! Configuration-driven entry point.
//!
//! [`improve`] picks the local search named by a [`SearchConfig`], runs it
//! to convergence and returns the outcome. This is the whole engine for
//! callers that do not need stepping or custom listeners.
//!
//! # Logging
//!
//! - INFO: search start and end, with lengths, move counts and speed
//! - DEBUG: cache seeding, reseeding and convergence
//! - TRACE: every applied move

use std::sync::Arc;

use duotour_config::{SearchConfig, SearchType};
use duotour_core::{DistanceOracle, Result, TourPair};

use crate::event::SearchEventListener;
use crate::phase::{CachedSteepestSearch, GreedySearch, LocalSearch, SearchOutcome, SteepestSearch};

/// A search chosen at runtime from [`SearchType`].
#[derive(Debug)]
pub enum ConfiguredSearch {
    CachedSteepest(CachedSteepestSearch),
    Steepest(SteepestSearch),
    Greedy(GreedySearch),
}

impl ConfiguredSearch {
    /// Builds the search selected by `config.search_type`.
    pub fn from_config(config: &SearchConfig) -> Self {
        match config.search_type {
            SearchType::CachedSteepest => {
                Self::CachedSteepest(CachedSteepestSearch::from_config(config.clone()))
            }
            SearchType::Steepest => Self::Steepest(SteepestSearch::from_config(config.clone())),
            SearchType::Greedy => Self::Greedy(GreedySearch::from_config(config.clone())),
        }
    }

    /// Registers a listener on the wrapped search.
    pub fn with_listener(self, listener: Arc<dyn SearchEventListener>) -> Self {
        match self {
            Self::CachedSteepest(s) => Self::CachedSteepest(s.with_listener(listener)),
            Self::Steepest(s) => Self::Steepest(s.with_listener(listener)),
            Self::Greedy(s) => Self::Greedy(s.with_listener(listener)),
        }
    }
}

impl<D: DistanceOracle + ?Sized> LocalSearch<D> for ConfiguredSearch {
    fn search(&mut self, tours: &mut TourPair, oracle: &D) -> Result<SearchOutcome> {
        match self {
            Self::CachedSteepest(s) => s.search(tours, oracle),
            Self::Steepest(s) => s.search(tours, oracle),
            Self::Greedy(s) => s.search(tours, oracle),
        }
    }

    fn search_type_name(&self) -> &'static str {
        match self {
            Self::CachedSteepest(s) => LocalSearch::<D>::search_type_name(s),
            Self::Steepest(s) => LocalSearch::<D>::search_type_name(s),
            Self::Greedy(s) => LocalSearch::<D>::search_type_name(s),
        }
    }
}

/// Improves `tours` in place with the search selected by `config`.
///
/// # Example
///
/// ```
/// use duotour_config::{SearchConfig, SearchType};
/// use duotour_core::{DistanceMatrix, Point, TourPair};
/// use duotour_solver::improve;
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
/// let outcome = improve(&mut tours, &matrix, &SearchConfig::default()).unwrap();
/// assert_eq!(outcome.final_length, 6);
/// ```
pub fn improve<D: DistanceOracle + ?Sized>(
    tours: &mut TourPair,
    oracle: &D,
    config: &SearchConfig,
) -> Result<SearchOutcome> {
    improve_with_listeners(tours, oracle, config, &[])
}

/// Like [`improve`], notifying `listeners` of every search event.
pub fn improve_with_listeners<D: DistanceOracle + ?Sized>(
    tours: &mut TourPair,
    oracle: &D,
    config: &SearchConfig,
    listeners: &[Arc<dyn SearchEventListener>],
) -> Result<SearchOutcome> {
    let mut search = listeners
        .iter()
        .cloned()
        .fold(ConfiguredSearch::from_config(config), ConfiguredSearch::with_listener);
    search.search(tours, oracle)
}
