//! duotour - two-cycle tour optimization in Rust
//!
//! Splits a point set into two disjoint closed tours of minimum total
//! length, by local search from a given starting pair.
//!
//! # Example
//!
//! ```rust
//! use duotour::prelude::*;
//!
//! let matrix = DistanceMatrix::from_points(&[
//!     Point::new(0, 0),
//!     Point::new(0, 1),
//!     Point::new(1, 1),
//!     Point::new(10, 10),
//!     Point::new(10, 11),
//!     Point::new(11, 11),
//! ]);
//!
//! let (a, b, outcome) = run_search(vec![0, 1, 3], vec![2, 4, 5], &matrix).unwrap();
//! assert_eq!(outcome.final_length, 6);
//! assert_eq!(a.len() + b.len(), 6);
//! ```

// Core types
pub use duotour_core::{
    DistanceMatrix, DistanceOracle, DuotourError, NodeId, Point, Result, Slot, TourId, TourPair,
};

// Configuration
pub use duotour_config::{ConfigError, EnvironmentMode, SearchConfig, SearchType};

// Searches and their building blocks
pub use duotour_solver::{
    improve, improve_with_listeners, Applicability, CachedSteepestSearch, ConfiguredSearch,
    CountingEventListener, EdgeExchangeMove, GreedySearch, InterSwapMove, LocalSearch,
    LoggingEventListener, MoveCache, MoveGenerator, SearchEventListener, SearchOutcome,
    SearchStats, SearchStatus, SteepestSearch, StepOutcome, TourMove,
};

#[cfg(feature = "console")]
mod console;
#[cfg(feature = "console")]
pub use console::init_logging;

mod search;
pub use search::{load_config, run_search, run_search_with_config, CONFIG_FILE};

pub mod prelude {
    pub use super::{
        improve, run_search, run_search_with_config, DistanceMatrix, DistanceOracle, NodeId,
        Point, SearchConfig, SearchOutcome, SearchType, TourId, TourPair,
    };
}
