//! duotour local search engine
//!
//! This crate improves a pair of tours that together visit every node:
//! - Move model: edge exchanges within a tour and swaps between tours
//! - Sorted move cache with incremental regeneration after each move
//! - Cached steepest descent, plus full-recompute steepest and greedy
//!   variants over the same moves
//! - Statistics and an event system for monitoring
//! - [`improve`]: run whichever search a configuration selects

pub mod basic;
pub mod event;
pub mod heuristic;
pub mod phase;
pub mod stats;

pub use basic::{improve, improve_with_listeners, ConfiguredSearch};
pub use event::{
    CountingEventListener, LoggingEventListener, SearchEventListener, SearchEventSupport,
};
pub use heuristic::{
    Applicability, CachedMove, EdgeExchangeMove, InterSwapMove, MoveCache, MoveGenerator,
    TourMove,
};
pub use phase::{
    CachedSteepestSearch, GreedySearch, LocalSearch, SearchOutcome, SearchState, SearchStatus,
    SteepestSearch, StepOutcome,
};
pub use stats::SearchStats;
