//! Heuristic components for two-tour local search
//!
//! This module contains:
//! - Moves: edge exchanges and inter-tour swaps, with applicability checks
//! - Generation: full and per-anchor enumeration of improving moves
//! - Cache: moves sorted by delta with merge and bulk removal
//! - Updater: regeneration around the nodes a move touched

pub mod cache;
pub mod generator;
pub mod r#move;
pub mod updater;

pub use cache::{CachedMove, MoveCache};
pub use generator::MoveGenerator;
pub use r#move::{Applicability, EdgeExchangeMove, InterSwapMove, TourMove};
