//! Event system for search monitoring.
//!
//! Listeners registered on a search are notified synchronously, in
//! registration order, when the search starts, after every applied move,
//! and when it ends.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use duotour_core::TourPair;
//! use duotour_solver::event::{SearchEventListener, SearchEventSupport};
//! use duotour_solver::heuristic::r#move::TourMove;
//!
//! #[derive(Debug)]
//! struct Progress;
//! impl SearchEventListener for Progress {
//!     fn on_move_applied(&self, step: u64, _mv: &TourMove, _tours: &TourPair, length: i64) {
//!         println!("step {}: length {}", step, length);
//!     }
//! }
//!
//! let mut support = SearchEventSupport::new();
//! support.add_listener(Arc::new(Progress));
//! assert_eq!(support.listener_count(), 1);
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use duotour_core::TourPair;
use tracing::{info, trace};

use crate::heuristic::r#move::TourMove;
use crate::phase::SearchOutcome;

/// Listener for search lifecycle events.
pub trait SearchEventListener: Send + Sync + Debug {
    /// Called once the initial length is known.
    fn on_search_started(&self, _search_type: &'static str, _tours: &TourPair, _length: i64) {}

    /// Called after each applied move.
    ///
    /// # Arguments
    ///
    /// * `step` - 1-based index of the applied move
    /// * `mv` - The move just applied
    /// * `tours` - The tours after the move
    /// * `length` - Total length after the move
    fn on_move_applied(&self, step: u64, mv: &TourMove, tours: &TourPair, length: i64);

    /// Called when the search has converged.
    fn on_search_ended(&self, _outcome: &SearchOutcome) {}
}

/// Broadcasts search events to registered listeners.
#[derive(Default, Clone)]
pub struct SearchEventSupport {
    listeners: Vec<Arc<dyn SearchEventListener>>,
}

impl SearchEventSupport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, listener: Arc<dyn SearchEventListener>) {
        self.listeners.push(listener);
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn fire_search_started(&self, search_type: &'static str, tours: &TourPair, length: i64) {
        for listener in &self.listeners {
            listener.on_search_started(search_type, tours, length);
        }
    }

    pub fn fire_move_applied(&self, step: u64, mv: &TourMove, tours: &TourPair, length: i64) {
        for listener in &self.listeners {
            listener.on_move_applied(step, mv, tours, length);
        }
    }

    pub fn fire_search_ended(&self, outcome: &SearchOutcome) {
        for listener in &self.listeners {
            listener.on_search_ended(outcome);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }
}

impl Debug for SearchEventSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEventSupport")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Emits every event as a `tracing` record.
#[derive(Debug, Clone, Default)]
pub struct LoggingEventListener {
    prefix: String,
}

impl LoggingEventListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a logging listener with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl SearchEventListener for LoggingEventListener {
    fn on_search_started(&self, search_type: &'static str, _tours: &TourPair, length: i64) {
        info!(prefix = %self.prefix, search_type, length, "search started");
    }

    fn on_move_applied(&self, step: u64, mv: &TourMove, _tours: &TourPair, length: i64) {
        trace!(
            prefix = %self.prefix,
            step,
            kind = mv.kind_name(),
            delta = mv.delta(),
            length,
            "move applied"
        );
    }

    fn on_search_ended(&self, outcome: &SearchOutcome) {
        info!(
            prefix = %self.prefix,
            applied_moves = outcome.applied_moves,
            final_length = outcome.final_length,
            "search ended"
        );
    }
}

/// Counts event occurrences.
#[derive(Debug, Default)]
pub struct CountingEventListener {
    started_count: AtomicUsize,
    applied_count: AtomicUsize,
    ended_count: AtomicUsize,
}

impl CountingEventListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started_count(&self) -> usize {
        self.started_count.load(Ordering::SeqCst)
    }

    pub fn applied_count(&self) -> usize {
        self.applied_count.load(Ordering::SeqCst)
    }

    pub fn ended_count(&self) -> usize {
        self.ended_count.load(Ordering::SeqCst)
    }
}

impl SearchEventListener for CountingEventListener {
    fn on_search_started(&self, _search_type: &'static str, _tours: &TourPair, _length: i64) {
        self.started_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_move_applied(&self, _step: u64, _mv: &TourMove, _tours: &TourPair, _length: i64) {
        self.applied_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_search_ended(&self, _outcome: &SearchOutcome) {
        self.ended_count.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
