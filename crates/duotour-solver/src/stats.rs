//! Search statistics.
//!
//! Plain counters owned by one search run.

use std::time::{Duration, Instant};

/// Counters for a single local search run.
///
/// # Example
///
/// ```
/// use duotour_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_generated(10);
/// stats.record_evaluated();
/// stats.record_applied();
/// stats.stop();
///
/// assert_eq!(stats.moves_generated, 10);
/// assert_eq!(stats.moves_evaluated, 1);
/// assert_eq!(stats.moves_applied, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    stopped_after: Option<Duration>,
    /// Moves applied to the tours.
    pub moves_applied: u64,
    /// Moves produced by enumeration or regeneration.
    pub moves_generated: u64,
    /// Cached moves classified or candidate deltas evaluated.
    pub moves_evaluated: u64,
    /// Cached moves dropped after exceeding the stale limit.
    pub stale_moves_dropped: u64,
    /// Full re-enumerations triggered by convergence confirmation.
    pub reseeds: u64,
}

impl SearchStats {
    /// Marks the start of the search.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.stopped_after = None;
    }

    /// Freezes the elapsed time.
    pub fn stop(&mut self) {
        self.stopped_after = Some(self.elapsed());
    }

    /// Returns the elapsed time since the search started.
    pub fn elapsed(&self) -> Duration {
        match self.stopped_after {
            Some(d) => d,
            None => self.start_time.map(|t| t.elapsed()).unwrap_or_default(),
        }
    }

    pub fn record_applied(&mut self) {
        self.moves_applied += 1;
    }

    pub fn record_generated(&mut self, count: usize) {
        self.moves_generated += count as u64;
    }

    pub fn record_evaluated(&mut self) {
        self.moves_evaluated += 1;
    }

    pub fn record_evaluated_many(&mut self, count: usize) {
        self.moves_evaluated += count as u64;
    }

    pub fn record_stale_drop(&mut self) {
        self.stale_moves_dropped += 1;
    }

    pub fn record_reseed(&mut self) {
        self.reseeds += 1;
    }

    /// Returns the evaluation rate per second.
    pub fn moves_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.moves_evaluated as f64 / secs
        } else {
            0.0
        }
    }
}
