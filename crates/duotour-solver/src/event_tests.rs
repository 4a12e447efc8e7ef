//! Tests for the event system.

use super::*;
use crate::heuristic::r#move::InterSwapMove;
use crate::phase::SearchStatus;
use crate::stats::SearchStats;

fn tours() -> TourPair {
    TourPair::new(vec![0, 1, 2], vec![3, 4, 5]).unwrap()
}

fn outcome() -> SearchOutcome {
    SearchOutcome {
        status: SearchStatus::Converged,
        applied_moves: 2,
        initial_length: 40,
        final_length: 12,
        stats: SearchStats::default(),
    }
}

#[test]
fn test_event_support_new() {
    let support = SearchEventSupport::new();
    assert_eq!(support.listener_count(), 0);
    assert!(!support.has_listeners());
}

#[test]
fn test_event_support_fire_events() {
    let mut support = SearchEventSupport::new();
    let listener = Arc::new(CountingEventListener::new());
    support.add_listener(listener.clone());
    support.add_listener(listener.clone());

    let tours = tours();
    let mv: TourMove = InterSwapMove::new(0, 3, 2, 1, 5, 4, -9).into();
    support.fire_search_started("CachedSteepest", &tours, 40);
    support.fire_move_applied(1, &mv, &tours, 31);
    support.fire_search_ended(&outcome());

    assert_eq!(listener.started_count(), 2);
    assert_eq!(listener.applied_count(), 2);
    assert_eq!(listener.ended_count(), 2);
}

#[test]
fn test_clear_listeners() {
    let mut support = SearchEventSupport::new();
    let listener = Arc::new(CountingEventListener::new());
    support.add_listener(listener.clone());
    support.clear_listeners();

    support.fire_search_ended(&outcome());
    assert_eq!(listener.ended_count(), 0);
    assert!(!support.has_listeners());
}

#[test]
fn test_logging_listener_does_not_panic() {
    let listener = LoggingEventListener::with_prefix("[test] ");
    let tours = tours();
    let mv: TourMove = InterSwapMove::new(0, 3, 2, 1, 5, 4, -9).into();

    listener.on_search_started("Greedy", &tours, 40);
    listener.on_move_applied(1, &mv, &tours, 31);
    listener.on_search_ended(&outcome());
}

#[test]
fn test_outcome_improvement() {
    assert_eq!(outcome().improvement(), 28);
}
