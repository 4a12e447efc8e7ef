//! Tests for EdgeExchangeMove.

use super::*;

fn pair() -> TourPair {
    TourPair::new(vec![0, 1, 2, 3, 4, 5, 6, 7], vec![8, 9, 10]).unwrap()
}

#[test]
fn test_classify_fresh_move() {
    let tours = pair();
    let m = EdgeExchangeMove::new(TourId::A, 1, 5, 2, 6, -3);
    assert_eq!(m.classify(&tours), Applicability::Applicable);
    assert_eq!(m.mirror().classify(&tours), Applicability::NotApplicable);
}

#[test]
fn test_classify_after_unrelated_partial_reversal() {
    let mut tours = pair();
    let cached = EdgeExchangeMove::new(TourId::A, 1, 5, 2, 6, -3);

    // Reverses 4..=6, which flips the recorded edge (5, 6) but leaves (1, 2)
    EdgeExchangeMove::new(TourId::A, 3, 6, 4, 7, -1)
        .execute(&mut tours)
        .unwrap();
    assert_eq!(tours.tour(TourId::A), &[0, 1, 2, 3, 6, 5, 4, 7]);

    assert_eq!(cached.classify(&tours), Applicability::MayBeApplicable);
    assert_ne!(cached.classify(&tours), Applicability::Applicable);
}

#[test]
fn test_classify_both_reversed_is_not_applicable_but_mirror_is() {
    let mut tours = pair();
    let cached = EdgeExchangeMove::new(TourId::A, 2, 4, 3, 5, -3);

    // Reverse 2..=5 so both recorded edges run backwards
    tours.reverse_segment(TourId::A, 2, 5);
    assert_eq!(tours.tour(TourId::A), &[0, 1, 5, 4, 3, 2, 6, 7]);

    assert_eq!(cached.classify(&tours), Applicability::NotApplicable);
    assert_eq!(cached.mirror().classify(&tours), Applicability::Applicable);
}

#[test]
fn test_classify_broken_edge() {
    let mut tours = pair();
    let cached = EdgeExchangeMove::new(TourId::A, 1, 5, 2, 6, -3);

    // Swapping node 2 out of tour A breaks (1, 2)
    let p2 = tours.position(TourId::A, 2).unwrap();
    tours.exchange(p2, 0);
    assert_eq!(cached.classify(&tours), Applicability::NotApplicable);
}

#[test]
fn test_classify_node_left_tour() {
    let mut tours = pair();
    let cached = EdgeExchangeMove::new(TourId::A, 1, 5, 2, 6, -3);
    tours.exchange(5, 1);
    assert_eq!(cached.classify(&tours), Applicability::NotApplicable);
}

#[test]
fn test_execute_wrapping_range() {
    let mut tours = pair();
    // n1 = 6 at position 6, n2 = 1 at position 1: reverses 7, 0, 1
    EdgeExchangeMove::new(TourId::A, 6, 1, 7, 2, -4)
        .execute(&mut tours)
        .unwrap();

    assert_eq!(tours.successor(TourId::A, 6).unwrap(), 1);
    assert_eq!(tours.successor(TourId::A, 7).unwrap(), 2);
    assert!(tours.validate().is_ok());
}

#[test]
fn test_execute_delta_matches_recomputed_length() {
    let matrix = line_matrix(11);
    let mut tours = TourPair::new(vec![0, 5, 2, 7, 4, 1, 6, 3], vec![8, 9, 10]).unwrap();
    let before = tours.total_length(&matrix);

    // (0,5) and (4,1) out, (0,4) and (5,1) in
    let delta = crate::heuristic::generator::edge_delta(&matrix, 0, 5, 4, 1);
    let m = EdgeExchangeMove::new(TourId::A, 0, 4, 5, 1, delta);
    m.execute(&mut tours).unwrap();

    assert_eq!(tours.total_length(&matrix), before + delta);
}

#[test]
fn test_execute_rejects_degenerate_move() {
    let mut tours = pair();
    let err = EdgeExchangeMove::new(TourId::A, 3, 3, 4, 4, -1)
        .execute(&mut tours)
        .unwrap_err();
    assert!(matches!(err, DuotourError::DegenerateMove(3)));
}

#[test]
fn test_execute_rejects_stale_move() {
    let mut tours = pair();
    let err = EdgeExchangeMove::new(TourId::A, 1, 5, 3, 6, -1)
        .execute(&mut tours)
        .unwrap_err();
    assert!(matches!(err, DuotourError::InvariantViolation(_)));
    assert_eq!(tours, pair());
}
