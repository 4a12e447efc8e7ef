//! Tests for InterSwapMove.

use super::*;

fn pair() -> TourPair {
    TourPair::new(vec![0, 1, 2, 3], vec![4, 5, 6, 7]).unwrap()
}

#[test]
fn test_classify_exact_match() {
    let tours = pair();
    let m = InterSwapMove::new(1, 6, 0, 2, 5, 7, -4);
    assert_eq!(m.classify(&tours), Applicability::Applicable);
}

#[test]
fn test_classify_changed_neighbour() {
    let mut tours = pair();
    let m = InterSwapMove::new(1, 6, 0, 2, 5, 7, -4);

    tours.reverse_segment(TourId::B, 1, 2);
    assert_eq!(m.classify(&tours), Applicability::NotApplicable);
}

#[test]
fn test_classify_wrong_tours() {
    let tours = pair();
    // Node 5 is not in tour A
    let m = InterSwapMove::new(5, 1, 4, 6, 0, 2, -4);
    assert_eq!(m.classify(&tours), Applicability::NotApplicable);
}

#[test]
fn test_execute_exchanges_in_place() {
    let matrix = line_matrix(8);
    let mut tours = pair();
    let before = tours.total_length(&matrix);

    let delta = crate::heuristic::generator::swap_delta(&matrix, [2, 3, 0], [6, 7, 4]);
    let m = InterSwapMove::new(3, 7, 2, 0, 6, 4, delta);
    assert_eq!(m.classify(&tours), Applicability::Applicable);
    m.execute(&mut tours).unwrap();

    assert_eq!(tours.tour(TourId::A), &[0, 1, 2, 7]);
    assert_eq!(tours.tour(TourId::B), &[4, 5, 6, 3]);
    assert_eq!(tours.total_length(&matrix), before + delta);
}

#[test]
fn test_execute_rejects_stale_move() {
    let mut tours = pair();
    let err = InterSwapMove::new(1, 6, 0, 3, 5, 7, -4)
        .execute(&mut tours)
        .unwrap_err();
    assert!(matches!(err, DuotourError::InvariantViolation(_)));
}

#[test]
fn test_affected_nodes() {
    let m = InterSwapMove::new(1, 6, 0, 2, 5, 7, -4);
    assert_eq!(m.affected(), [1, 6, 0, 2, 5, 7]);
}
