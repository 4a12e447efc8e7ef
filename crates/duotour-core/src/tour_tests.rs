//! Tests for the two-tour store.

use super::*;
use crate::distance::{DistanceMatrix, Point};

fn pair() -> TourPair {
    TourPair::new(vec![0, 1, 2, 3, 4, 5], vec![6, 7, 8]).unwrap()
}

fn assert_cycle_eq(actual: &[NodeId], expected: &[NodeId]) {
    // Same undirected cycle: some rotation of actual or its reverse equals expected
    let n = actual.len();
    assert_eq!(n, expected.len());
    let matches = |seq: &[NodeId]| (0..n).any(|r| (0..n).all(|k| seq[(r + k) % n] == expected[k]));
    let reversed: Vec<NodeId> = actual.iter().rev().copied().collect();
    assert!(
        matches(actual) || matches(&reversed),
        "{:?} is not the cycle {:?}",
        actual,
        expected
    );
}

#[test]
fn test_new_rejects_short_tour() {
    let err = TourPair::new(vec![0, 1, 2], vec![3]).unwrap_err();
    assert!(matches!(
        err,
        DuotourError::TourTooShort {
            tour: TourId::B,
            len: 1,
            min: 2
        }
    ));
}

#[test]
fn test_new_rejects_duplicate_node() {
    let err = TourPair::new(vec![0, 1, 2], vec![2, 3, 4]).unwrap_err();
    assert!(matches!(err, DuotourError::Partition(_)));
}

#[test]
fn test_new_rejects_out_of_range_node() {
    let err = TourPair::new(vec![0, 1], vec![2, 7]).unwrap_err();
    assert!(err.to_string().contains("outside"));
}

#[test]
fn test_neighbours_wrap_around() {
    let tours = pair();
    assert_eq!(tours.successor(TourId::A, 5).unwrap(), 0);
    assert_eq!(tours.predecessor(TourId::A, 0).unwrap(), 5);
    assert_eq!(tours.successor(TourId::B, 7).unwrap(), 8);
    assert_eq!(tours.position(TourId::B, 8).unwrap(), 2);
}

#[test]
fn test_lookup_in_wrong_tour_fails() {
    let tours = pair();
    let err = tours.successor(TourId::B, 0).unwrap_err();
    assert!(matches!(
        err,
        DuotourError::NodeNotFound {
            node: 0,
            tour: TourId::B
        }
    ));
    assert!(!tours.contains(TourId::A, 42));
}

#[test]
fn test_reverse_short_segment() {
    let mut tours = pair();
    tours.reverse_segment(TourId::A, 1, 3);
    assert_eq!(tours.tour(TourId::A), &[0, 3, 2, 1, 4, 5]);
    assert_eq!(tours.position(TourId::A, 1).unwrap(), 3);
    tours.validate().unwrap();
}

#[test]
fn test_reverse_wrapping_segment() {
    let mut tours = pair();
    tours.reverse_segment(TourId::A, 5, 0);
    assert_eq!(tours.tour(TourId::A), &[5, 1, 2, 3, 4, 0]);
    tours.validate().unwrap();
}

#[test]
fn test_reverse_long_segment_reverses_complement() {
    let mut tours = pair();
    tours.reverse_segment(TourId::A, 1, 5);
    // Complement {0} is a single node, so the array is untouched
    assert_eq!(tours.tour(TourId::A), &[0, 1, 2, 3, 4, 5]);
    assert_cycle_eq(tours.tour(TourId::A), &[0, 5, 4, 3, 2, 1]);

    tours.reverse_segment(TourId::A, 0, 3);
    assert_cycle_eq(tours.tour(TourId::A), &[3, 2, 1, 0, 4, 5]);
    tours.validate().unwrap();
}

#[test]
fn test_exchange_updates_index() {
    let mut tours = pair();
    tours.exchange(0, 2);
    assert_eq!(tours.tour(TourId::A), &[8, 1, 2, 3, 4, 5]);
    assert_eq!(tours.tour(TourId::B), &[6, 7, 0]);
    assert_eq!(
        tours.slot(0),
        Some(Slot {
            tour: TourId::B,
            position: 2
        })
    );
    assert_eq!(tours.successor(TourId::B, 0).unwrap(), 6);
    tours.validate().unwrap();
}

#[test]
fn test_lengths() {
    let points = [
        Point::new(0, 0),
        Point::new(0, 3),
        Point::new(4, 3),
        Point::new(10, 10),
        Point::new(10, 11),
    ];
    let matrix = DistanceMatrix::from_points(&points);
    let tours = TourPair::new(vec![0, 1, 2], vec![3, 4]).unwrap();

    assert_eq!(tours.tour_length(&matrix, TourId::A), 3 + 4 + 5);
    assert_eq!(tours.tour_length(&matrix, TourId::B), 2);
    assert_eq!(tours.total_length(&matrix), 14);
}

#[test]
fn test_into_tours() {
    let (a, b) = pair().into_tours();
    assert_eq!(a, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(b, vec![6, 7, 8]);
}
