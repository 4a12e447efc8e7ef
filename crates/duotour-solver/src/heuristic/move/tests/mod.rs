//! Tests for the move module.

use super::*;
use duotour_core::{DistanceMatrix, DuotourError, Point, TourId};

mod edge_exchange;
mod inter_swap;

/// `n` points ten apart on a line.
fn line_matrix(n: usize) -> DistanceMatrix {
    let points: Vec<Point> = (0..n as i64).map(|x| Point::new(x * 10, 0)).collect();
    DistanceMatrix::from_points(&points)
}

#[test]
fn test_tour_move_dispatch() {
    let edge: TourMove = EdgeExchangeMove::new(TourId::A, 0, 3, 1, 4, -7).into();
    let swap: TourMove = InterSwapMove::new(1, 5, 0, 2, 4, 6, -2).into();

    assert_eq!(edge.delta(), -7);
    assert_eq!(swap.delta(), -2);
    assert_eq!(edge.kind_name(), "EdgeExchange");
    assert_eq!(swap.kind_name(), "InterSwap");

    let mut edge = edge;
    edge.set_delta(-1);
    assert_eq!(edge.delta(), -1);
}
