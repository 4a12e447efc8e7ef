//! Incremental regeneration after an applied move.
//!
//! Only nodes whose incident edges changed can take part in a newly
//! improving move. For each such anchor the updater runs the O(n) anchored
//! generators instead of a full enumeration.
//!
//! - Edge exchange on tour T: the four endpoints of the two new edges get
//!   edge exchanges against T and swaps against the other tour.
//! - Inter-tour swap: the two swapped nodes and their four former
//!   neighbours get swaps against the opposite tour. Each swapped node and
//!   its new predecessor get edge exchanges within its new tour.

use smallvec::SmallVec;

use duotour_core::{DistanceOracle, NodeId, Result, TourPair};

use super::generator::MoveGenerator;
use super::r#move::TourMove;

type Anchors = SmallVec<[NodeId; 6]>;

fn anchors(nodes: impl IntoIterator<Item = NodeId>) -> Anchors {
    let mut out = Anchors::new();
    for node in nodes {
        if !out.contains(&node) {
            out.push(node);
        }
    }
    out
}

/// Returns the improving moves created by `applied`, sorted ascending by
/// delta.
///
/// `tours` must already reflect `applied`.
pub fn regenerate<D: DistanceOracle + ?Sized>(
    generator: &MoveGenerator<'_, D>,
    tours: &TourPair,
    applied: &TourMove,
) -> Result<Vec<TourMove>> {
    let mut batch = Vec::new();

    match applied {
        TourMove::EdgeExchange(m) => {
            for anchor in anchors(m.endpoints()) {
                generator.push_edges_from(tours, anchor, &mut batch)?;
                generator.push_swaps_from(tours, anchor, &mut batch)?;
            }
        }
        TourMove::InterSwap(m) => {
            for node in anchors(m.affected()) {
                generator.push_swaps_from(tours, node, &mut batch)?;
            }
            for anchor in anchors([m.n2(), m.pn1(), m.n1(), m.pn2()]) {
                generator.push_edges_from(tours, anchor, &mut batch)?;
            }
        }
    }

    batch.sort_by_key(TourMove::delta);
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use duotour_core::TourId;
    use duotour_test::random_instance;

    use crate::heuristic::r#move::EdgeExchangeMove;

    /// Every improving move in a fresh enumeration that touches a changed
    /// edge must be regenerated, up to orientation of the anchored pair.
    fn assert_covers_changed_edges(
        tours: &TourPair,
        before: &TourPair,
        batch: &[TourMove],
        full: &[TourMove],
    ) {
        let had_edge = |t: TourId, a: NodeId, b: NodeId| {
            before.contains(t, a)
                && before.contains(t, b)
                && (before.successor(t, a).ok() == Some(b)
                    || before.successor(t, b).ok() == Some(a))
        };

        for m in full {
            let new_edge = match m {
                TourMove::EdgeExchange(e) => {
                    !had_edge(e.tour(), e.n1(), e.sn1()) || !had_edge(e.tour(), e.n2(), e.sn2())
                }
                TourMove::InterSwap(s) => {
                    !had_edge(TourId::A, s.pn1(), s.n1())
                        || !had_edge(TourId::A, s.n1(), s.sn1())
                        || !had_edge(TourId::B, s.pn2(), s.n2())
                        || !had_edge(TourId::B, s.n2(), s.sn2())
                }
            };
            if !new_edge || !m.classify(tours).is_applicable() {
                continue;
            }
            let found = batch.contains(m)
                || match m {
                    TourMove::EdgeExchange(e) => {
                        let flipped = EdgeExchangeMove::new(
                            e.tour(),
                            e.n2(),
                            e.n1(),
                            e.sn2(),
                            e.sn1(),
                            e.delta(),
                        );
                        batch.contains(&flipped.into())
                    }
                    TourMove::InterSwap(_) => false,
                };
            assert!(found, "{:?} touches a new edge but was not regenerated", m);
        }
    }

    #[test]
    fn test_regenerate_after_swap_covers_new_edges() {
        let (matrix, mut tours) = random_instance(30, 21);
        let generator = MoveGenerator::new(&matrix);
        let first_swap = generator
            .enumerate(&tours)
            .into_iter()
            .find(|m| matches!(m, TourMove::InterSwap(_)))
            .unwrap();

        let before = tours.clone();
        first_swap.execute(&mut tours).unwrap();
        let batch = regenerate(&generator, &tours, &first_swap).unwrap();

        assert!(batch.windows(2).all(|w| w[0].delta() <= w[1].delta()));
        assert_covers_changed_edges(&tours, &before, &batch, &generator.enumerate(&tours));
    }

    #[test]
    fn test_regenerate_after_edge_exchange_covers_new_edges() {
        let (matrix, mut tours) = random_instance(30, 8);
        let generator = MoveGenerator::new(&matrix);
        let first_edge = generator
            .enumerate(&tours)
            .into_iter()
            .find(|m| matches!(m, TourMove::EdgeExchange(_)) && m.classify(&tours).is_applicable())
            .unwrap();

        let before = tours.clone();
        first_edge.execute(&mut tours).unwrap();
        let batch = regenerate(&generator, &tours, &first_edge).unwrap();

        assert!(batch.iter().all(|m| m.delta() < 0));
        assert_covers_changed_edges(&tours, &before, &batch, &generator.enumerate(&tours));
    }

    #[test]
    fn test_anchors_are_deduplicated() {
        let a = anchors([3, 1, 3, 2, 1]);
        assert_eq!(a.as_slice(), &[3, 1, 2]);
    }
}
