//! Sorted move cache.
//!
//! Holds candidate moves in ascending delta order, so the first applicable
//! entry found by a front-to-back scan is the best one. Duplicates are
//! permitted; validity is established lazily by classification.

use super::r#move::TourMove;

/// A cached move and how often it has been skipped as possibly applicable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachedMove {
    pub mv: TourMove,
    pub misses: u32,
}

impl CachedMove {
    pub fn new(mv: TourMove) -> Self {
        Self { mv, misses: 0 }
    }

    #[inline]
    pub fn delta(&self) -> i64 {
        self.mv.delta()
    }
}

/// Moves sorted ascending by delta.
///
/// # Example
///
/// ```
/// use duotour_core::TourId;
/// use duotour_solver::heuristic::MoveCache;
/// use duotour_solver::heuristic::r#move::{EdgeExchangeMove, TourMove};
///
/// let edge = |n1: usize, delta: i64| -> TourMove {
///     EdgeExchangeMove::new(TourId::A, n1, n1 + 2, n1 + 1, n1 + 3, delta).into()
/// };
///
/// let mut cache = MoveCache::from_moves(vec![edge(0, -3), edge(1, -9)]);
/// cache.insert_sorted(edge(2, -5));
/// cache.merge_sorted(vec![edge(3, -10), edge(4, -1)]);
///
/// let deltas: Vec<i64> = cache.iter().map(|e| e.delta()).collect();
/// assert_eq!(deltas, vec![-10, -9, -5, -3, -1]);
///
/// cache.remove_at(&[0, 3]);
/// let deltas: Vec<i64> = cache.iter().map(|e| e.delta()).collect();
/// assert_eq!(deltas, vec![-9, -5, -1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MoveCache {
    entries: Vec<CachedMove>,
}

impl MoveCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cache from unsorted moves, keeping generation order among
    /// equal deltas.
    pub fn from_moves(mut moves: Vec<TourMove>) -> Self {
        moves.sort_by_key(TourMove::delta);
        Self {
            entries: moves.into_iter().map(CachedMove::new).collect(),
        }
    }

    /// Replaces the contents with `moves`.
    pub fn replace(&mut self, moves: Vec<TourMove>) {
        *self = Self::from_moves(moves);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CachedMove> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CachedMove> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, CachedMove> {
        self.entries.iter_mut()
    }

    /// Delta of the first entry.
    pub fn best_delta(&self) -> Option<i64> {
        self.entries.first().map(CachedMove::delta)
    }

    pub fn is_sorted(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].delta() <= w[1].delta())
    }

    /// Inserts after every entry with an equal or smaller delta.
    pub fn insert_sorted(&mut self, mv: TourMove) {
        let delta = mv.delta();
        let index = self.entries.partition_point(|e| e.delta() <= delta);
        self.entries.insert(index, CachedMove::new(mv));
    }

    /// Merges a batch sorted ascending by delta in O(cache + batch).
    ///
    /// Existing entries come first among equal deltas.
    pub fn merge_sorted(&mut self, batch: Vec<TourMove>) {
        debug_assert!(batch.windows(2).all(|w| w[0].delta() <= w[1].delta()));
        if batch.is_empty() {
            return;
        }

        let existing = std::mem::take(&mut self.entries);
        let mut merged = Vec::with_capacity(existing.len() + batch.len());
        let mut left = existing.into_iter().peekable();
        let mut right = batch.into_iter().peekable();

        loop {
            let take_left = match (left.peek(), right.peek()) {
                (Some(l), Some(r)) => l.delta() <= r.delta(),
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };
            if take_left {
                merged.extend(left.next());
            } else {
                merged.extend(right.next().map(CachedMove::new));
            }
        }

        self.entries = merged;
    }

    /// Removes the entries at `indices`, which must be strictly ascending.
    ///
    /// The remaining entries keep their relative order.
    pub fn remove_at(&mut self, indices: &[usize]) {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        if indices.is_empty() {
            return;
        }

        let mut pending = indices.iter().copied().peekable();
        let mut index = 0;
        self.entries.retain(|_| {
            let remove = pending.next_if_eq(&index).is_some();
            index += 1;
            !remove
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
