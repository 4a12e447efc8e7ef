//! Distance oracles.
//!
//! The search never looks at coordinates. It asks a [`DistanceOracle`] for
//! the cost between two nodes, and every cost is precomputed, symmetric and
//! fixed for the duration of a run.

use std::fmt::Debug;

use crate::error::{DuotourError, Result};
use crate::tour::NodeId;

/// Symmetric integer cost between two nodes.
pub trait DistanceOracle: Send + Sync + Debug {
    /// Returns the cost of the edge `(a, b)`.
    fn distance(&self, a: NodeId, b: NodeId) -> i64;

    /// Number of nodes the oracle is defined on.
    fn node_count(&self) -> usize;
}

/// A 2-D point with integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance rounded to the nearest integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use duotour_core::Point;
    ///
    /// assert_eq!(Point::new(0, 0).rounded_distance(Point::new(3, 4)), 5);
    /// assert_eq!(Point::new(0, 0).rounded_distance(Point::new(1, 1)), 1);
    /// ```
    pub fn rounded_distance(self, other: Point) -> i64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt().round() as i64
    }
}

/// Dense row-major distance matrix.
///
/// # Examples
///
/// ```
/// use duotour_core::{DistanceMatrix, DistanceOracle, Point};
///
/// let matrix = DistanceMatrix::from_points(&[
///     Point::new(0, 0),
///     Point::new(0, 10),
///     Point::new(10, 10),
/// ]);
///
/// assert_eq!(matrix.node_count(), 3);
/// assert_eq!(matrix.distance(0, 2), 14);
/// assert_eq!(matrix.distance(2, 0), 14);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    n: usize,
    costs: Vec<i64>,
}

impl DistanceMatrix {
    /// Builds the matrix of rounded Euclidean distances between `points`.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut costs = vec![0; n * n];
        for (i, a) in points.iter().enumerate() {
            for (j, b) in points.iter().enumerate().skip(i + 1) {
                let d = a.rounded_distance(*b);
                costs[i * n + j] = d;
                costs[j * n + i] = d;
            }
        }
        Self { n, costs }
    }

    /// Builds a matrix from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`DuotourError::DistanceMatrix`] if the rows are not square,
    /// the matrix is not symmetric, or any cost is negative.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let n = rows.len();
        let mut costs = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(DuotourError::DistanceMatrix(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            costs.extend_from_slice(row);
        }

        for i in 0..n {
            for j in i..n {
                let d = costs[i * n + j];
                if d < 0 {
                    return Err(DuotourError::DistanceMatrix(format!(
                        "negative cost {} between {} and {}",
                        d, i, j
                    )));
                }
                if d != costs[j * n + i] {
                    return Err(DuotourError::DistanceMatrix(format!(
                        "asymmetric cost between {} and {}",
                        i, j
                    )));
                }
            }
        }

        Ok(Self { n, costs })
    }
}

impl DistanceOracle for DistanceMatrix {
    #[inline]
    fn distance(&self, a: NodeId, b: NodeId) -> i64 {
        self.costs[a * self.n + b]
    }

    #[inline]
    fn node_count(&self) -> usize {
        self.n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_is_symmetric_with_zero_diagonal() {
        let matrix = DistanceMatrix::from_points(&[
            Point::new(0, 0),
            Point::new(3, 4),
            Point::new(-6, 8),
        ]);

        for i in 0..3 {
            assert_eq!(matrix.distance(i, i), 0);
            for j in 0..3 {
                assert_eq!(matrix.distance(i, j), matrix.distance(j, i));
            }
        }
        assert_eq!(matrix.distance(0, 1), 5);
        assert_eq!(matrix.distance(0, 2), 10);
        assert_eq!(matrix.distance(1, 2), 10);
    }

    #[test]
    fn test_from_rows_accepts_valid_matrix() {
        let matrix = DistanceMatrix::from_rows(vec![vec![0, 2, 9], vec![2, 0, 4], vec![9, 4, 0]])
            .unwrap();
        assert_eq!(matrix.node_count(), 3);
        assert_eq!(matrix.distance(2, 1), 4);
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let err = DistanceMatrix::from_rows(vec![vec![0, 1], vec![1]]).unwrap_err();
        assert!(matches!(err, DuotourError::DistanceMatrix(_)));
    }

    #[test]
    fn test_from_rows_rejects_asymmetric() {
        let err = DistanceMatrix::from_rows(vec![vec![0, 1], vec![2, 0]]).unwrap_err();
        assert!(err.to_string().contains("asymmetric"));
    }

    #[test]
    fn test_from_rows_rejects_negative() {
        let err = DistanceMatrix::from_rows(vec![vec![0, -1], vec![-1, 0]]).unwrap_err();
        assert!(err.to_string().contains("negative"));
    }
}
