//! Error types for duotour

use thiserror::Error;

use crate::tour::{NodeId, TourId};

/// Main error type for duotour operations
#[derive(Debug, Error)]
pub enum DuotourError {
    /// A tour has fewer nodes than a cycle needs
    #[error("Tour {tour} has {len} nodes, at least {min} required")]
    TourTooShort { tour: TourId, len: usize, min: usize },

    /// The two tours do not partition `0..n`
    #[error("Partition error: {0}")]
    Partition(String),

    /// A node was expected in a tour but is elsewhere
    #[error("Node {node} not found in tour {tour}")]
    NodeNotFound { node: NodeId, tour: TourId },

    /// An edge exchange whose two anchors coincide
    #[error("Degenerate move on node {0}")]
    DegenerateMove(NodeId),

    /// Tracked state disagrees with a from-scratch recomputation
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// The distance matrix is not square, symmetric and non-negative
    #[error("Distance matrix error: {0}")]
    DistanceMatrix(String),

    /// Error in search configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for duotour operations
pub type Result<T> = std::result::Result<T, DuotourError>;
