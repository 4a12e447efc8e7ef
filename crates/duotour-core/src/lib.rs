//! Core types for duotour.
//!
//! This crate provides the building blocks shared by every search:
//! - [`NodeId`], [`TourId`] and [`Slot`]: identities and positions
//! - [`TourPair`]: two disjoint cyclic tours partitioning `0..n`
//! - [`DistanceOracle`] and [`DistanceMatrix`]: symmetric integer costs
//! - [`DuotourError`]: the error type for every fallible operation

pub mod distance;
pub mod error;
pub mod tour;

pub use distance::{DistanceMatrix, DistanceOracle, Point};
pub use error::{DuotourError, Result};
pub use tour::{NodeId, Slot, TourId, TourPair};
