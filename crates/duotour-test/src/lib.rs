//! Shared test fixtures for duotour crates.
//!
//! This crate provides instances and from-scratch checks for testing.
//! It depends only on `duotour-core` so every crate can dev-depend on it.
//!
//! - [`crossed`] - six points in two far-apart triangles, started crossed
//! - [`random`] - seeded random instances
//! - [`brute_force`] - exhaustive optimum for tiny instances
//! - [`invariants`] - partition and cycle checks
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! duotour-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use duotour_test::crossed;
//! use duotour_test::invariants::assert_valid_partition;
//! ```

pub mod brute_force;
pub mod crossed;
pub mod invariants;
pub mod random;

pub use brute_force::optimal_length;
pub use invariants::{assert_valid_partition, node_set, undirected_edges};
pub use random::random_instance;
