//! Search entry point that hides all internal wiring.

use std::io::ErrorKind;
use std::path::Path;

use duotour_config::{ConfigError, SearchConfig};
use duotour_core::{DistanceOracle, DuotourError, NodeId, Result, TourPair};
use duotour_solver::{improve, SearchOutcome};
use tracing::debug;

/// Configuration file read by [`run_search`] when present.
pub const CONFIG_FILE: &str = "duotour.toml";

/// Loads a TOML search configuration from `path`.
///
/// A missing file yields the defaults. A file that exists but cannot be
/// read, parsed or validated is an error.
pub fn load_config(path: impl AsRef<Path>) -> Result<SearchConfig> {
    let path = path.as_ref();
    match SearchConfig::load(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            debug!(file = %path.display(), "using default search configuration");
            Ok(SearchConfig::default())
        }
        Err(e) => Err(DuotourError::Config(format!("{}: {}", path.display(), e))),
    }
}

/// Improves the starting tours `a` and `b` with the configuration in
/// [`CONFIG_FILE`], or the defaults if there is no such file.
///
/// Returns the improved tours and the search outcome.
pub fn run_search<D: DistanceOracle + ?Sized>(
    a: Vec<NodeId>,
    b: Vec<NodeId>,
    oracle: &D,
) -> Result<(Vec<NodeId>, Vec<NodeId>, SearchOutcome)> {
    let config = load_config(CONFIG_FILE)?;
    run_search_with_config(a, b, oracle, &config)
}

/// Improves the starting tours `a` and `b` with an explicit configuration.
pub fn run_search_with_config<D: DistanceOracle + ?Sized>(
    a: Vec<NodeId>,
    b: Vec<NodeId>,
    oracle: &D,
    config: &SearchConfig,
) -> Result<(Vec<NodeId>, Vec<NodeId>, SearchOutcome)> {
    let mut tours = TourPair::new(a, b)?;
    let outcome = improve(&mut tours, oracle, config)?;
    let (a, b) = tours.into_tours();
    Ok((a, b, outcome))
}
