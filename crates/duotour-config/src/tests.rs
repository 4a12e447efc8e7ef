//! Tests for search configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        search_type = "greedy"
        environment_mode = "reproducible"
        random_seed = 42
        confirm_local_optimum = false
    "#;

    let config = SearchConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.search_type, SearchType::Greedy);
    assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
    assert_eq!(config.random_seed, Some(42));
    assert!(!config.confirm_local_optimum);
    assert_eq!(config.stale_move_limit, None);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        search_type: steepest
        environment_mode: full_assert
        random_seed: 7
        split_ratio: 0.5
    "#;

    let config = SearchConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.search_type, SearchType::Steepest);
    assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
    assert_eq!(config.random_seed, Some(7));
    assert_eq!(config.split_ratio, Some(0.5));
    assert!(config.confirm_local_optimum);
}

#[test]
fn test_empty_toml_is_default() {
    let config = SearchConfig::from_toml_str("").unwrap();
    assert_eq!(config.search_type, SearchType::CachedSteepest);
    assert_eq!(config.environment_mode, EnvironmentMode::NonReproducible);
    assert!(config.confirm_local_optimum);
}

#[test]
fn test_unknown_search_type_rejected() {
    let err = SearchConfig::from_toml_str(r#"search_type = "annealing""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_invalid_ranges_rejected() {
    let err = SearchConfig::from_toml_str("split_ratio = 1.5").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = SearchConfig::from_yaml_str("stale_move_limit: 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_missing_file() {
    let err = SearchConfig::load("/nonexistent/duotour.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = SearchConfig::new()
        .with_search_type(SearchType::Greedy)
        .with_random_seed(123)
        .with_environment_mode(EnvironmentMode::FastAssert)
        .with_stale_move_limit(8)
        .with_confirm_local_optimum(false);

    assert_eq!(config.search_type, SearchType::Greedy);
    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.stale_move_limit, Some(8));
    assert!(config.environment_mode.is_asserted());
    assert!(!config.environment_mode.is_fully_asserted());
    assert!(config.validate().is_ok());
}
