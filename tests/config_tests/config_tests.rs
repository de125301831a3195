//! TableConfig Tests
//!
//! Tests verify:
//! - Default sizing constants
//! - Builder overrides
//! - Validation of inconsistent bounds
//! - Tables honoring custom bounds

use probetable::{ProbingTable, TableConfig, TableError};

// =============================================================================
// Defaults and Builder Tests
// =============================================================================

#[test]
fn test_default_config() {
    let config = TableConfig::default();
    assert_eq!(config.initial_capacity, 4);
    assert_eq!(config.max_capacity, 16);
    assert_eq!(config.min_capacity, 4);
    assert_eq!(config.shrink_divisor, 4);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder_overrides() {
    let config = TableConfig::builder()
        .initial_capacity(8)
        .max_capacity(64)
        .min_capacity(2)
        .shrink_divisor(8)
        .build();

    assert_eq!(config.initial_capacity, 8);
    assert_eq!(config.max_capacity, 64);
    assert_eq!(config.min_capacity, 2);
    assert_eq!(config.shrink_divisor, 8);
}

#[test]
fn test_builder_without_overrides_matches_default() {
    assert_eq!(TableConfig::builder().build(), TableConfig::default());
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_zero_min_capacity_rejected() {
    let config = TableConfig::builder().min_capacity(0).build();
    assert!(matches!(config.validate(), Err(TableError::Config(_))));
}

#[test]
fn test_min_above_initial_rejected() {
    let config = TableConfig::builder().min_capacity(8).build();
    assert!(matches!(config.validate(), Err(TableError::Config(_))));
}

#[test]
fn test_initial_above_max_rejected() {
    let config = TableConfig::builder().initial_capacity(32).build();
    assert!(matches!(config.validate(), Err(TableError::Config(_))));
}

#[test]
fn test_small_shrink_divisor_rejected() {
    let config = TableConfig::builder().shrink_divisor(1).build();
    let err = config.validate().unwrap_err();
    assert_eq!(err.to_string(), "Configuration error: shrink_divisor must be >= 2, got 1");
}

#[test]
fn test_with_config_rejects_invalid() {
    let config = TableConfig::builder().max_capacity(2).build();
    let result: probetable::Result<ProbingTable<u8>> = ProbingTable::with_config(config);
    assert!(matches!(result, Err(TableError::Config(_))));
}

// =============================================================================
// Custom Bounds Tests
// =============================================================================

#[test]
fn test_larger_max_capacity() {
    let config = TableConfig::builder().max_capacity(32).build();
    let mut table = ProbingTable::with_config(config).unwrap();

    for key in 0..32 {
        table.insert(key, key).unwrap();
    }

    assert_eq!(table.capacity(), 32);
    assert_eq!(table.size(), 32);
    assert_eq!(
        table.insert(32, 32),
        Err(TableError::CapacityExceeded { max_size: 32 })
    );
}

#[test]
fn test_growth_capped_at_non_power_of_two_max() {
    let config = TableConfig::builder().max_capacity(12).build();
    let mut table = ProbingTable::with_config(config).unwrap();

    for key in 0..12 {
        table.insert(key, ()).unwrap();
    }

    assert_eq!(table.capacity(), 12);
    assert_eq!(table.keys(), (0..12).collect::<Vec<_>>());
    assert!(table.insert(12, ()).is_err());
}

#[test]
fn test_config_accessor() {
    let config = TableConfig::builder().max_capacity(20).build();
    let table: ProbingTable<()> = ProbingTable::with_config(config.clone()).unwrap();
    assert_eq!(table.config(), &config);
}
