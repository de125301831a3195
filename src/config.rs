//! Configuration for probetable
//!
//! Centralized resize constants with sensible defaults.

use crate::error::{Result, TableError};

/// Sizing policy for a [`ProbingTable`](crate::ProbingTable)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    // -------------------------------------------------------------------------
    // Capacity Bounds
    // -------------------------------------------------------------------------
    /// Slot count of a freshly created (or cleared) table
    pub initial_capacity: usize,

    /// Upper bound for both the slot count and the number of stored entries
    pub max_capacity: usize,

    /// Shrinking never goes below this slot count
    pub min_capacity: usize,

    // -------------------------------------------------------------------------
    // Resize Policy
    // -------------------------------------------------------------------------
    /// Shrink once `len <= capacity / shrink_divisor`
    pub shrink_divisor: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 4,
            max_capacity: 16,
            min_capacity: 4,
            shrink_divisor: 4,
        }
    }
}

impl TableConfig {
    /// Create a new config builder
    pub fn builder() -> TableConfigBuilder {
        TableConfigBuilder::default()
    }

    /// Check that the bounds are consistent.
    ///
    /// Requires `0 < min_capacity <= initial_capacity <= max_capacity` and a
    /// shrink divisor of at least 2.
    pub fn validate(&self) -> Result<()> {
        if self.min_capacity == 0 {
            return Err(TableError::Config("min_capacity must be > 0".to_string()));
        }
        if self.min_capacity > self.initial_capacity {
            return Err(TableError::Config(format!(
                "min_capacity ({}) exceeds initial_capacity ({})",
                self.min_capacity, self.initial_capacity
            )));
        }
        if self.initial_capacity > self.max_capacity {
            return Err(TableError::Config(format!(
                "initial_capacity ({}) exceeds max_capacity ({})",
                self.initial_capacity, self.max_capacity
            )));
        }
        if self.shrink_divisor < 2 {
            return Err(TableError::Config(format!(
                "shrink_divisor must be >= 2, got {}",
                self.shrink_divisor
            )));
        }
        Ok(())
    }
}

/// Builder for TableConfig
#[derive(Default)]
pub struct TableConfigBuilder {
    config: TableConfig,
}

impl TableConfigBuilder {
    /// Set the slot count of a new table
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Set the hard upper bound on slots and entries
    pub fn max_capacity(mut self, capacity: usize) -> Self {
        self.config.max_capacity = capacity;
        self
    }

    /// Set the shrink floor
    pub fn min_capacity(mut self, capacity: usize) -> Self {
        self.config.min_capacity = capacity;
        self
    }

    /// Set the sparsity ratio that triggers a shrink
    pub fn shrink_divisor(mut self, divisor: usize) -> Self {
        self.config.shrink_divisor = divisor;
        self
    }

    pub fn build(self) -> TableConfig {
        self.config
    }
}
