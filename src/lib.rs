//! # probetable
//!
//! A bounded associative container mapping `i32` keys to arbitrary values:
//! - Open addressing with linear probing
//! - Tombstone deletion that keeps probe chains intact
//! - Automatic growth when a probe wraps, shrink when the table turns sparse
//! - A hard upper bound on the number of entries
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       ProbingTable<V>                        │
//! │        insert / search / remove / size / keys / iter         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  home = |key| mod capacity, step +1
//!                       ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Slot 0  │  Slot 1  │  Slot 2  │  ...      │  Slot cap-1     │
//! │  Empty   │ Occupied │ Tombstone│           │  Occupied       │
//! └─────────────────────────────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Grow     │          │   Shrink    │
//!   │ (probe wrap)│          │ (sparsity)  │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use probetable::{ProbingTable, TableError};
//!
//! let mut table = ProbingTable::new();
//! table.insert(10, "ten").unwrap();
//! table.insert(18, "eighteen").unwrap();
//! assert_eq!(table.search(18), Some(&"eighteen"));
//!
//! table.remove(18);
//! assert_eq!(table.search(18), None);
//!
//! for key in 0..16 {
//!     table.insert(key * 2, "even").unwrap();
//! }
//! assert_eq!(table.size(), 16);
//! assert_eq!(
//!     table.insert(99, "full"),
//!     Err(TableError::CapacityExceeded { max_size: 16 })
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod table;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{TableError, Result};
pub use config::{TableConfig, TableConfigBuilder};
pub use table::{Key, ProbingTable, Slot, EMPTY_KEY_SENTINEL};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of probetable
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
