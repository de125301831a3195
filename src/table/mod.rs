//! Table Module
//!
//! Open-addressing hash table keyed by `i32`.
//!
//! ## Responsibilities
//! - Place entries by linear probing from `|key| mod capacity`
//! - Keep deleted slots as tombstones so probe chains stay intact
//! - Grow when a probe wraps without finding room
//! - Shrink when the table becomes sparse
//!
//! ## Slot States
//! ```text
//!   Empty ──insert──▶ Occupied ──remove──▶ Tombstone
//!                        ▲                     │
//!                        └───────insert────────┘
//! ```
//! Tombstones are dropped whenever the slot vector is rebuilt.

mod iter;
mod probing;

pub use iter::Iter;
pub use probing::ProbingTable;

/// Key type stored in the table
pub type Key = i32;

/// Value reported by [`ProbingTable::keys`] for empty and tombstoned slots
pub const EMPTY_KEY_SENTINEL: Key = 0;

/// A single slot of the table
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<V> {
    /// Never used since the last rebuild; terminates a probe
    Empty,

    /// A live entry
    Occupied { key: Key, value: V },

    /// A removed entry; does NOT terminate a probe
    Tombstone,
}

impl<V> Slot<V> {
    /// Key of an occupied slot
    pub fn key(&self) -> Option<Key> {
        match self {
            Slot::Occupied { key, .. } => Some(*key),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&V> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut V> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<V> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied { .. })
    }
}
