//! ProbingTable implementation
//!
//! Linear probing over a `Vec<Slot<V>>` with tombstone deletion and a
//! grow-on-exhaustion / shrink-on-sparsity resize policy.

use std::mem;

use crate::config::TableConfig;
use crate::error::{Result, TableError};

use super::{Iter, Key, Slot, EMPTY_KEY_SENTINEL};

/// Outcome of walking a probe chain for an insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// Slot already holding the key
    Found(usize),

    /// First non-occupied slot of the chain
    Vacant(usize),

    /// Every slot is occupied by some other key
    Exhausted,
}

/// Bounded open-addressing hash table
///
/// ## Sizing
/// - Starts at `initial_capacity` slots
/// - Doubles (up to `max_capacity`) when a probe wraps with no free slot
/// - Halves (down to `min_capacity`) when `len <= capacity / shrink_divisor`
///   after a removal
/// - Never holds more than `max_capacity` entries
///
/// Every resize rebuilds the slot vector from the occupied entries, in old
/// slot order, through the regular insert path. Tombstones do not survive it.
#[derive(Debug, Clone)]
pub struct ProbingTable<V> {
    /// Sizing policy
    config: TableConfig,

    /// Slot vector, `slots.len()` is the current capacity
    slots: Vec<Slot<V>>,

    /// Number of occupied slots
    len: usize,
}

impl<V> ProbingTable<V> {
    /// Create an empty table with the default sizing policy
    pub fn new() -> Self {
        Self::from_config(TableConfig::default())
    }

    /// Create an empty table with a custom sizing policy
    pub fn with_config(config: TableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: TableConfig) -> Self {
        let slots = empty_slots(config.initial_capacity);
        Self {
            config,
            slots,
            len: 0,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Number of stored entries
    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Insert or overwrite `key`, returning the previous value if any.
    ///
    /// Fails with [`TableError::CapacityExceeded`] when the table already holds
    /// `max_capacity` entries and `key` is not one of them. The table is left
    /// untouched in that case.
    pub fn insert(&mut self, key: Key, value: V) -> Result<Option<V>> {
        let max_size = self.config.max_capacity;
        if self.len >= max_size && !self.contains_key(key) {
            tracing::warn!("Insert of key {} rejected, table holds {} entries", key, self.len);
            return Err(TableError::CapacityExceeded { max_size });
        }

        let previous = self.place(key, value);
        tracing::trace!("Inserted key {} (len={}, capacity={})", key, self.len, self.capacity());
        Ok(previous)
    }

    /// Look up the value stored under `key`
    pub fn search(&self, key: Key) -> Option<&V> {
        self.find(key).and_then(|index| self.slots[index].value())
    }

    pub fn search_mut(&mut self, key: Key) -> Option<&mut V> {
        let index = self.find(key)?;
        self.slots[index].value_mut()
    }

    pub fn contains_key(&self, key: Key) -> bool {
        self.find(key).is_some()
    }

    /// Remove `key`, leaving a tombstone in its slot, and return its value.
    ///
    /// Absent keys are a no-op. A successful removal may shrink the table.
    pub fn remove(&mut self, key: Key) -> Option<V> {
        let index = self.find(key)?;
        let removed = mem::replace(&mut self.slots[index], Slot::Tombstone).into_value();
        self.len -= 1;
        tracing::trace!("Removed key {} from slot {} (len={})", key, index, self.len);

        self.shrink_if_sparse();
        removed
    }

    /// Positional key snapshot, one entry per slot.
    ///
    /// Empty and tombstoned slots report [`EMPTY_KEY_SENTINEL`], which cannot be
    /// told apart from a stored key `0`. Prefer [`key_slots`](Self::key_slots).
    pub fn keys(&self) -> Vec<Key> {
        self.slots
            .iter()
            .map(|slot| slot.key().unwrap_or(EMPTY_KEY_SENTINEL))
            .collect()
    }

    /// Positional key snapshot with `None` for empty and tombstoned slots
    pub fn key_slots(&self) -> Vec<Option<Key>> {
        self.slots.iter().map(Slot::key).collect()
    }

    /// Iterate over live entries in slot order
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.slots, self.len)
    }

    /// Drop every entry and return to `initial_capacity`
    pub fn clear(&mut self) {
        self.slots = empty_slots(self.config.initial_capacity);
        self.len = 0;
    }

    // =========================================================================
    // Probing
    // =========================================================================

    /// Home slot of `key` for the current capacity
    fn home(&self, key: Key) -> usize {
        key.unsigned_abs() as usize % self.slots.len()
    }

    /// Slot index holding `key`, if present.
    ///
    /// Stops at the first empty slot or after visiting every slot once.
    fn find(&self, key: Key) -> Option<usize> {
        let capacity = self.slots.len();
        let start = self.home(key);

        for step in 0..capacity {
            let index = (start + step) % capacity;
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied { key: stored, .. } if *stored == key => return Some(index),
                _ => {}
            }
        }
        None
    }

    /// Walk the probe chain of `key` looking for either the key itself or
    /// the first reusable slot.
    ///
    /// Tombstones are remembered but skipped so a matching key further down
    /// the chain is still found.
    fn probe(&self, key: Key) -> Probe {
        let capacity = self.slots.len();
        let start = self.home(key);
        let mut first_tombstone = None;

        for step in 0..capacity {
            let index = (start + step) % capacity;
            match &self.slots[index] {
                Slot::Occupied { key: stored, .. } if *stored == key => return Probe::Found(index),
                Slot::Occupied { .. } => {}
                Slot::Tombstone => {
                    first_tombstone.get_or_insert(index);
                }
                Slot::Empty => return Probe::Vacant(first_tombstone.unwrap_or(index)),
            }
        }

        first_tombstone.map_or(Probe::Exhausted, Probe::Vacant)
    }

    /// Store an entry, growing as often as needed.
    ///
    /// Callers guarantee `len < max_capacity` or that `key` is present, so an
    /// exhausted probe always has room to grow.
    fn place(&mut self, key: Key, value: V) -> Option<V> {
        match self.probe(key) {
            Probe::Found(index) => {
                mem::replace(&mut self.slots[index], Slot::Occupied { key, value }).into_value()
            }
            Probe::Vacant(index) => {
                self.slots[index] = Slot::Occupied { key, value };
                self.len += 1;
                None
            }
            Probe::Exhausted => {
                self.grow();
                self.place(key, value)
            }
        }
    }

    // =========================================================================
    // Resizing
    // =========================================================================

    fn grow(&mut self) {
        let capacity = self.capacity();
        let new_capacity = (capacity * 2).min(self.config.max_capacity);
        debug_assert!(
            new_capacity > capacity,
            "grow requested at max capacity {}",
            capacity
        );

        tracing::debug!(
            "Growing table {} -> {} slots ({} entries)",
            capacity,
            new_capacity,
            self.len
        );
        self.rebuild(new_capacity);
    }

    fn shrink_if_sparse(&mut self) {
        let capacity = self.capacity();
        let min_capacity = self.config.min_capacity;

        if self.len <= capacity / self.config.shrink_divisor && capacity > min_capacity {
            let new_capacity = (capacity / 2).max(min_capacity);
            tracing::debug!(
                "Shrinking table {} -> {} slots ({} entries)",
                capacity,
                new_capacity,
                self.len
            );
            self.rebuild(new_capacity);
        }
    }

    /// Replace the slot vector and re-insert every occupied entry in old slot
    /// order. Re-insertion may grow the new vector again.
    fn rebuild(&mut self, capacity: usize) {
        let old_slots = mem::replace(&mut self.slots, empty_slots(capacity));
        self.len = 0;

        for slot in old_slots {
            if let Slot::Occupied { key, value } = slot {
                self.place(key, value);
            }
        }
    }
}

impl<V> Default for ProbingTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a ProbingTable<V> {
    type Item = (Key, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn empty_slots<V>(capacity: usize) -> Vec<Slot<V>> {
    (0..capacity).map(|_| Slot::Empty).collect()
}
