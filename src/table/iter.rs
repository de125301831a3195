//! Iteration over occupied slots

use std::iter::FusedIterator;
use std::slice;

use super::{Key, Slot};

/// Iterator over the live entries of a [`ProbingTable`](super::ProbingTable),
/// in slot order
pub struct Iter<'a, V> {
    slots: slice::Iter<'a, Slot<V>>,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(super) fn new(slots: &'a [Slot<V>], len: usize) -> Self {
        Self {
            slots: slots.iter(),
            remaining: len,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied { key, value } = slot {
                self.remaining -= 1;
                return Some((*key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}
