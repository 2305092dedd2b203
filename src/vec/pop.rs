// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::SimpleVector;

impl<T> SimpleVector<T> {
    /// Drops the last element from the sequence by decrementing the size.
    ///
    /// The slot keeps its value as a placeholder until it is overwritten.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn pop_back(&mut self) {
        assert!(!self.is_empty(), "pop_back on an empty SimpleVector");
        self.size -= 1;
    }
}

impl<T: Default> SimpleVector<T> {
    /// Removes and returns the last element, or `None` if empty.
    ///
    /// The vacated slot is reset to `T::default()`.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.size -= 1;
        Some(core::mem::take(&mut self.items[self.size]))
    }
}
