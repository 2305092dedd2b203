// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::SimpleVector;

impl<T: Default> SimpleVector<T> {
    /// Changes the size to `new_size`.
    ///
    /// - Unchanged size: no-op.
    /// - Shrinking: only the size drops; slots past it become placeholders.
    /// - Growing within capacity: live elements move into a fresh buffer of the
    ///   same capacity, so newly exposed elements are `T::default()`.
    /// - Growing past capacity: live elements move into a buffer of exactly
    ///   `new_size` slots and the capacity becomes `new_size`.
    pub fn resize(&mut self, new_size: usize) {
        if new_size == self.size {
            return;
        }
        if new_size < self.size {
            self.size = new_size;
            return;
        }

        let target = if new_size <= self.capacity {
            self.capacity
        } else {
            new_size
        };
        self.relocate(target);
        self.size = new_size;
    }
}
