// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::SimpleVector;

impl<T: Default> SimpleVector<T> {
    /// Inserts `value` at `index` and returns the index of the inserted value.
    ///
    /// - Into an empty vector, or at `index == len()`, this is
    ///   [`push_back`](SimpleVector::push_back).
    /// - With spare capacity, elements `[index, len)` shift one slot toward
    ///   the end, last first, and `value` is written at `index`.
    /// - When full, the capacity doubles first, then the same shift happens at
    ///   the same offset in the new buffer.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        assert!(
            index <= self.size,
            "insertion index (is {index}) should be <= size (is {})",
            self.size
        );

        if self.is_empty() {
            self.push_back(value);
            return 0;
        }
        if index == self.size {
            self.push_back(value);
            return self.size - 1;
        }

        // `index` is an offset, so it addresses the same position after growth.
        if self.size == self.capacity {
            self.grow();
        }

        // Shift right: [index..size) -> [index+1..size+1)
        let window = &mut self.items.as_mut_slice()[index..=self.size];
        for i in (1..window.len()).rev() {
            window[i] = core::mem::take(&mut window[i - 1]);
        }
        window[0] = value;

        self.size += 1;
        index
    }
}
