// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array_ptr::ArrayPtr, vec::SimpleVector};

impl<T: Default> SimpleVector<T> {
    /// Ensures `capacity >= new_capacity`.
    ///
    /// If `new_capacity <= capacity` this is a no-op. Otherwise the buffer is
    /// reallocated to exactly `new_capacity` slots; size and contents are
    /// unchanged.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity {
            return;
        }
        self.relocate(new_capacity);
    }

    /// Grows for one more element: `max(1, capacity * 2)`.
    pub(crate) fn grow(&mut self) {
        let target = match self.capacity {
            0 => 1,
            cap => cap.checked_mul(2).expect("capacity overflow"),
        };
        self.relocate(target);
    }

    /// Moves the live elements, in ascending order, into a fresh buffer of
    /// `new_capacity` default slots and drops the old buffer.
    pub(crate) fn relocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.size);
        log::trace!(
            "relocating {} elements: capacity {} -> {}",
            self.size,
            self.capacity,
            new_capacity
        );

        let mut fresh = ArrayPtr::with_len(new_capacity);
        let live = &mut self.items.as_mut_slice()[..self.size];
        for (dst, src) in fresh.as_mut_slice().iter_mut().zip(live) {
            *dst = core::mem::take(src);
        }

        self.items.swap(&mut fresh);
        self.capacity = new_capacity;
        // `fresh` now holds the old allocation and frees it here.
    }
}
