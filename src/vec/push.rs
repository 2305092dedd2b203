// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array_ptr::ArrayPtr, vec::SimpleVector};

// Alloc imports
use alloc::boxed::Box;

impl<T: Default> SimpleVector<T> {
    /// Appends `value`, doubling the capacity first if the vector is full.
    ///
    /// The first push into a vector with no storage adopts a single-slot
    /// buffer holding `value`.
    pub fn push_back(&mut self, value: T) {
        if self.size == 0 && self.capacity == 0 {
            log::trace!("adopting single-slot buffer for first element");
            let raw: Box<[T]> = Box::new([value]);
            self.items = ArrayPtr::from_raw(raw);
            self.size = 1;
            self.capacity = 1;
            return;
        }

        if self.size == self.capacity {
            self.grow();
        }
        self.items[self.size] = value;
        self.size += 1;
    }
}
