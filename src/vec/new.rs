// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array_ptr::ArrayPtr, reserve::ReserveProxy, vec::SimpleVector};

impl<T> SimpleVector<T> {
    /// Constructs an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            items: ArrayPtr::new(),
            size: 0,
            capacity: 0,
        }
    }
}

impl<T: Default> SimpleVector<T> {
    /// Constructs a vector of `size` default values (`size == capacity`).
    pub fn with_size(size: usize) -> Self {
        Self {
            items: ArrayPtr::with_len(size),
            size,
            capacity: size,
        }
    }

    /// Constructs an empty vector with `hint.capacity()` pre-allocated slots.
    ///
    /// Use this when the number of upcoming pushes is known, to avoid the
    /// intermediate reallocations of the doubling policy.
    pub fn with_reserve(hint: ReserveProxy) -> Self {
        let capacity = hint.capacity();
        Self {
            items: ArrayPtr::with_len(capacity),
            size: 0,
            capacity,
        }
    }
}

impl<T: Clone> SimpleVector<T> {
    /// Constructs a vector of `size` clones of `value` (`size == capacity`).
    pub fn from_value(size: usize, value: T) -> Self {
        Self {
            items: ArrayPtr::filled(size, value),
            size,
            capacity: size,
        }
    }
}
