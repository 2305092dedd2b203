// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::SimpleVector;

impl<T> SimpleVector<T> {
    /// The live elements `[0, size)`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.size]
    }

    /// The live elements `[0, size)`, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let size = self.size;
        &mut self.items.as_mut_slice()[..size]
    }

    /// Returns a raw pointer to the first slot of the buffer.
    ///
    /// The pointer is dangling when nothing is allocated and is invalidated by
    /// any reallocation.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }
}
