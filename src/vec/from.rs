// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{array_ptr::ArrayPtr, reserve::ReserveProxy, vec::SimpleVector};

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

impl<T, const M: usize> From<[T; M]> for SimpleVector<T> {
    fn from(src: [T; M]) -> Self {
        let raw: Box<[T]> = Box::new(src);
        Self {
            items: ArrayPtr::from_raw(raw),
            size: M,
            capacity: M,
        }
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(src: &[T]) -> Self {
        Self {
            items: ArrayPtr::from_raw(src.into()),
            size: src.len(),
            capacity: src.len(),
        }
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    /// Adopts the vector's elements; the capacity becomes exactly `len`.
    fn from(src: Vec<T>) -> Self {
        let len = src.len();
        Self {
            items: ArrayPtr::from(src),
            size: len,
            capacity: len,
        }
    }
}

impl<T: Default> From<ReserveProxy> for SimpleVector<T> {
    fn from(hint: ReserveProxy) -> Self {
        Self::with_reserve(hint)
    }
}
