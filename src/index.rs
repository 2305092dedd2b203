// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`SimpleVector`](crate::SimpleVector).
//!
//! `Index` and `IndexMut` mirror slice behavior over the live prefix
//! `[0..size)`:
//! - panics on out-of-bounds, including indices that fall on placeholder slots;
//! - supports every standard range form through [`SliceIndex`].
//!
//! Use [`SimpleVector::at`](crate::SimpleVector::at) for a checked, non-panicking
//! alternative.

// Crate imports
use crate::vec::SimpleVector;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVector<T> {
    type Output = I::Output;
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVector<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
