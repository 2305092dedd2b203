// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`SimpleVector`](crate::SimpleVector).
//!
//! - `IntoIter<T>` yields the live elements by value and supports
//!   `DoubleEndedIterator`, `ExactSizeIterator`, and `FusedIterator`.
//!   Placeholder slots are dropped without being yielded.
//! - `&SimpleVector` and `&mut SimpleVector` iterate as slices.
//! - `FromIterator<T>` appends through `push_back`, so capacity follows the
//!   doubling policy.

// Crate imports
use crate::vec::SimpleVector;

// Alloc imports
use alloc::vec::{self, Vec};

// Core imports
use core::{fmt, iter::FusedIterator};

/// Owned iterator returned by `SimpleVector::into_iter()`.
pub struct IntoIter<T> {
    pub(crate) inner: vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        self.inner.nth(n)
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.inner.nth_back(n)
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(mut self) -> Self::IntoIter {
        let size = self.size;
        let mut slots: Vec<T> = self.items.release().map(Vec::from).unwrap_or_default();
        slots.truncate(size);
        IntoIter {
            inner: slots.into_iter(),
        }
    }
}

impl<T: Default> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}
