// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The owning raw buffer behind [`SimpleVector`](crate::SimpleVector).
//!
//! [`ArrayPtr<T>`] owns zero or one contiguous heap allocation of `T` slots.
//! It knows nothing about which slots are meaningful: that bookkeeping
//! (size, capacity, growth) belongs to the vector built on top of it.
//!
//! - Not `Clone`: two buffers never share an allocation.
//! - Moving transfers ownership; [`core::mem::take`] leaves the source empty.
//! - The allocation is freed exactly once, on drop, unless it was handed back
//!   to the caller through [`ArrayPtr::release`].

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// Core imports
use core::{
    fmt,
    ops::{Index, IndexMut},
};

/// An owning pointer to a heap array of `T`, or to nothing.
pub struct ArrayPtr<T> {
    raw: Option<Box<[T]>>,
}

impl<T> ArrayPtr<T> {
    /// Constructs a buffer that owns nothing. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { raw: None }
    }

    /// Adopts an existing allocation without allocating.
    ///
    /// An empty allocation is adopted as the owns-nothing state.
    #[inline]
    pub fn from_raw(raw: Box<[T]>) -> Self {
        if raw.is_empty() {
            return Self::new();
        }
        Self { raw: Some(raw) }
    }

    /// Returns `true` if this buffer currently owns an allocation.
    #[inline]
    pub const fn is_allocated(&self) -> bool {
        self.raw.is_some()
    }

    /// Number of slots in the owned allocation (`0` when owning nothing).
    #[inline]
    pub fn slots(&self) -> usize {
        self.raw.as_deref().map_or(0, <[T]>::len)
    }

    /// Exchanges allocations with `other`. Constant time, never allocates.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.raw, &mut other.raw);
    }

    /// Relinquishes ownership and hands the allocation to the caller.
    ///
    /// Afterwards `self` owns nothing; dropping it is a no-op.
    #[inline]
    #[must_use = "dropping the released allocation frees it immediately"]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        self.raw.take()
    }

    /// All slots of the allocation, meaningful or not.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.raw.as_deref().unwrap_or(&[])
    }

    /// All slots of the allocation, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.raw.as_deref_mut().unwrap_or(&mut [])
    }

    /// Raw pointer to the first slot, or a dangling pointer when owning nothing.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }
}

impl<T: Default> ArrayPtr<T> {
    /// Allocates `len` slots, each holding `T::default()`.
    ///
    /// `len == 0` yields the owns-nothing state and performs no allocation.
    pub fn with_len(len: usize) -> Self {
        if len == 0 {
            return Self::new();
        }
        let raw: Box<[T]> = core::iter::repeat_with(T::default).take(len).collect();
        Self { raw: Some(raw) }
    }
}

impl<T: Clone> ArrayPtr<T> {
    /// Allocates `len` slots, each holding a clone of `value`.
    pub fn filled(len: usize, value: T) -> Self {
        if len == 0 {
            return Self::new();
        }
        let raw: Box<[T]> = core::iter::repeat_n(value, len).collect();
        Self { raw: Some(raw) }
    }
}

impl<T> Default for ArrayPtr<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Box<[T]>> for ArrayPtr<T> {
    fn from(raw: Box<[T]>) -> Self {
        Self::from_raw(raw)
    }
}

impl<T> From<Vec<T>> for ArrayPtr<T> {
    fn from(v: Vec<T>) -> Self {
        Self::from_raw(v.into_boxed_slice())
    }
}

// Slot access. The caller is responsible for staying inside the allocation;
// an index past `slots()` panics like slice indexing.
impl<T> Index<usize> for ArrayPtr<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.as_slice()[i]
    }
}
impl<T> IndexMut<usize> for ArrayPtr<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.as_mut_slice()[i]
    }
}

impl<T> fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayPtr")
            .field("allocated", &self.is_allocated())
            .field("slots", &self.slots())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::ArrayPtr;
    use alloc::{boxed::Box, rc::Rc};

    #[test]
    fn test_default_owns_nothing() {
        let p: ArrayPtr<i32> = ArrayPtr::default();
        assert!(!p.is_allocated());
        assert_eq!(p.slots(), 0);
        assert!(p.as_slice().is_empty());
    }

    #[test]
    fn test_with_len_default_initializes_slots() {
        let p: ArrayPtr<i32> = ArrayPtr::with_len(4);
        assert!(p.is_allocated());
        assert_eq!(p.slots(), 4);
        assert_eq!(p.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_with_len_zero_is_owns_nothing() {
        let p: ArrayPtr<i32> = ArrayPtr::with_len(0);
        assert!(!p.is_allocated());
    }

    #[test]
    fn test_filled() {
        let p = ArrayPtr::filled(3, 'x');
        assert_eq!(p.as_slice(), &['x', 'x', 'x']);
        let q: ArrayPtr<char> = ArrayPtr::filled(0, 'x');
        assert!(!q.is_allocated());
    }

    #[test]
    fn test_adopt_raw_allocation_keeps_address() {
        let raw: Box<[u8]> = vec![1, 2, 3].into_boxed_slice();
        let addr = raw.as_ptr();
        let p = ArrayPtr::from_raw(raw);
        assert_eq!(p.as_ptr(), addr);
        assert_eq!(p.as_slice(), &[1, 2, 3]);

        let empty: ArrayPtr<u8> = ArrayPtr::from(vec![]);
        assert!(!empty.is_allocated());
    }

    #[test]
    fn test_from_boxed_slice() {
        let raw: Box<[i32]> = Box::new([4, 5]);
        let addr = raw.as_ptr();
        let p: ArrayPtr<i32> = raw.into();
        assert_eq!(p.slots(), 2);
        assert_eq!(p.as_ptr(), addr);

        let empty: Box<[i32]> = Box::new([]);
        let q: ArrayPtr<i32> = empty.into();
        assert!(!q.is_allocated());
    }

    #[test]
    fn test_index_and_index_mut() {
        let mut p: ArrayPtr<i32> = ArrayPtr::with_len(3);
        p[1] = 7;
        p[2] += 2;
        assert_eq!(p[0], 0);
        assert_eq!(p[1], 7);
        assert_eq!(p[2], 2);
    }

    #[test]
    #[should_panic]
    fn test_index_past_allocation_panics() {
        let p: ArrayPtr<i32> = ArrayPtr::with_len(2);
        let _ = p[2];
    }

    #[test]
    fn test_swap_exchanges_allocations() {
        let mut a = ArrayPtr::from(vec![1, 2]);
        let mut b: ArrayPtr<i32> = ArrayPtr::new();
        let addr = a.as_ptr();

        a.swap(&mut b);
        assert!(!a.is_allocated());
        assert_eq!(b.as_ptr(), addr);
        assert_eq!(b.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_release_hands_back_allocation() {
        let mut p = ArrayPtr::from(vec![5, 6]);
        let raw = p.release().unwrap();
        assert_eq!(&*raw, &[5, 6]);
        assert!(!p.is_allocated());
        assert!(p.release().is_none());
    }

    #[test]
    fn test_take_leaves_source_empty() {
        let mut src = ArrayPtr::from(vec![1, 2, 3]);
        let dst = core::mem::take(&mut src);
        assert!(!src.is_allocated());
        assert_eq!(dst.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_drop_frees_elements_once() {
        let tracker = Rc::new(());
        let p = ArrayPtr::filled(3, Rc::clone(&tracker));
        assert_eq!(Rc::strong_count(&tracker), 4);
        drop(p);
        assert_eq!(Rc::strong_count(&tracker), 1);

        let mut q = ArrayPtr::filled(2, Rc::clone(&tracker));
        let raw = q.release();
        drop(q);
        assert_eq!(Rc::strong_count(&tracker), 3);
        drop(raw);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}
