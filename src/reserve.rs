// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capacity hints for constructing a [`SimpleVector`](crate::SimpleVector)
//! with pre-allocated but unpopulated storage.

/// A request to pre-allocate `capacity` slots without growing the size.
///
/// Consumed by [`SimpleVector::with_reserve`](crate::SimpleVector::with_reserve)
/// and `From<ReserveProxy>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {
    #[inline]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The number of slots to pre-allocate.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`ReserveProxy::new`].
///
/// ```rust
/// use simple_vector::{SimpleVector, reserve};
///
/// let v: SimpleVector<i32> = reserve(16).into();
/// assert_eq!(v.len(), 0);
/// assert_eq!(v.capacity(), 16);
/// ```
#[inline]
pub const fn reserve(capacity: usize) -> ReserveProxy {
    ReserveProxy::new(capacity)
}
