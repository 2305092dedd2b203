// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `SimpleVector` type and its inherent API.
//!
//! `SimpleVector<T>` is a growable vector that keeps its elements in a single
//! [`ArrayPtr<T>`] allocation and tracks a logical size and a capacity on top
//! of it. Growth, insertion and erasure relocate elements by moving them slot
//! by slot; placeholder slots past the size hold `T::default()`.

mod at;
mod default;
mod erase;
mod extend;
mod from;
mod grow;
mod insert;
mod new;
mod pop;
mod push;
mod resize;
mod slice;

// Crate imports
use crate::array_ptr::ArrayPtr;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A growable, heap-backed vector with a doubling growth policy.
///
/// `SimpleVector<T>` maintains the triple `(size, capacity, buffer)`:
///
/// - `0 <= size <= capacity`;
/// - the buffer holds at least `capacity` slots whenever `capacity > 0`;
/// - slots `[0, size)` are live elements, visible through
///   [`as_slice`](SimpleVector::as_slice), indexing and iteration;
/// - slots `[size, capacity)` are placeholders. They hold `T::default()` or a
///   value that is no longer part of the sequence, and are never read as data.
///
/// # Growth
///
/// When an append finds `size == capacity`, the capacity becomes
/// `max(1, capacity * 2)`. [`reserve`](SimpleVector::reserve) grows to an
/// exact capacity. Every reallocation allocates a fresh buffer, moves each
/// live element into it in ascending order and drops the old buffer, so
/// capacity never shrinks implicitly and appends are amortized `O(1)`.
///
/// # Positions
///
/// [`insert`](SimpleVector::insert) and [`erase`](SimpleVector::erase) take
/// and return positions as indices. An index survives a reallocation; a
/// reference into the buffer would not, and the borrow checker rejects
/// holding one across a mutating call.
///
/// # Errors and panics
///
/// [`at`](SimpleVector::at) and [`at_mut`](SimpleVector::at_mut) are the only
/// operations returning [`Error`](crate::Error). Contract violations panic:
/// indexing out of bounds, [`pop_back`](SimpleVector::pop_back) or
/// [`erase`](SimpleVector::erase) on an empty vector, and out-of-range
/// insert/erase positions.
///
/// # Element bounds
///
/// Operations that allocate fresh slots or move elements out of slots
/// (growth, `push_back`, `insert`, `erase`, `resize`, `pop`) require
/// `T: Default`, since every slot of the buffer always holds a value.
/// Read-only access, `clear`, `pop_back` and `swap` have no bounds.
///
/// # Examples
///
/// ```rust
/// use simple_vector::SimpleVector;
///
/// let mut v: SimpleVector<i32> = SimpleVector::new();
/// for i in 1..=5 {
///     v.push_back(i);
/// }
/// assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
/// assert_eq!(v.capacity(), 8);
///
/// let at = v.insert(2, 42);
/// assert_eq!(v[at], 42);
/// v.erase(at);
/// assert_eq!(v, [1, 2, 3, 4, 5]);
/// ```
pub struct SimpleVector<T> {
    pub(crate) items: ArrayPtr<T>,
    pub(crate) size: usize,
    pub(crate) capacity: usize,
}

impl<T> SimpleVector<T> {
    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Alias for [`len`](SimpleVector::len).
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of slots available without reallocating.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if `size == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `Some(&T)` if `i < size`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < size`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Sets `size = 0`. Capacity and slot contents are left untouched.
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Exchanges size, capacity and buffer with `other` in `O(1)`.
    ///
    /// This shadows the slice method `<[T]>::swap(a, b)`; to exchange two
    /// elements, call `v.as_mut_slice().swap(i, j)`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.items.swap(&mut other.items);
        core::mem::swap(&mut self.size, &mut other.size);
        core::mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Moves the contents out, leaving `self` empty with capacity `0`.
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Returns `true` if the vector contains `x` (linear search over live elements).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

/// Exchanges the contents of two vectors. See [`SimpleVector::swap`].
#[inline]
pub fn swap<T>(lhs: &mut SimpleVector<T>, rhs: &mut SimpleVector<T>) {
    lhs.swap(rhs);
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleVector")
            .field("size", &self.size)
            .field("capacity", &self.capacity)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: Clone + Default> Clone for SimpleVector<T> {
    /// Deep-copies the live elements into a fresh buffer of the same capacity.
    fn clone(&self) -> Self {
        let mut items: ArrayPtr<T> = ArrayPtr::with_len(self.capacity);
        for (dst, src) in items.as_mut_slice().iter_mut().zip(self.as_slice()) {
            dst.clone_from(src);
        }
        Self {
            items,
            size: self.size,
            capacity: self.capacity,
        }
    }
}

// Comparisons only look at the live prefix; capacity and placeholders never
// participate.
impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq<U>, U, const M: usize> PartialEq<[U; M]> for SimpleVector<T> {
    fn eq(&self, other: &[U; M]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq<U>, U> PartialEq<[U]> for SimpleVector<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Eq> Eq for SimpleVector<T> {}
impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for SimpleVector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for SimpleVector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for SimpleVector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
