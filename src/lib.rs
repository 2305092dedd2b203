// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `simple-vector`
//!
//! A `no_std` + `alloc`, growable, heap-backed vector with an explicit
//! growth policy, **with no `unsafe`**.
//!
//! The crate is split in two layers:
//!
//! - [`ArrayPtr<T>`]: the leaf resource owner. It owns zero or one contiguous
//!   allocation of `T` slots, is move-only, and frees its allocation exactly
//!   once.
//! - [`SimpleVector<T>`]: the policy layer. It owns an `ArrayPtr<T>`, tracks a
//!   logical `size` and a `capacity`, and implements growth, insertion,
//!   erasure and comparisons by moving elements between slots.
//!
//! ## High-level semantics
//!
//! - `0 <= size <= capacity`. Slots `[0, size)` are live; slots
//!   `[size, capacity)` are placeholders that hold `T::default()` or a value
//!   that has left the sequence.
//! - Appending to a full vector grows the capacity to `max(1, capacity * 2)`.
//!   [`SimpleVector::reserve`] grows to an exact capacity and never shrinks.
//! - Every reallocation moves the live elements into the new buffer in
//!   ascending order, then drops the old buffer.
//! - Positions passed to and returned from [`SimpleVector::insert`] and
//!   [`SimpleVector::erase`] are indices, so they stay meaningful across a
//!   reallocation.
//! - [`reserve()`] builds a [`ReserveProxy`], a capacity hint for constructing a
//!   vector with pre-allocated but empty storage.
//!
//! ## Errors and panics
//!
//! Only the checked accessors [`SimpleVector::at`] / [`SimpleVector::at_mut`]
//! return [`Error`]. Contract violations panic, like slice indexing does:
//!
//! - indexing (`v[i]`, `v[a..b]`) outside the live prefix;
//! - [`SimpleVector::pop_back`] or [`SimpleVector::erase`] on an empty vector;
//! - `insert` at `index > len()` or `erase` at `index >= len()`.
//!
//! ## Logging
//!
//! Reallocations are reported through the [`log`] facade at `trace` level.
//! The crate never installs a logger.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `SimpleVector<T>` as a plain
//!     sequence of the live elements. Deserializing requires `T: Default`.
//!
//! ## Example
//!
//! ```rust
//! use simple_vector::{SimpleVector, reserve};
//!
//! let mut v: SimpleVector<u8> = SimpleVector::with_reserve(reserve(4));
//! v.push_back(1);
//! v.extend_from_slice(&[2, 3]);
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! assert_eq!(v.capacity(), 4);
//! assert!(v.at(3).is_err());
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod array_ptr;
mod error;
mod index;
mod iter;
mod reserve;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use array_ptr::ArrayPtr;
pub use error::Error;
pub use iter::IntoIter;
pub use reserve::{ReserveProxy, reserve};
pub use vec::{SimpleVector, swap};
