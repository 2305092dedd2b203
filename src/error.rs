// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `SimpleVector`.
//!
//! Only checked element access reports a recoverable error. Contract
//! violations (popping or erasing from an empty vector, out-of-range
//! positions, out-of-bounds indexing) panic instead.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`SimpleVector`](crate::SimpleVector).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A checked access addressed an index at or past the logical size.
    ///
    /// Returned by [`SimpleVector::at`](crate::SimpleVector::at) and
    /// [`SimpleVector::at_mut`](crate::SimpleVector::at_mut).
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The vector's size at the time of the access.
        size: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, size } => {
                write!(f, "index {index} is out of range for size {size}")
            }
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfRange { index: 3, size: 2 });
        assert!(s.contains("out of range"));
    }

    #[test]
    fn test_error_display_names_index_and_size() {
        let e = Error::OutOfRange { index: 7, size: 4 };
        assert_eq!(e.to_string(), "index 7 is out of range for size 4");
    }
}
