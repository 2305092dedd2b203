// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::SimpleVector;

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}
