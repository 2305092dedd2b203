// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::SimpleVector;

impl<T: Default> Extend<T> for SimpleVector<T> {
    /// Appends each item through [`push_back`](SimpleVector::push_back), so
    /// capacity follows the doubling policy.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &item in iter {
            self.push_back(item);
        }
    }
}

impl<T: Clone + Default> SimpleVector<T> {
    /// Clones and appends every element of `src`.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) {
        self.extend(src.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::SimpleVector;
    use alloc::vec::Vec;

    #[test]
    fn test_extend_follows_doubling() {
        let mut v: SimpleVector<i32> = SimpleVector::new();
        v.extend(1..=5);
        assert_eq!(v, [1, 2, 3, 4, 5]);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn test_extend_by_reference_and_from_slice() {
        let mut v = SimpleVector::from([1]);
        v.extend(&[2, 3]);
        v.extend_from_slice(&[4, 5]);
        assert_eq!(v, [1, 2, 3, 4, 5]);

        let empty: Vec<i32> = Vec::new();
        v.extend_from_slice(&empty);
        assert_eq!(v.len(), 5);
    }
}
