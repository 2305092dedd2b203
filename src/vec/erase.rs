// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::SimpleVector;

impl<T: Default> SimpleVector<T> {
    /// Removes the element at `index` and returns the index of the element
    /// that followed it.
    ///
    /// Erasing the last element is [`pop_back`](SimpleVector::pop_back) and
    /// returns the new `len()`. Otherwise every element after `index` moves
    /// one slot toward the front, first to last, and the erased value is
    /// dropped when it is overwritten.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty or `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(!self.is_empty(), "erase on an empty SimpleVector");
        assert!(
            index < self.size,
            "erase index (is {index}) should be < size (is {})",
            self.size
        );

        if index == self.size - 1 {
            self.pop_back();
            return self.size;
        }

        // Shift left: [index+1..size) -> [index..size-1)
        let window = &mut self.items.as_mut_slice()[index..self.size];
        for i in 1..window.len() {
            window[i - 1] = core::mem::take(&mut window[i]);
        }

        self.size -= 1;
        index
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::SimpleVector;
    use alloc::rc::Rc;

    #[test]
    fn test_erase_first_and_middle() {
        let mut v = SimpleVector::from([1, 2, 3, 4, 5]);
        assert_eq!(v.erase(0), 0);
        assert_eq!(v, [2, 3, 4, 5]);
        assert_eq!(v.erase(1), 1);
        assert_eq!(v, [2, 4, 5]);
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn test_erase_drops_erased_value() {
        let a = Rc::new(());
        let b = Rc::new(());
        let mut v = SimpleVector::from([Some(Rc::clone(&a)), Some(Rc::clone(&b))]);
        v.erase(0);
        assert_eq!(Rc::strong_count(&a), 1);
        assert_eq!(Rc::strong_count(&b), 2);
        assert_eq!(v.len(), 1);
    }

    #[test]
    #[should_panic(expected = "empty")]
    fn test_erase_on_empty_panics() {
        let mut v: SimpleVector<i32> = SimpleVector::new();
        v.erase(0);
    }

    #[test]
    #[should_panic(expected = "erase index")]
    fn test_erase_past_end_panics() {
        let mut v = SimpleVector::from([1, 2]);
        v.erase(2);
    }
}
