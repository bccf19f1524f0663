use kvstore::Store;

use crate::{Codec, Decode, Result};

use super::KvVec;

impl<S, T> KvVec<S, T>
where
    S: Store,
    T: Decode,
{
    /// Removes and returns the last element.
    ///
    /// The element is read before anything changes, so a failed read leaves
    /// the vec as it was.
    ///
    /// # Panics
    ///
    /// Panics if the vec is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.assert_not_empty("pop");

        let index = self.len - 1;
        let value = self.read_checked(index)?;

        self.persist_len(index)?;
        self.len = index;
        self.store.del(&self.key(index))?;

        Ok(value)
    }

    /// Removes the element at `index` in O(1) by moving the last element into
    /// its slot. Doesn't preserve order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range, or if the last element is missing
    /// or doesn't decode as `T`.
    pub fn swap_remove(&mut self, index: usize) -> Result<T> {
        self.assert_in_range(index, "swap_remove");

        let last = self.len - 1;
        if index == last {
            return self.pop();
        }

        let value = self.read_checked(index)?;

        // Checked like any other read, but stored back without re-encoding
        let moved = self.read_raw_checked(last)?;
        self.decode_checked(last, &moved);

        self.persist_len(last)?;
        self.len = last;
        self.store.del(&self.key(last))?;
        self.store.set(&self.key(index), &moved)?;

        Ok(value)
    }
}

impl<S, T> KvVec<S, T>
where
    S: Store,
    T: Codec,
{
    /// Overwrites the element at `index` and returns the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn replace(&self, index: usize, value: T) -> Result<T> {
        self.assert_in_range(index, "replace");

        let old = self.read_checked(index)?;
        self.set(index, value)?;

        Ok(old)
    }
}
