use kvstore::Store;

use crate::{Decode, Error, Result};

use super::KvVec;

impl<S, T> KvVec<S, T>
where
    S: Store,
    T: Decode,
{
    /// Returns the element at `index`, or `None` if the index is out of range.
    ///
    /// # Panics
    ///
    /// Panics if an in-range index has no store entry or holds a malformed
    /// payload.
    pub fn get(&self, index: usize) -> Result<Option<T>> {
        if !self.contains_index(index) {
            return Ok(None);
        }
        self.read_checked(index).map(Some)
    }

    /// Like [`get`](Self::get), but reports a missing entry or malformed
    /// payload as an error instead of panicking.
    pub fn try_get(&self, index: usize) -> Result<Option<T>> {
        if !self.contains_index(index) {
            return Ok(None);
        }
        let Some(bytes) = self.store.get(&self.key(index))? else {
            return Err(Error::MissingEntry {
                key: self.key_string(index),
            });
        };
        T::from_bytes(&bytes).map(Some)
    }

    /// Indexed read.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn at(&self, index: usize) -> Result<T> {
        self.assert_in_range(index, "at");
        self.read_checked(index)
    }

    /// # Panics
    ///
    /// Panics if the vec is empty.
    pub fn front(&self) -> Result<T> {
        self.assert_not_empty("front");
        self.read_checked(0)
    }

    /// # Panics
    ///
    /// Panics if the vec is empty.
    pub fn back(&self) -> Result<T> {
        self.assert_not_empty("back");
        self.read_checked(self.len - 1)
    }

    pub(super) fn read_checked(&self, index: usize) -> Result<T> {
        let bytes = self.read_raw_checked(index)?;
        Ok(self.decode_checked(index, &bytes))
    }

    pub(super) fn decode_checked(&self, index: usize, bytes: &[u8]) -> T {
        T::from_bytes(bytes)
            .unwrap_or_else(|e| panic!("Malformed payload at {}: {e}", self.key_string(index)))
    }
}
