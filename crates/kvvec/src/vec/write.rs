use kvstore::Store;
use log::debug;

use crate::{Encode, Result};

use super::KvVec;

impl<S, T> KvVec<S, T>
where
    S: Store,
    T: Encode,
{
    /// Stores `value` at `index` without any bounds check and without
    /// touching the length.
    ///
    /// Meant for indices already known to be in range. Writing past the end
    /// doesn't extend the vec; use [`push`](Self::push) for that.
    pub fn set(&self, index: usize, value: T) -> Result<()> {
        self.store.set(&self.key(index), &value.to_bytes())?;
        Ok(())
    }

    /// Indexed write.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn update(&self, index: usize, value: T) -> Result<()> {
        self.assert_in_range(index, "update");
        self.set(index, value)
    }

    /// Appends `value` and returns its index.
    ///
    /// The length only grows once the element is stored, so a failed write
    /// leaves the vec as it was.
    pub fn push(&mut self, value: T) -> Result<usize> {
        let index = self.len;
        self.set(index, value)?;
        self.persist_len(index + 1)?;
        self.len = index + 1;
        Ok(index)
    }

    /// Shortens the vec to `len` elements, deleting the keys past it.
    ///
    /// Does nothing if `len` isn't smaller than the current length.
    pub fn truncate(&mut self, len: usize) -> Result<()> {
        let old_len = self.len;
        if len >= old_len {
            return Ok(());
        }

        debug!("Truncating {} from {old_len} to {len}", self.prefix);

        self.persist_len(len)?;
        self.len = len;

        (len..old_len)
            .rev()
            .try_for_each(|index| self.store.del(&self.key(index)))?;

        Ok(())
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) -> Result<()> {
        self.truncate(0)
    }
}
