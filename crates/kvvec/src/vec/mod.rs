use std::marker::PhantomData;

use kvstore::Store;
use log::debug;

use crate::{Decode, Encode, Result, element_key, len_key};

mod read;
mod remove;
mod write;

/// Where a vec keeps its length.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LenMode {
    /// Length lives in memory only and starts at zero on every construction.
    ///
    /// Entries left in the store by an earlier instance with the same prefix
    /// are unreachable and get overwritten by new pushes.
    #[default]
    Ephemeral,
    /// Length is restored from, and written back to, the store under
    /// [`len_key`].
    Persisted,
}

/// Index-addressable vector whose elements each live under their own key in a
/// [`Store`].
///
/// Nothing but the length is held in memory: every read decodes from the
/// store and every write encodes into it. The element type picks the codec
/// statically, through [`Encode`] and [`Decode`].
///
/// Accessors defined only for valid indices (`at`, `update`, `front`, `back`,
/// `pop`, `swap_remove`, `replace`) panic on a contract violation, while
/// [`get`](Self::get) returns `None` for out-of-range indices. `Err` is only
/// ever a store failure, or a malformed payload on [`try_get`](Self::try_get).
///
/// Multi-step operations are not atomic: if the process dies between two
/// store calls, the store is left half-updated.
#[derive(Debug)]
#[must_use = "Vector should be stored to keep its length"]
pub struct KvVec<S, T> {
    store: S,
    prefix: String,
    len: usize,
    mode: LenMode,
    _marker: PhantomData<fn() -> T>,
}

impl<S, T> KvVec<S, T>
where
    S: Store,
{
    /// Creates an empty vec over `store`. Does no I/O.
    ///
    /// `prefix` must be unique among everything sharing the store.
    pub fn new(store: S, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
            len: 0,
            mode: LenMode::Ephemeral,
            _marker: PhantomData,
        }
    }

    /// Opens a vec whose length is persisted in the store, restoring the
    /// length left by a previous instance with the same prefix.
    pub fn import(store: S, prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();

        let len = store
            .get(&len_key(&prefix))?
            .map(|bytes| usize::from_bytes(&bytes))
            .transpose()?
            .unwrap_or_default();

        debug!("Imported {prefix} with {len} element(s)");

        Ok(Self {
            store,
            prefix,
            len,
            mode: LenMode::Persisted,
            _marker: PhantomData,
        })
    }

    /// Creates a vec with the given length mode.
    pub fn with_mode(store: S, prefix: impl Into<String>, mode: LenMode) -> Result<Self> {
        match mode {
            LenMode::Ephemeral => Ok(Self::new(store, prefix)),
            LenMode::Persisted => Self::import(store, prefix),
        }
    }

    #[inline]
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[inline]
    pub fn mode(&self) -> LenMode {
        self.mode
    }

    #[inline]
    pub fn into_store(self) -> S {
        self.store
    }

    #[inline]
    fn key(&self, index: usize) -> Vec<u8> {
        element_key(&self.prefix, index)
    }

    fn key_string(&self, index: usize) -> String {
        String::from_utf8_lossy(&self.key(index)).into_owned()
    }

    fn assert_in_range(&self, index: usize, op: &str) {
        assert!(
            self.contains_index(index),
            "{op}: index {index} out of range for {} (len {})",
            self.prefix,
            self.len
        );
    }

    fn assert_not_empty(&self, op: &str) {
        assert!(!self.is_empty(), "{op}: vec {} is empty", self.prefix);
    }

    /// Writes `len` to the store if the length is persisted.
    fn persist_len(&self, len: usize) -> Result<()> {
        if self.mode == LenMode::Persisted {
            self.store.set(&len_key(&self.prefix), &len.to_bytes())?;
        }
        Ok(())
    }

    /// Raw payload of an in-range index. A missing entry is an invariant breach.
    fn read_raw_checked(&self, index: usize) -> Result<Vec<u8>> {
        let Some(bytes) = self.store.get(&self.key(index))? else {
            panic!(
                "Missing store entry {} for in-range index {index} (len {})",
                self.key_string(index),
                self.len
            );
        };
        Ok(bytes)
    }
}
