use std::collections::BTreeMap;

use log::trace;
use parking_lot::{RwLock, RwLockReadGuard};

use crate::{Result, Store};

/// In-process store keeping every entry in an ordered map.
///
/// Nothing survives the process, but entries do outlive any collection built
/// on top of it, which is enough to exercise cross-instance behavior.
#[derive(Debug, Default)]
pub struct MemoryStore(RwLock<BTreeMap<Vec<u8>, Vec<u8>>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All keys in byte order.
    pub fn keys(&self) -> Vec<Vec<u8>> {
        self.0.read().keys().cloned().collect()
    }

    pub fn clear(&self) {
        self.0.write().clear();
    }

    /// Read guard over the raw map, for out-of-band inspection.
    ///
    /// Holds the lock until dropped, blocking writers.
    #[inline]
    pub fn entries(&self) -> RwLockReadGuard<'_, BTreeMap<Vec<u8>, Vec<u8>>> {
        self.0.read()
    }
}

impl Store for MemoryStore {
    fn has(&self, key: &[u8]) -> Result<bool> {
        Ok(self.0.read().contains_key(key))
    }

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.0.read().get(key).cloned())
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        trace!("set {} ({} bytes)", String::from_utf8_lossy(key), value.len());
        self.0.write().insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn del(&self, key: &[u8]) -> Result<()> {
        trace!("del {}", String::from_utf8_lossy(key));
        self.0.write().remove(key);
        Ok(())
    }
}
