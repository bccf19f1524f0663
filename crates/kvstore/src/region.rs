use std::{path::Path, str};

use log::{debug, trace};
use rawdb::Database;

use crate::{Error, Result, Store};

const MAX_ID_LEN: usize = 1024;

/// Persistent store mapping each key to one `rawdb` region.
///
/// The region id is the key and the region content is the value. Writes land
/// in the shared mmap and are immediately visible to every handle on the same
/// database, but are only durable after [`flush`](Self::flush).
#[derive(Debug, Clone)]
#[must_use = "Store should be kept to keep the database open"]
pub struct RegionStore(Database);

impl RegionStore {
    /// Opens or creates the database directory at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let db = Database::open(path)?;
        debug!("Opened region store at {}", path.display());
        Ok(Self(db))
    }

    #[inline]
    pub fn db(&self) -> &Database {
        &self.0
    }

    /// Persists all pending writes and region metadata.
    pub fn flush(&self) -> Result<()> {
        self.0.flush()?;
        debug!("Flushed region store at {}", self.0.path().display());
        Ok(())
    }

    /// Maps a key to a region id, rejecting what `rawdb` would panic on:
    /// non UTF-8, empty, longer than 1024 bytes, or with control characters.
    fn id(key: &[u8]) -> Result<&str> {
        let invalid = || Error::InvalidKey { key: key.to_vec() };
        let id = str::from_utf8(key).map_err(|_| invalid())?;
        if id.is_empty() || id.len() > MAX_ID_LEN || id.chars().any(char::is_control) {
            return Err(invalid());
        }
        Ok(id)
    }
}

impl From<Database> for RegionStore {
    fn from(db: Database) -> Self {
        Self(db)
    }
}

impl Store for RegionStore {
    fn has(&self, key: &[u8]) -> Result<bool> {
        Ok(self.0.get_region(Self::id(key)?).is_some())
    }

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self
            .0
            .get_region(Self::id(key)?)
            .map(|region| region.create_reader().read_all().to_vec()))
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        let id = Self::id(key)?;
        trace!("set {id} ({} bytes)", value.len());
        self.0.create_region_if_needed(id)?.truncate_write_all(0, value)?;
        Ok(())
    }

    fn del(&self, key: &[u8]) -> Result<()> {
        let id = Self::id(key)?;
        trace!("del {id}");
        self.0.remove_region_with_id(id)?;
        Ok(())
    }
}
