use std::sync::Arc;

use kvstore::{Error, MemoryStore, RegionStore, Result, Store};
use tempfile::TempDir;

/// Helper to create a temporary region store
fn setup_region_store() -> Result<(RegionStore, TempDir)> {
    let temp_dir = TempDir::new()?;
    let store = RegionStore::open(temp_dir.path())?;
    Ok((store, temp_dir))
}

/// Contract every backend must honor
fn run_store_contract<S>(store: &S) -> Result<()>
where
    S: Store,
{
    assert!(!store.has(b"a::0")?);
    assert_eq!(store.get(b"a::0")?, None);

    store.set(b"a::0", b"first")?;
    assert!(store.has(b"a::0")?);
    assert_eq!(store.get(b"a::0")?, Some(b"first".to_vec()));

    // Overwrite with a shorter value must not leave trailing bytes behind
    store.set(b"a::0", b"x")?;
    assert_eq!(store.get(b"a::0")?, Some(b"x".to_vec()));

    // Empty values are present, not absent
    store.set(b"a::1", b"")?;
    assert!(store.has(b"a::1")?);
    assert_eq!(store.get(b"a::1")?, Some(vec![]));

    store.del(b"a::0")?;
    assert!(!store.has(b"a::0")?);
    assert_eq!(store.get(b"a::0")?, None);

    // Deleting an absent key is fine
    store.del(b"a::0")?;
    store.del(b"never-set")?;

    assert!(store.has(b"a::1")?);

    Ok(())
}

#[test]
fn test_memory_store_contract() -> Result<()> {
    let store = MemoryStore::new();
    run_store_contract(&store)?;

    assert_eq!(store.len(), 1);
    assert_eq!(store.keys(), vec![b"a::1".to_vec()]);

    store.clear();
    assert!(store.is_empty());

    Ok(())
}

#[test]
fn test_region_store_contract() -> Result<()> {
    let (store, _temp) = setup_region_store()?;
    run_store_contract(&store)
}

#[test]
fn test_shared_store_through_arc() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let other = Arc::clone(&store);

    store.set(b"k", b"v")?;
    assert_eq!(other.get(b"k")?, Some(b"v".to_vec()));

    let dyn_store: Arc<dyn Store> = other;
    dyn_store.del(b"k")?;
    assert!(!store.has(b"k")?);

    Ok(())
}

#[test]
fn test_memory_keys_are_sorted() -> Result<()> {
    let store = MemoryStore::new();
    store.set(b"b", b"2")?;
    store.set(b"a", b"1")?;
    store.set(b"c", b"3")?;

    assert_eq!(store.keys(), vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    assert_eq!(store.entries().get(b"b".as_slice()), Some(&b"2".to_vec()));

    Ok(())
}

#[test]
fn test_region_store_rejects_non_utf8_keys() -> Result<()> {
    let (store, _temp) = setup_region_store()?;

    let key = [0xff, 0xfe];
    assert!(matches!(store.set(&key, b"v"), Err(Error::InvalidKey { .. })));
    assert!(matches!(store.has(&key), Err(Error::InvalidKey { .. })));

    Ok(())
}

#[test]
fn test_region_store_rejects_unusable_ids() -> Result<()> {
    let (store, _temp) = setup_region_store()?;

    let longest = vec![b'k'; 1024];
    let too_long = vec![b'k'; 1025];
    let keys: [&[u8]; 5] = [b"", b"tab\tkey", b"line\n", b"nul\0", &too_long];
    for key in keys {
        assert!(matches!(store.set(key, b"v"), Err(Error::InvalidKey { .. })));
        assert!(matches!(store.get(key), Err(Error::InvalidKey { .. })));
        assert!(matches!(store.has(key), Err(Error::InvalidKey { .. })));
        assert!(matches!(store.del(key), Err(Error::InvalidKey { .. })));
    }

    store.set(&longest, b"v")?;
    assert_eq!(store.get(&longest)?, Some(b"v".to_vec()));

    Ok(())
}

#[test]
fn test_region_store_visible_across_handles() -> Result<()> {
    let (store, _temp) = setup_region_store()?;
    let other = RegionStore::from(store.db().clone());

    store.set(b"shared", b"value")?;

    // No flush needed for in-process visibility
    assert_eq!(other.get(b"shared")?, Some(b"value".to_vec()));

    Ok(())
}

#[test]
fn test_region_store_persists_after_flush() -> Result<()> {
    let temp_dir = TempDir::new()?;

    {
        let store = RegionStore::open(temp_dir.path())?;
        store.set(b"kept", b"on disk")?;
        store.set(b"dropped", b"gone")?;
        store.del(b"dropped")?;
        store.flush()?;
    }

    {
        let store = RegionStore::open(temp_dir.path())?;
        assert_eq!(store.get(b"kept")?, Some(b"on disk".to_vec()));
        assert!(!store.has(b"dropped")?);
    }

    Ok(())
}
