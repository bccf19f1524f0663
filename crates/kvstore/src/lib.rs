#![doc = include_str!("../README.md")]

use std::sync::Arc;

pub mod error;
mod memory;
mod region;

pub use error::*;
pub use memory::*;
pub use region::*;

/// Flat, byte-keyed, byte-valued persistent map.
///
/// Every call is a single synchronous point operation. There is no batching
/// and no transaction spanning several calls: a caller issuing `get` then
/// `del` may observe the store between the two.
///
/// Receivers are `&self` so one store can back many collections at once.
pub trait Store: Send + Sync {
    /// Returns true if `key` is present.
    fn has(&self, key: &[u8]) -> Result<bool>;

    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Inserts or overwrites the value stored under `key`.
    fn set(&self, key: &[u8], value: &[u8]) -> Result<()>;

    /// Removes `key`. Succeeds if the key was already absent.
    fn del(&self, key: &[u8]) -> Result<()>;
}

impl<S> Store for &S
where
    S: Store + ?Sized,
{
    #[inline]
    fn has(&self, key: &[u8]) -> Result<bool> {
        (**self).has(key)
    }

    #[inline]
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    #[inline]
    fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }

    #[inline]
    fn del(&self, key: &[u8]) -> Result<()> {
        (**self).del(key)
    }
}

impl<S> Store for Arc<S>
where
    S: Store + ?Sized,
{
    #[inline]
    fn has(&self, key: &[u8]) -> Result<bool> {
        (**self).has(key)
    }

    #[inline]
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    #[inline]
    fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }

    #[inline]
    fn del(&self, key: &[u8]) -> Result<()> {
        (**self).del(key)
    }
}
