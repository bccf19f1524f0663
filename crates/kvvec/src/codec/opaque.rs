use std::fmt::{self, Display};

use super::Encode;

/// Write-only category for values with no dedicated codec.
///
/// Encodes the wrapped value through its [`Display`] output. There is no
/// inverse, so `Opaque` does not implement [`Decode`](super::Decode) and a
/// vec of opaque values only exposes the operations that never read back:
///
/// ```
/// use std::net::Ipv4Addr;
/// use kvvec::{KvVec, MemoryStore, Opaque};
///
/// let store = MemoryStore::new();
/// let mut vec = KvVec::new(&store, "hosts");
/// vec.push(Opaque(Ipv4Addr::LOCALHOST))?;
/// assert_eq!(store.entries().get(b"hosts::0".as_slice()), Some(&b"127.0.0.1".to_vec()));
/// # Ok::<(), kvvec::Error>(())
/// ```
///
/// ```compile_fail
/// use std::net::Ipv4Addr;
/// use kvvec::{KvVec, MemoryStore, Opaque};
///
/// let store = MemoryStore::new();
/// let mut vec = KvVec::new(&store, "hosts");
/// vec.push(Opaque(Ipv4Addr::LOCALHOST))?;
/// let _ = vec.pop()?;
/// # Ok::<(), kvvec::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opaque<T>(pub T);

impl<T> Encode for Opaque<T>
where
    T: Display,
{
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_string().into_bytes()
    }
}

impl<T> Display for Opaque<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
