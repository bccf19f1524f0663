use serde::{Serialize, de::DeserializeOwned};

use crate::Result;

use super::{Decode, Encode};

/// Stores any serde type as JSON.
///
/// # Panics
///
/// Encoding panics if `T` can't be serialized to JSON, e.g. a map with
/// non-string keys or a `Serialize` impl that returns an error.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Json<T>(pub T);

impl<T> Encode for Json<T>
where
    T: Serialize,
{
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(&self.0)
            .unwrap_or_else(|e| panic!("Value can't be serialized to JSON: {e}"))
    }
}

impl<T> Decode for Json<T>
where
    T: DeserializeOwned,
{
    #[inline]
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self(serde_json::from_slice(bytes)?))
    }
}
