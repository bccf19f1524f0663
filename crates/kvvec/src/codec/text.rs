use crate::Result;

use super::{Decode, Encode};

impl Encode for String {
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl Decode for String {
    #[inline]
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}

/// Raw buffers are stored as-is.
impl Encode for Vec<u8> {
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        self.clone()
    }
}

impl Decode for Vec<u8> {
    #[inline]
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bytes.to_vec())
    }
}
