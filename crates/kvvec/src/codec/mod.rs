use crate::{Error, Result};

#[cfg(feature = "serde_json")]
mod json;
mod opaque;
mod scalar;
mod text;

#[cfg(feature = "serde_json")]
pub use json::*;
pub use opaque::*;

/// Serializes a value into the payload stored under its element key.
///
/// The category is picked by the element type of the vec, at compile time.
/// No type tag is written alongside the payload.
pub trait Encode {
    fn to_bytes(&self) -> Vec<u8>;
}

/// Inverse of [`Encode`].
///
/// Fixed-width categories reject payloads of the wrong length with
/// [`Error::WrongLength`].
pub trait Decode: Sized {
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
}

/// Types that can be both written and read back.
///
/// Automatically implemented for anything implementing [`Encode`] and [`Decode`].
pub trait Codec: Encode + Decode {}

impl<T> Codec for T where T: Encode + Decode {}

#[inline]
pub(crate) fn fixed<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| Error::WrongLength {
        received: bytes.len(),
        expected: N,
    })
}
