use crate::{Error, Result};

use super::{Decode, Encode, fixed};

const WIDTH: usize = size_of::<u64>();

// Every integer is stored at the canonical 64-bit width and narrowed back on
// decode, so a payload only ever decodes into a type it fits in.
macro_rules! impl_codec_for_integer {
    ($wide:ty => $($t:ty),*) => {
        $(
            impl Encode for $t {
                #[inline]
                fn to_bytes(&self) -> Vec<u8> {
                    (*self as $wide).to_le_bytes().to_vec()
                }
            }

            impl Decode for $t {
                #[inline]
                #[allow(clippy::useless_conversion)]
                fn from_bytes(bytes: &[u8]) -> Result<Self> {
                    let wide = <$wide>::from_le_bytes(fixed::<WIDTH>(bytes)?);
                    <$t>::try_from(wide).map_err(|_| Error::OutOfRange {
                        value: wide.to_string(),
                        ty: stringify!($t),
                    })
                }
            }
        )*
    };
}

impl_codec_for_integer!(i64 => i8, i16, i32, i64, isize);
impl_codec_for_integer!(u64 => u8, u16, u32, u64, usize);

impl Encode for f64 {
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        self.to_le_bytes().to_vec()
    }
}

impl Decode for f64 {
    #[inline]
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(f64::from_le_bytes(fixed::<WIDTH>(bytes)?))
    }
}

impl Encode for f32 {
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        f64::from(*self).to_bytes()
    }
}

impl Decode for f32 {
    #[inline]
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        // Lossless for anything that was encoded from an f32
        Ok(f64::from_bytes(bytes)? as f32)
    }
}

impl Encode for bool {
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        vec![u8::from(*self)]
    }
}

impl Decode for bool {
    #[inline]
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let [byte] = fixed::<1>(bytes)?;
        Ok(byte != 0)
    }
}
