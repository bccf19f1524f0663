use std::{result, string::FromUtf8Error};

use thiserror::Error;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for kvvec operations.
///
/// Contract violations (out-of-range indices, empty vec access) are not
/// represented here: they panic.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] kvstore::Error),
    #[error(transparent)]
    Utf8(#[from] FromUtf8Error),
    #[cfg(feature = "serde_json")]
    #[error(transparent)]
    SerdeJSON(#[from] serde_json::Error),

    #[error("Wrong length: received {received} bytes, expected {expected}")]
    WrongLength { received: usize, expected: usize },
    #[error("Value {value} is out of range for {ty}")]
    OutOfRange { value: String, ty: &'static str },
    #[error("Missing store entry for in-range key {key}")]
    MissingEntry { key: String },
}
