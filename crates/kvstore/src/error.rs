use std::{io, result};

use thiserror::Error;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for store operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] io::Error),

    #[error(transparent)]
    RawDB(#[from] rawdb::Error),

    #[error("Invalid key {key:?}: not a valid region id")]
    InvalidKey { key: Vec<u8> },
}
