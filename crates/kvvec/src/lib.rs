#![doc = include_str!("../README.md")]

pub use kvstore::{Error as StoreError, MemoryStore, RegionStore, Store};

mod codec;
mod error;
mod key;
mod vec;

pub use codec::*;
pub use error::*;
pub use key::*;
pub use vec::*;
