#![forbid(unsafe_code)]
//! Pledge persistence: a backend-agnostic store contract plus the two
//! interchangeable backends (volatile in-memory, JSON flat file).

mod contracts;
mod file;
mod memory;

pub use contracts::{PledgeStore, StoreError, StoreErrorCode};
pub use file::FileStore;
pub use memory::MemoryStore;

pub const CRATE_NAME: &str = "verda-store";
