//! Persistent key-value storage
//!
//! The game keeps exactly one value here, the high score, but the store is a
//! plain string map so hosts can back it with whatever they have.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors raised while persisting values
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode store contents: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A string-keyed store that survives across games
pub trait KeyValueStore {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
