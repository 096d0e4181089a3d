//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Key-value persistence (file, in-memory)

pub mod storage;

pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
