//! Storage Adapters
//!
//! Implementations of the KeyValueStore port for persisting the session record.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStore** - Stores each record as a JSON file on disk
//! - **InMemoryKeyValueStore** - Stores records in memory (testing/throwaway sessions)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
//!
//! // Survives restarts
//! let store = FileKeyValueStore::new("./data");
//!
//! // Gone when the process exits
//! let store = InMemoryKeyValueStore::new();
//! ```

mod file_key_value_store;
mod in_memory_key_value_store;

pub use file_key_value_store::FileKeyValueStore;
pub use in_memory_key_value_store::InMemoryKeyValueStore;
