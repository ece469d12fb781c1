//! Storage module
//!
//! Provides the key-value store that application state is persisted through.

pub mod kv_store;

pub use kv_store::{FileStore, KeyValueStore, MemoryStore};
