//! Skylet Storage FS - durable key-value storage in a single JSON document.
//!
//! Implements [`skylet_core::persistence::KeyValueStore`] on top of the local
//! filesystem so a CLI session's accounts, history and signed-in user survive
//! between runs.

mod file_store;

pub use file_store::FileKeyValueStore;
