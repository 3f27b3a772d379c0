//! Persistence module - key-value storage contract and snapshot codec.

mod kv_store;
mod snapshot;

#[cfg(test)]
mod snapshot_tests;

pub use kv_store::{InMemoryKeyValueStore, KeyValueStore};
pub use snapshot::{
    load_accounts, load_transactions, save_accounts, save_snapshot, save_transactions,
};
