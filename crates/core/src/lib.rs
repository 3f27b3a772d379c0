//! Skylet Core - accounts, transactions, and the banking state store.
//!
//! This crate holds the simulated banking model behind the Skylet demo. It is
//! storage-agnostic: state is persisted through the [`persistence::KeyValueStore`]
//! trait, implemented in memory here and on disk by `skylet-storage-fs`.

pub mod accounts;
pub mod auth;
pub mod banking;
pub mod constants;
pub mod context;
pub mod errors;
pub mod events;
pub mod persistence;
pub mod reports;
pub mod store;
pub mod transactions;

pub use accounts::{Account, CardNetwork};
pub use context::BankContext;
pub use store::{BankStore, BankStoreTrait};
pub use transactions::{NewTransaction, Transaction, TransactionStatus, TransactionType};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
