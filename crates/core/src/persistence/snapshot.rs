//! Encoding of the account and transaction lists under their storage keys.
//!
//! Every save writes a whole list. Loads distinguish "nothing stored"
//! (`Ok(None)`) from "stored but unreadable" (`Err(Error::Decode)`), leaving
//! the fallback decision to the caller.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::kv_store::KeyValueStore;
use crate::accounts::Account;
use crate::constants::{ACCOUNTS_STORAGE_KEY, TRANSACTIONS_STORAGE_KEY};
use crate::errors::{Error, Result};
use crate::transactions::Transaction;

pub fn load_accounts(storage: &dyn KeyValueStore) -> Result<Option<Vec<Account>>> {
    load_list(storage, ACCOUNTS_STORAGE_KEY)
}

pub fn load_transactions(storage: &dyn KeyValueStore) -> Result<Option<Vec<Transaction>>> {
    load_list(storage, TRANSACTIONS_STORAGE_KEY)
}

pub fn save_accounts(storage: &dyn KeyValueStore, accounts: &[Account]) -> Result<()> {
    storage.set(ACCOUNTS_STORAGE_KEY, &encode(accounts)?)
}

pub fn save_transactions(storage: &dyn KeyValueStore, transactions: &[Transaction]) -> Result<()> {
    storage.set(TRANSACTIONS_STORAGE_KEY, &encode(transactions)?)
}

/// Writes both lists in one batch.
pub fn save_snapshot(
    storage: &dyn KeyValueStore,
    accounts: &[Account],
    transactions: &[Transaction],
) -> Result<()> {
    let entries = [
        (ACCOUNTS_STORAGE_KEY, encode(accounts)?),
        (TRANSACTIONS_STORAGE_KEY, encode(transactions)?),
    ];
    storage.set_many(&entries)
}

fn encode<T: Serialize>(items: &[T]) -> Result<String> {
    serde_json::to_string(items).map_err(|e| Error::Unexpected(e.to_string()))
}

fn load_list<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Result<Option<Vec<T>>> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str::<Vec<T>>(&raw)
        .map(Some)
        .map_err(|e| Error::Decode(format!("{}: {}", key, e)))
}
