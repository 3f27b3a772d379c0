//! Banking store contract.

use rust_decimal::Decimal;

use crate::accounts::Account;
use crate::errors::Result;
use crate::transactions::{NewTransaction, Transaction};

/// Trait defining the contract for the banking state store.
///
/// The store is the only writer of balances and transaction history. Apart
/// from [`apply_ledger_entry`](BankStoreTrait::apply_ledger_entry), none of
/// these operations report failure: lookups that miss degrade to `None` or a
/// no-op, and persistence is best-effort.
pub trait BankStoreTrait: Send + Sync {
    /// All accounts in seed/persisted order.
    fn accounts(&self) -> Vec<Account>;

    /// All transactions in insertion order, newest insertion first.
    fn transactions(&self) -> Vec<Transaction>;

    /// Looks up a single account by id.
    fn get_account(&self, account_id: &str) -> Option<Account>;

    /// The primary account (first in the list), if there is one.
    fn get_current_account(&self) -> Option<Account>;

    /// Up to `count` transactions with the latest dates, newest first.
    fn get_recent_transactions(&self, count: usize) -> Vec<Transaction>;

    /// Records a transaction without touching any balance.
    ///
    /// Assigns a fresh id, the current time and a `completed` status, then
    /// prepends the record to the history. Performs no validation.
    fn add_transaction(&self, draft: NewTransaction) -> Transaction;

    /// Adds `delta` to the balance of `account_id`.
    ///
    /// An unknown id is ignored. Negative results are allowed.
    fn update_balance(&self, account_id: &str, delta: Decimal);

    /// Records `draft` and applies its signed amount to `account_id` as one unit.
    ///
    /// Debit kinds (`sent`, `payment`, `withdrawal`) reduce the balance;
    /// credit kinds increase it. If the account does not exist nothing is
    /// changed and `Error::AccountNotFound` is returned.
    fn apply_ledger_entry(&self, account_id: &str, draft: NewTransaction) -> Result<Transaction>;

    /// Replaces all state with the seed data and persists it.
    fn reset(&self);
}
