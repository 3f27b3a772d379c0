use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use log::{debug, error, warn};
use rust_decimal::Decimal;

use super::store_traits::BankStoreTrait;
use crate::accounts::{seed_accounts, Account};
use crate::errors::{Error, Result};
use crate::events::{DomainEvent, DomainEventSink};
use crate::persistence::{
    load_accounts, load_transactions, save_accounts, save_snapshot, save_transactions,
    KeyValueStore,
};
use crate::transactions::{seed_transactions, NewTransaction, Transaction};

/// In-memory state guarded by the store's lock.
#[derive(Debug, Clone, Default)]
struct BankState {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
}

impl BankState {
    fn seeded() -> Self {
        Self {
            accounts: seed_accounts(),
            transactions: seed_transactions(Utc::now()),
        }
    }
}

/// Authoritative holder of accounts and transactions for one session.
pub struct BankStore {
    state: RwLock<BankState>,
    storage: Arc<dyn KeyValueStore>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl BankStore {
    /// Builds a store from whatever `storage` holds.
    ///
    /// Each list is loaded on its own. A list that is missing or fails to
    /// decode is replaced by its seed; decode failures are logged and dropped.
    pub fn load(storage: Arc<dyn KeyValueStore>, event_sink: Arc<dyn DomainEventSink>) -> Self {
        let accounts = match load_accounts(storage.as_ref()) {
            Ok(Some(accounts)) => accounts,
            Ok(None) => {
                debug!("No persisted accounts found, using seed data");
                seed_accounts()
            }
            Err(e) => {
                warn!("Discarding persisted accounts: {}", e);
                seed_accounts()
            }
        };

        let transactions = match load_transactions(storage.as_ref()) {
            Ok(Some(transactions)) => transactions,
            Ok(None) => {
                debug!("No persisted transactions found, using seed data");
                seed_transactions(Utc::now())
            }
            Err(e) => {
                warn!("Discarding persisted transactions: {}", e);
                seed_transactions(Utc::now())
            }
        };

        debug!(
            "Bank store loaded with {} account(s) and {} transaction(s)",
            accounts.len(),
            transactions.len()
        );

        Self::with_state(storage, event_sink, accounts, transactions)
    }

    /// Builds a store from explicit lists without reading `storage`.
    pub fn with_state(
        storage: Arc<dyn KeyValueStore>,
        event_sink: Arc<dyn DomainEventSink>,
        accounts: Vec<Account>,
        transactions: Vec<Transaction>,
    ) -> Self {
        Self {
            state: RwLock::new(BankState {
                accounts,
                transactions,
            }),
            storage,
            event_sink,
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, BankState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, BankState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist_accounts(&self, state: &BankState) {
        if let Err(e) = save_accounts(self.storage.as_ref(), &state.accounts) {
            error!("Failed to persist accounts: {}", e);
        }
    }

    fn persist_transactions(&self, state: &BankState) {
        if let Err(e) = save_transactions(self.storage.as_ref(), &state.transactions) {
            error!("Failed to persist transactions: {}", e);
        }
    }

    fn persist_snapshot(&self, state: &BankState) {
        if let Err(e) = save_snapshot(self.storage.as_ref(), &state.accounts, &state.transactions) {
            error!("Failed to persist bank snapshot: {}", e);
        }
    }
}

impl BankStoreTrait for BankStore {
    fn accounts(&self) -> Vec<Account> {
        self.read_state().accounts.clone()
    }

    fn transactions(&self) -> Vec<Transaction> {
        self.read_state().transactions.clone()
    }

    fn get_account(&self, account_id: &str) -> Option<Account> {
        self.read_state()
            .accounts
            .iter()
            .find(|a| a.id == account_id)
            .cloned()
    }

    fn get_current_account(&self) -> Option<Account> {
        self.read_state().accounts.first().cloned()
    }

    fn get_recent_transactions(&self, count: usize) -> Vec<Transaction> {
        let mut recent = self.read_state().transactions.clone();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(count);
        recent
    }

    fn add_transaction(&self, draft: NewTransaction) -> Transaction {
        let transaction = Transaction::from_draft(draft, Utc::now());
        {
            let mut state = self.write_state();
            state.transactions.insert(0, transaction.clone());
            self.persist_transactions(&state);
        }
        debug!(
            "Recorded transaction {} ({} {})",
            transaction.id, transaction.kind, transaction.amount
        );
        self.event_sink
            .emit(DomainEvent::transaction_recorded(&transaction));
        transaction
    }

    fn update_balance(&self, account_id: &str, delta: Decimal) {
        let balance = {
            let mut state = self.write_state();
            let Some(account) = state.accounts.iter_mut().find(|a| a.id == account_id) else {
                debug!("Ignoring balance update for unknown account {}", account_id);
                return;
            };
            account.balance += delta;
            let balance = account.balance;
            self.persist_accounts(&state);
            balance
        };
        self.event_sink
            .emit(DomainEvent::balance_updated(account_id, delta, balance));
    }

    fn apply_ledger_entry(&self, account_id: &str, draft: NewTransaction) -> Result<Transaction> {
        let (transaction, balance) = {
            let mut state = self.write_state();
            let index = state
                .accounts
                .iter()
                .position(|a| a.id == account_id)
                .ok_or_else(|| Error::AccountNotFound(account_id.to_string()))?;

            let transaction = Transaction::from_draft(draft, Utc::now());
            state.accounts[index].balance += transaction.signed_amount();
            state.transactions.insert(0, transaction.clone());
            self.persist_snapshot(&state);
            (transaction, state.accounts[index].balance)
        };

        debug!(
            "Applied ledger entry {} to {}: {} {}, balance now {}",
            transaction.id, account_id, transaction.kind, transaction.amount, balance
        );
        self.event_sink.emit_batch(vec![
            DomainEvent::transaction_recorded(&transaction),
            DomainEvent::balance_updated(account_id, transaction.signed_amount(), balance),
        ]);
        Ok(transaction)
    }

    fn reset(&self) {
        {
            let mut state = self.write_state();
            *state = BankState::seeded();
            self.persist_snapshot(&state);
        }
        self.event_sink.emit(DomainEvent::StoreReset);
    }
}
