//! Domain event types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::{Transaction, TransactionType};

/// Domain events emitted after successful mutations.
///
/// These are facts about state that already changed. Adapters turn them into
/// whatever the surface needs (a log line, a notification, a redraw).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A transaction was appended to the history.
    TransactionRecorded {
        transaction_id: String,
        kind: TransactionType,
        amount: Decimal,
        description: String,
    },

    /// An account balance changed.
    BalanceUpdated {
        account_id: String,
        delta: Decimal,
        balance: Decimal,
    },

    /// The store was restored to its seed data.
    StoreReset,

    /// A user signed in.
    SessionStarted { username: String },

    /// The signed-in user signed out.
    SessionEnded,
}

impl DomainEvent {
    /// Creates a TransactionRecorded event.
    pub fn transaction_recorded(transaction: &Transaction) -> Self {
        Self::TransactionRecorded {
            transaction_id: transaction.id.clone(),
            kind: transaction.kind,
            amount: transaction.amount,
            description: transaction.description.clone(),
        }
    }

    /// Creates a BalanceUpdated event.
    pub fn balance_updated(account_id: impl Into<String>, delta: Decimal, balance: Decimal) -> Self {
        Self::BalanceUpdated {
            account_id: account_id.into(),
            delta,
            balance,
        }
    }

    /// Creates a SessionStarted event.
    pub fn session_started(username: impl Into<String>) -> Self {
        Self::SessionStarted {
            username: username.into(),
        }
    }
}
