//! Transactions module - domain models, seed data, and history queries.

mod transactions_constants;
mod transactions_model;
mod transactions_query;

#[cfg(test)]
mod transactions_query_tests;

// Re-export the public interface
pub use transactions_constants::seed_transactions;
pub use transactions_model::{
    new_transaction_id, NewTransaction, Transaction, TransactionStatus, TransactionType,
};
pub use transactions_query::{TransactionQuery, TransactionSort};
