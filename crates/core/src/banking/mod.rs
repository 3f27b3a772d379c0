//! Banking module - validated transfers, withdrawals, deposits, top-ups and bill payments.

mod banking_model;
mod banking_service;


pub use banking_model::*;
pub use banking_service::BankingService;
