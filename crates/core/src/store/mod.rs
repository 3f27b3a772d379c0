//! Store module - the banking state store and its contract.

mod bank_store;
mod store_traits;


pub use bank_store::BankStore;
pub use store_traits::BankStoreTrait;
