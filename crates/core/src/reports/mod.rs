//! Reports module - income/expense summaries and spending breakdowns.

mod reports_model;
mod reports_service;

#[cfg(test)]
mod reports_service_tests;

pub use reports_model::*;
pub use reports_service::*;
