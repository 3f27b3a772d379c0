//! Domain event sink for the CLI runtime.
//!
//! The CLI has nothing to refresh when state changes, so events become
//! structured log records.

use skylet_core::events::{DomainEvent, DomainEventSink};

#[derive(Clone, Default)]
pub struct TracingDomainEventSink;

impl DomainEventSink for TracingDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        match event {
            DomainEvent::TransactionRecorded {
                transaction_id,
                kind,
                amount,
                description,
            } => tracing::info!(
                %transaction_id,
                %kind,
                %amount,
                %description,
                "Transaction recorded"
            ),
            DomainEvent::BalanceUpdated {
                account_id,
                delta,
                balance,
            } => tracing::info!(%account_id, %delta, %balance, "Balance updated"),
            DomainEvent::StoreReset => tracing::info!("Banking data reset to seed"),
            DomainEvent::SessionStarted { username } => {
                tracing::info!(%username, "Session started")
            }
            DomainEvent::SessionEnded => tracing::info!("Session ended"),
        }
    }
}
