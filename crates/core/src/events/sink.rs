//! Event sinks: the receiving side of [`DomainEvent`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::DomainEvent;

/// Receiver for events raised by the store and the auth service.
///
/// Events arrive after the state change is committed and the store's lock is
/// released. A sink may drop events; it must not block.
pub trait DomainEventSink: Send + Sync {
    fn emit(&self, event: DomainEvent);

    /// Delivers events in order. Defaults to one `emit` per event.
    fn emit_batch(&self, events: Vec<DomainEvent>) {
        events.into_iter().for_each(|event| self.emit(event));
    }
}

/// Discards every event.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {}
}

/// Records events in arrival order so tests can assert on them.
#[derive(Clone, Default)]
pub struct MockDomainEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockDomainEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn recorded(&self) -> MutexGuard<'_, Vec<DomainEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.recorded().clone()
    }

    pub fn len(&self) -> usize {
        self.recorded().len()
    }

    pub fn is_empty(&self) -> bool {
        self.recorded().is_empty()
    }
}

impl DomainEventSink for MockDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        self.recorded().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_noop_sink_accepts_events() {
        let sink = NoOpDomainEventSink;
        sink.emit(DomainEvent::StoreReset);
        sink.emit_batch(vec![
            DomainEvent::session_started("testuser"),
            DomainEvent::SessionEnded,
        ]);
    }

    #[test]
    fn test_mock_sink_keeps_arrival_order() {
        let sink = MockDomainEventSink::new();
        assert!(sink.is_empty());

        sink.emit(DomainEvent::balance_updated("acc1", dec!(-10), dec!(90)));
        sink.emit_batch(vec![
            DomainEvent::session_started("testuser"),
            DomainEvent::SessionEnded,
        ]);

        assert_eq!(sink.len(), 3);
        assert_eq!(
            sink.events(),
            vec![
                DomainEvent::balance_updated("acc1", dec!(-10), dec!(90)),
                DomainEvent::session_started("testuser"),
                DomainEvent::SessionEnded,
            ]
        );
    }

    #[test]
    fn test_mock_sink_clones_share_events() {
        let sink = MockDomainEventSink::new();
        let clone = sink.clone();

        clone.emit(DomainEvent::StoreReset);

        assert_eq!(sink.events(), vec![DomainEvent::StoreReset]);
    }
}
