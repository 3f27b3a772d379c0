//! Session-scoped ownership of the banking store.
//!
//! A [`BankContext`] is the single construction point for a [`BankStore`]:
//! the store exists only while a user is signed in and is dropped on logout.
//! Consumers receive it by reference instead of reaching for a global.

use std::sync::{Arc, PoisonError, RwLock};

use log::debug;

use crate::auth::{AuthService, User};
use crate::events::DomainEventSink;
use crate::persistence::KeyValueStore;
use crate::store::BankStore;

pub struct BankContext {
    auth: AuthService,
    store: RwLock<Option<Arc<BankStore>>>,
    storage: Arc<dyn KeyValueStore>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl BankContext {
    /// Creates a context, rebuilding the store if a session was restored.
    pub fn new(storage: Arc<dyn KeyValueStore>, event_sink: Arc<dyn DomainEventSink>) -> Self {
        let auth = AuthService::new(storage.clone(), event_sink.clone());
        let store = auth
            .is_authenticated()
            .then(|| Arc::new(BankStore::load(storage.clone(), event_sink.clone())));

        Self {
            auth,
            store: RwLock::new(store),
            storage,
            event_sink,
        }
    }

    /// Signs in and, on success, loads the store for the session.
    pub fn login(&self, username: &str, password: &str) -> bool {
        if !self.auth.login(username, password) {
            return false;
        }
        let store = Arc::new(BankStore::load(
            self.storage.clone(),
            self.event_sink.clone(),
        ));
        *self.store.write().unwrap_or_else(PoisonError::into_inner) = Some(store);
        true
    }

    /// Signs out and drops the session's store.
    ///
    /// Persisted banking data is kept; only the in-memory state is released.
    pub fn logout(&self) {
        self.auth.logout();
        if self
            .store
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some()
        {
            debug!("Bank store released");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn current_user(&self) -> Option<User> {
        self.auth.current_user()
    }

    /// The session's store, or `None` when signed out.
    pub fn store(&self) -> Option<Arc<BankStore>> {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::SEED_ACCOUNT_ID;
    use crate::auth::{DEMO_PASSWORD, DEMO_USERNAME};
    use crate::events::NoOpDomainEventSink;
    use crate::persistence::InMemoryKeyValueStore;
    use crate::store::BankStoreTrait;
    use rust_decimal_macros::dec;

    fn context(storage: Arc<InMemoryKeyValueStore>) -> BankContext {
        BankContext::new(storage, Arc::new(NoOpDomainEventSink))
    }

    #[test]
    fn store_exists_only_while_signed_in() {
        let ctx = context(Arc::new(InMemoryKeyValueStore::new()));
        assert!(ctx.store().is_none());

        assert!(!ctx.login(DEMO_USERNAME, "nope"));
        assert!(ctx.store().is_none());

        assert!(ctx.login(DEMO_USERNAME, DEMO_PASSWORD));
        assert!(ctx.store().is_some());

        ctx.logout();
        assert!(ctx.store().is_none());
        assert!(!ctx.is_authenticated());
    }

    #[test]
    fn restored_session_rebuilds_store_from_storage() {
        let storage = Arc::new(InMemoryKeyValueStore::new());
        let first = context(storage.clone());
        first.login(DEMO_USERNAME, DEMO_PASSWORD);
        first
            .store()
            .unwrap()
            .update_balance(SEED_ACCOUNT_ID, dec!(-1000));

        let second = context(storage);

        let store = second.store().expect("session should be restored");
        assert_eq!(store.get_current_account().unwrap().balance, dec!(14000.00));
    }

    #[test]
    fn logout_keeps_persisted_banking_data() {
        let storage = Arc::new(InMemoryKeyValueStore::new());
        let ctx = context(storage.clone());
        ctx.login(DEMO_USERNAME, DEMO_PASSWORD);
        ctx.store().unwrap().update_balance(SEED_ACCOUNT_ID, dec!(5));
        ctx.logout();

        ctx.login(DEMO_USERNAME, DEMO_PASSWORD);

        assert_eq!(
            ctx.store().unwrap().get_current_account().unwrap().balance,
            dec!(15005.00)
        );
    }
}
