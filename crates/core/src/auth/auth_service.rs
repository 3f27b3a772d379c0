use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, error, info, warn};

use super::auth_model::{demo_user, User, DEMO_PASSWORD, DEMO_USERNAME};
use crate::constants::USER_STORAGE_KEY;
use crate::events::{DomainEvent, DomainEventSink};
use crate::persistence::KeyValueStore;

/// Hardcoded credential check with a persisted session record.
///
/// Nothing here is security: it gates which screens a demo shows.
pub struct AuthService {
    user: RwLock<Option<User>>,
    storage: Arc<dyn KeyValueStore>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl AuthService {
    /// Restores a previous session from `storage`, if one is readable.
    ///
    /// An unreadable record is deleted and the service starts signed out.
    pub fn new(storage: Arc<dyn KeyValueStore>, event_sink: Arc<dyn DomainEventSink>) -> Self {
        let user = restore_user(storage.as_ref());
        Self {
            user: RwLock::new(user),
            storage,
            event_sink,
        }
    }

    /// Checks the credentials and starts a session on a match.
    pub fn login(&self, username: &str, password: &str) -> bool {
        if username != DEMO_USERNAME || password != DEMO_PASSWORD {
            info!("Rejected login for '{}'", username);
            return false;
        }

        let user = demo_user();
        match serde_json::to_string(&user) {
            Ok(json) => {
                if let Err(e) = self.storage.set(USER_STORAGE_KEY, &json) {
                    error!("Failed to persist session user: {}", e);
                }
            }
            Err(e) => error!("Failed to encode session user: {}", e),
        }

        info!("{} signed in", user.username);
        let username = user.username.clone();
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
        self.event_sink.emit(DomainEvent::session_started(username));
        true
    }

    /// Ends the session and forgets the persisted user record.
    pub fn logout(&self) {
        let previous = self
            .user
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Err(e) = self.storage.remove(USER_STORAGE_KEY) {
            error!("Failed to clear session user: {}", e);
        }
        if let Some(user) = previous {
            info!("{} signed out", user.username);
            self.event_sink.emit(DomainEvent::SessionEnded);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn current_user(&self) -> Option<User> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

fn restore_user(storage: &dyn KeyValueStore) -> Option<User> {
    let raw = match storage.get(USER_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("Failed to read session user: {}", e);
            return None;
        }
    };

    match serde_json::from_str::<User>(&raw) {
        Ok(user) => {
            debug!("Restored session for {}", user.username);
            Some(user)
        }
        Err(e) => {
            warn!("Discarding unreadable session user: {}", e);
            if let Err(e) = storage.remove(USER_STORAGE_KEY) {
                error!("Failed to clear session user: {}", e);
            }
            None
        }
    }
}
