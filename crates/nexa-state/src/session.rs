//! # Session Store
//!
//! Mock authentication. The current session lives in memory; the token
//! and user record are written to `auth_token` / `auth_user` on sign-in
//! and every storefront key is erased on logout.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  cold start ──► None (never restored)                                   │
//! │                                                                         │
//! │  login(email, pw) ──► nexa_core::auth::authenticate                     │
//! │        │                  ├── admin@shopnexa.com + Admin@123 ► admin    │
//! │        │                  ├── admin@shopnexa.com + other ► InvalidCreds │
//! │        │                  └── anything else ► user "Olivia"             │
//! │        ▼                                                                │
//! │  Some(session) ──► write auth_token, auth_user                          │
//! │                                                                         │
//! │  logout() ──► None ──► clear all five keys                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The admin credentials are fixed mock values, not a security boundary.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use nexa_core::{auth, Session, User};
use nexa_store::StorageKey;
use tracing::{error, info};

use crate::error::ApiResult;
use crate::writer::WriterHandle;

/// Shared handle to the signed-in session.
#[derive(Clone)]
pub struct SessionStore {
    current: Arc<Mutex<Option<Session>>>,
    writer: WriterHandle,
}

impl SessionStore {
    /// Creates a signed-out session store.
    pub fn new(writer: WriterHandle) -> Self {
        SessionStore {
            current: Arc::new(Mutex::new(None)),
            writer,
        }
    }

    /// Signs in with the mock credential check.
    ///
    /// ## Errors
    /// - `VALIDATION_ERROR` for a blank email or password
    /// - `INVALID_CREDENTIALS` for the admin address with a wrong password
    pub fn login(&self, email: &str, password: &str) -> ApiResult<Session> {
        let session = auth::authenticate(email, password, Utc::now())?;
        info!(user_id = %session.user.id, role = session.user.role.as_str(), "Signed in");
        self.start(session.clone());
        Ok(session)
    }

    /// Creates a `user` account and signs it in. No uniqueness check.
    pub fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<Session> {
        let session = auth::register(name, email, password, Utc::now())?;
        info!(user_id = %session.user.id, "Registered");
        self.start(session.clone());
        Ok(session)
    }

    /// Drops the session and queues removal of every storefront key.
    pub fn logout(&self) {
        let mut current = self.lock();
        *current = None;
        self.writer.clear_all();
        drop(current);
        info!("Signed out");
    }

    pub fn current(&self) -> Option<Session> {
        self.lock().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.lock().as_ref().map(|s| s.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.lock().as_ref().map(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.lock().as_ref().is_some_and(|s| s.user.is_admin())
    }

    fn start(&self, session: Session) {
        let mut current = self.lock();

        self.writer.set(StorageKey::AuthToken, session.token.clone());
        match serde_json::to_string(&session.user) {
            Ok(json) => self.writer.set(StorageKey::AuthUser, json),
            Err(e) => error!(error = %e, "Failed to serialize user"),
        }

        *current = Some(session);
    }

    fn lock(&self) -> MutexGuard<'_, Option<Session>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
