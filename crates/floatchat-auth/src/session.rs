//! Signed-in user state, persisted across restarts of the host.

use crate::api::{FakeAuthApi, User};
use crate::error::AuthError;
use crate::storage::{load_json, store_json, KeyValueStorage};
use std::rc::Rc;

pub const SESSION_KEY: &str = "auth_user";

/// Source of the currently authenticated user.
///
/// The chat widget only mounts while this reports a user, and greets
/// that user by email.
pub trait SessionIdentity {
    fn current_user(&self) -> Option<User>;

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}

pub struct AuthSession {
    api: FakeAuthApi,
    storage: Rc<dyn KeyValueStorage>,
    user: Option<User>,
}

impl AuthSession {
    /// Restores the persisted user, if any. An unreadable record is
    /// discarded and the session starts signed out.
    pub fn new(api: FakeAuthApi, storage: Rc<dyn KeyValueStorage>) -> Self {
        let user = match load_json::<User>(storage.as_ref(), SESSION_KEY) {
            Ok(user) => user,
            Err(err) => {
                log::warn!("discarding stored session: {err}");
                storage.remove_item(SESSION_KEY);
                None
            }
        };
        Self { api, storage, user }
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self.api.login(email.trim(), password)?;
        store_json(self.storage.as_ref(), SESSION_KEY, &user)?;
        log::info!("signed in as {}", user.email);
        self.user = Some(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            log::info!("signed out {}", user.email);
        }
        self.storage.remove_item(SESSION_KEY);
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn api(&self) -> &FakeAuthApi {
        &self.api
    }
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("api", &self.api)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

impl SessionIdentity for AuthSession {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }
}

impl SessionIdentity for Option<User> {
    fn current_user(&self) -> Option<User> {
        self.clone()
    }
}
