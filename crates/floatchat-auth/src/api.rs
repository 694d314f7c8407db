//! Demo authentication backend over a key/value store.
//!
//! Users and reset tokens live as JSON records in the supplied storage.
//! Passwords are kept in clear text: this backend only exists to give the
//! widget a signed-in user in demos and tests.

use crate::clock::WallClock;
use crate::error::AuthError;
use crate::storage::{load_json, store_json, KeyValueStorage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

pub const USERS_KEY: &str = "demo_users";
pub const RESET_TOKENS_KEY: &str = "demo_reset_tokens";

pub const DEMO_EMAIL: &str = "demo@acme.com";
pub const DEMO_PASSWORD: &str = "demo123";

/// Reset tokens expire this long after being issued.
pub const RESET_TOKEN_TTL_MS: u64 = 15 * 60 * 1000;

const RESET_TOKEN_BYTES: usize = 16;

/// Authenticated user as exposed to the rest of the application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct StoredUser {
    email: String,
    password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct StoredToken {
    email: String,
    /// Expiry in Unix milliseconds.
    exp: u64,
}

/// Opaque password-reset token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResetToken(String);

impl ResetToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResetToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub struct FakeAuthApi {
    storage: Rc<dyn KeyValueStorage>,
    clock: Rc<dyn WallClock>,
}

impl FakeAuthApi {
    /// Opens the backend and seeds the demo user if it is missing.
    pub fn new(
        storage: Rc<dyn KeyValueStorage>,
        clock: Rc<dyn WallClock>,
    ) -> Result<Self, AuthError> {
        let api = Self { storage, clock };
        api.seed()?;
        Ok(api)
    }

    fn seed(&self) -> Result<(), AuthError> {
        let mut users = self.users()?;
        if !users.iter().any(|user| user.email == DEMO_EMAIL) {
            users.push(StoredUser {
                email: DEMO_EMAIL.to_owned(),
                password: DEMO_PASSWORD.to_owned(),
            });
            store_json(self.storage.as_ref(), USERS_KEY, &users)?;
            log::debug!("seeded demo user {DEMO_EMAIL}");
        }
        Ok(())
    }

    fn users(&self) -> Result<Vec<StoredUser>, AuthError> {
        Ok(load_json(self.storage.as_ref(), USERS_KEY)?.unwrap_or_default())
    }

    fn tokens(&self) -> Result<BTreeMap<String, StoredToken>, AuthError> {
        Ok(load_json(self.storage.as_ref(), RESET_TOKENS_KEY)?.unwrap_or_default())
    }

    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = email.trim();
        self.users()?
            .into_iter()
            .find(|user| user.email == email && user.password == password)
            .map(|user| User { email: user.email })
            .ok_or(AuthError::InvalidCredentials)
    }

    /// Issues a reset token for `email`, valid for [`RESET_TOKEN_TTL_MS`].
    pub fn request_password_reset(&self, email: &str) -> Result<ResetToken, AuthError> {
        let email = email.trim();
        if !self.users()?.iter().any(|user| user.email == email) {
            return Err(AuthError::EmailNotFound);
        }

        let token = hex::encode(rand::random::<[u8; RESET_TOKEN_BYTES]>());
        let mut tokens = self.tokens()?;
        tokens.insert(
            token.clone(),
            StoredToken {
                email: email.to_owned(),
                exp: self.clock.now_millis().saturating_add(RESET_TOKEN_TTL_MS),
            },
        );
        store_json(self.storage.as_ref(), RESET_TOKENS_KEY, &tokens)?;
        log::info!("issued password reset token for {email}");
        Ok(ResetToken(token))
    }

    /// Replaces the password of the token's user and consumes the token.
    pub fn reset_password(&self, token: &ResetToken, new_password: &str) -> Result<(), AuthError> {
        let mut tokens = self.tokens()?;
        let item = tokens
            .get(token.as_str())
            .cloned()
            .ok_or(AuthError::InvalidToken)?;
        if self.clock.now_millis() > item.exp {
            return Err(AuthError::TokenExpired);
        }

        let mut users = self.users()?;
        let user = users
            .iter_mut()
            .find(|user| user.email == item.email)
            .ok_or(AuthError::UserNotFound)?;
        user.password = new_password.to_owned();
        store_json(self.storage.as_ref(), USERS_KEY, &users)?;

        tokens.remove(token.as_str());
        store_json(self.storage.as_ref(), RESET_TOKENS_KEY, &tokens)?;
        log::info!("password reset for {}", item.email);
        Ok(())
    }
}

impl fmt::Debug for FakeAuthApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeAuthApi").finish_non_exhaustive()
    }
}
