//! Local accounts and sessions
//!
//! Demo-grade credential handling: the stored digest is
//! `sha256(password + username)`, the same scheme the web shell has always
//! used, with the username standing in for a salt. There is no real secret
//! here and no expiry on sessions; this is local profile separation, not
//! production authentication.

use std::collections::HashMap;
use std::sync::Arc;

use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::errors::{AppError, AppResult, AuthError, StoreError};
use crate::store::KeyValueStore;

const USERS_KEY: &str = "users_v1";
const SESSIONS_KEY: &str = "sessions_v1";

/// Account registry and session table over the key-value store.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn KeyValueStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Create an account and open a session for it.
    pub fn register(&self, username: &str, password: &str) -> AppResult<String> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::validation("username and password are required"));
        }

        let mut users = self.load_map(USERS_KEY)?;
        if users.contains_key(username) {
            return Err(AuthError::UsernameTaken {
                username: username.to_string(),
            }
            .into());
        }

        users.insert(username.to_string(), Self::digest(username, password));
        self.save_map(USERS_KEY, &users)?;
        self.open_session(username)
    }

    /// Verify credentials and open a session.
    pub fn login(&self, username: &str, password: &str) -> AppResult<String> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::validation("username and password are required"));
        }

        let users = self.load_map(USERS_KEY)?;
        match users.get(username) {
            Some(stored) if *stored == Self::digest(username, password) => {
                self.open_session(username)
            }
            _ => Err(AuthError::InvalidCredentials.into()),
        }
    }

    /// Drop the session behind a token. Unknown tokens are a no-op.
    pub fn logout(&self, token: &str) -> AppResult<()> {
        let mut sessions = self.load_map(SESSIONS_KEY)?;
        if sessions.remove(token).is_some() {
            self.save_map(SESSIONS_KEY, &sessions)?;
        }
        Ok(())
    }

    /// Resolve a session token to its username.
    pub fn current_user(&self, token: &str) -> AppResult<String> {
        let sessions = self.load_map(SESSIONS_KEY)?;
        sessions
            .get(token)
            .cloned()
            .ok_or_else(|| AuthError::UnknownSession.into())
    }

    fn open_session(&self, username: &str) -> AppResult<String> {
        let token = Uuid::new_v4().to_string();
        let mut sessions = self.load_map(SESSIONS_KEY)?;
        sessions.insert(token.clone(), username.to_string());
        self.save_map(SESSIONS_KEY, &sessions)?;
        Ok(token)
    }

    fn digest(username: &str, password: &str) -> String {
        format!("{:x}", Sha256::digest(format!("{}{}", password, username)))
    }

    fn load_map(&self, key: &str) -> Result<HashMap<String, String>, StoreError> {
        match self.store.get(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(HashMap::new()),
        }
    }

    fn save_map(&self, key: &str, map: &HashMap<String, String>) -> Result<(), StoreError> {
        self.store.set(key, &serde_json::to_string(map)?)
    }
}
