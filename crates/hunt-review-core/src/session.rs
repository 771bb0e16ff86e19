//! Session store
//!
//! Two opaque tokens kept in a pluggable key/value backend. The browser
//! uses `localStorage`, the CLI a JSON file, and tests [`MemoryStorage`].
//! Only presence is checked; nothing here knows about expiry.

use crate::models::AuthUser;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

#[derive(Error, Debug)]
#[error("Session storage unavailable: {0}")]
pub struct StorageError(pub String);

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistent string storage the session lives in
pub trait SessionStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// In-process storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Store the tokens of a freshly signed-in user.
    ///
    /// Both tokens are written or neither: if the refresh token cannot be
    /// stored, the previous access token is put back.
    pub fn persist(&self, user: &AuthUser) -> StorageResult<()> {
        let previous_access = self.storage.get(ACCESS_TOKEN_KEY)?;
        self.storage.set(ACCESS_TOKEN_KEY, &user.access_token)?;

        if let Err(e) = self.storage.set(REFRESH_TOKEN_KEY, &user.refresh_token) {
            let restored = match previous_access {
                Some(token) => self.storage.set(ACCESS_TOKEN_KEY, &token),
                None => self.storage.remove(ACCESS_TOKEN_KEY),
            };
            if let Err(restore) = restored {
                tracing::error!("Could not restore access token: {}", restore);
            }
            return Err(e);
        }

        tracing::debug!(user = %user.email, "session tokens stored");
        Ok(())
    }

    /// Drop both tokens regardless of their state
    pub fn logout(&self) -> StorageResult<()> {
        self.storage.remove(ACCESS_TOKEN_KEY)?;
        self.storage.remove(REFRESH_TOKEN_KEY)?;
        tracing::debug!("session tokens cleared");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    pub fn access_token(&self) -> Option<String> {
        self.read(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read(REFRESH_TOKEN_KEY)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                tracing::warn!("Could not read {}: {}", key, e);
                None
            }
        }
    }
}
