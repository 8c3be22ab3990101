//! Credential persistence, keyed by username.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use voicepick_core::UserId;

use crate::error::AuthError;
use crate::password::PasswordHash;

/// Stored account data for one username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub user_id: UserId,
    pub password_hash: PasswordHash,
    pub registered_at: DateTime<Utc>,
}

/// Username -> credential key/value store.
pub trait CredentialStore: Send + Sync {
    fn get(&self, username: &str) -> Result<Option<Credential>, AuthError>;

    /// Insert only if `username` is not present. Returns `false` if it was.
    fn insert_new(&self, username: &str, credential: Credential) -> Result<bool, AuthError>;
}

impl<S> CredentialStore for Arc<S>
where
    S: CredentialStore + ?Sized,
{
    fn get(&self, username: &str) -> Result<Option<Credential>, AuthError> {
        (**self).get(username)
    }

    fn insert_new(&self, username: &str, credential: Credential) -> Result<bool, AuthError> {
        (**self).insert_new(username, credential)
    }
}

/// In-memory store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    inner: RwLock<HashMap<String, Credential>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn get(&self, username: &str) -> Result<Option<Credential>, AuthError> {
        let map = self.inner.read().map_err(|_| AuthError::Poisoned)?;
        Ok(map.get(username).cloned())
    }

    fn insert_new(&self, username: &str, credential: Credential) -> Result<bool, AuthError> {
        let mut map = self.inner.write().map_err(|_| AuthError::Poisoned)?;
        if map.contains_key(username) {
            return Ok(false);
        }
        map.insert(username.to_string(), credential);
        Ok(true)
    }
}

/// Store persisted as a JSON object (`username -> credential`) in one file.
///
/// The file is read once at open and rewritten on every insert (temp file +
/// rename). A missing file is an empty store; it is created on first insert.
#[derive(Debug)]
pub struct JsonFileCredentialStore {
    path: PathBuf,
    inner: RwLock<HashMap<String, Credential>>,
}

impl JsonFileCredentialStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AuthError> {
        let path = path.into();
        let map: HashMap<String, Credential> = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| AuthError::Corrupt {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(source) => return Err(AuthError::Io { path, source }),
        };

        tracing::debug!(path = %path.display(), accounts = map.len(), "credential store opened");
        Ok(Self {
            path,
            inner: RwLock::new(map),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, map: &HashMap<String, Credential>) -> Result<(), AuthError> {
        let io_err = |source: std::io::Error| AuthError::Io {
            path: self.path.clone(),
            source,
        };

        let json = serde_json::to_string_pretty(map).map_err(|source| AuthError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl CredentialStore for JsonFileCredentialStore {
    fn get(&self, username: &str) -> Result<Option<Credential>, AuthError> {
        let map = self.inner.read().map_err(|_| AuthError::Poisoned)?;
        Ok(map.get(username).cloned())
    }

    fn insert_new(&self, username: &str, credential: Credential) -> Result<bool, AuthError> {
        let mut map = self.inner.write().map_err(|_| AuthError::Poisoned)?;
        if map.contains_key(username) {
            return Ok(false);
        }

        map.insert(username.to_string(), credential);
        if let Err(err) = self.persist(&map) {
            map.remove(username);
            return Err(err);
        }
        Ok(true)
    }
}
