use chrono::Utc;
use voicepick_core::{DomainError, UserId};

use crate::error::AuthError;
use crate::password::{DEFAULT_COST, PasswordHash};
use crate::session::Session;
use crate::store::{Credential, CredentialStore};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered,
    AlreadyExists,
}

impl RegisterOutcome {
    pub fn message(self) -> &'static str {
        match self {
            RegisterOutcome::Registered => "User registered successfully.",
            RegisterOutcome::AlreadyExists => "User already exists. Try logging in.",
        }
    }
}

pub const LOGIN_SUCCEEDED: &str = "Login successful!";
pub const LOGIN_FAILED: &str = "Invalid credentials.";

/// Register / authenticate accounts against a credential store.
///
/// Usernames are trimmed and otherwise compared exactly. Passwords are
/// never logged.
#[derive(Debug, Clone)]
pub struct Authenticator<S> {
    store: S,
    cost: u32,
}

impl<S: CredentialStore> Authenticator<S> {
    pub fn new(store: S) -> Self {
        Self::with_cost(store, DEFAULT_COST)
    }

    /// Use a non-default bcrypt work factor for new registrations.
    pub fn with_cost(store: S, cost: u32) -> Self {
        Self { store, cost }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn register(&self, username: &str, password: &str) -> Result<RegisterOutcome, AuthError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(DomainError::validation("username cannot be empty").into());
        }
        if password.is_empty() {
            return Err(DomainError::validation("password cannot be empty").into());
        }

        // Cheap pre-check; `insert_new` is still the authority on races.
        if self.store.get(username)?.is_some() {
            tracing::info!(username, "registration rejected: user exists");
            return Ok(RegisterOutcome::AlreadyExists);
        }

        let credential = Credential {
            user_id: UserId::new(),
            password_hash: PasswordHash::generate(password, self.cost)?,
            registered_at: Utc::now(),
        };
        let user_id = credential.user_id;

        if !self.store.insert_new(username, credential)? {
            return Ok(RegisterOutcome::AlreadyExists);
        }

        tracing::info!(username, %user_id, "user registered");
        Ok(RegisterOutcome::Registered)
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        Ok(self.verified(username, password)?.is_some())
    }

    /// Authenticate and open a session.
    pub fn login(&self, username: &str, password: &str) -> Result<Option<Session>, AuthError> {
        let Some(credential) = self.verified(username, password)? else {
            tracing::info!(username = username.trim(), "login failed");
            return Ok(None);
        };

        let session = Session {
            user_id: credential.user_id,
            username: username.trim().to_string(),
            started_at: Utc::now(),
        };
        tracing::info!(username = %session.username, user_id = %session.user_id, "login succeeded");
        Ok(Some(session))
    }

    fn verified(&self, username: &str, password: &str) -> Result<Option<Credential>, AuthError> {
        let username = username.trim();
        if username.is_empty() {
            return Ok(None);
        }
        Ok(self
            .store
            .get(username)?
            .filter(|c| c.password_hash.verify(password)))
    }
}
