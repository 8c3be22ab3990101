use std::path::PathBuf;

use thiserror::Error;
use voicepick_core::DomainError;

/// Failures of the account store itself.
///
/// "Username taken" and "wrong password" are ordinary outcomes, not errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("malformed password hash")]
    MalformedHash,

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("credential store at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("credential store at {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("credential store lock poisoned")]
    Poisoned,
}
