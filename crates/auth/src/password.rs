use core::str::FromStr;

use serde::{Deserialize, Serialize};
use voicepick_core::ValueObject;

use crate::error::AuthError;

/// Work factor used outside tests.
pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

/// Salted, adaptive bcrypt hash in its modular-crypt encoding
/// (`$2b$<cost>$<salt+digest>`).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash `password` with a fresh random salt at the given work factor.
    pub fn generate(password: &str, cost: u32) -> Result<Self, AuthError> {
        Ok(Self(bcrypt::hash(password, cost)?))
    }

    pub fn verify(&self, password: &str) -> bool {
        match bcrypt::verify(password, &self.0) {
            Ok(matched) => matched,
            Err(err) => {
                tracing::warn!(error = %err, "password hash could not be verified");
                false
            }
        }
    }

    /// Work factor the hash was created with.
    pub fn cost(&self) -> u32 {
        self.0
            .parse::<bcrypt::HashParts>()
            .map(|parts| parts.get_cost())
            .unwrap_or_default()
    }
}

impl ValueObject for PasswordHash {}

// Never print the hash.
impl core::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

impl core::fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PasswordHash {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<bcrypt::HashParts>()
            .map_err(|_| AuthError::MalformedHash)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for PasswordHash {
    type Error = AuthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PasswordHash> for String {
    fn from(value: PasswordHash) -> Self {
        value.0
    }
}
