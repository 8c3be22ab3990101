//! `voicepick-auth` — password-based account store.
//!
//! This crate is decoupled from any UI and from the persistence mechanism:
//! storage sits behind [`CredentialStore`], and a successful login yields a
//! [`Session`] that callers turn into a request context.

pub mod authenticator;
pub mod error;
pub mod password;
pub mod session;
pub mod store;

pub use authenticator::{Authenticator, RegisterOutcome};
pub use error::AuthError;
pub use password::{DEFAULT_COST, PasswordHash};
pub use session::Session;
pub use store::{Credential, CredentialStore, InMemoryCredentialStore, JsonFileCredentialStore};
