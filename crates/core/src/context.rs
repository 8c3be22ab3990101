//! Request-scoped caller context.

use crate::error::{DomainError, DomainResult};

/// Who is asking, passed explicitly with every utterance.
///
/// Immutable for the lifetime of a request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestContext {
    authenticated: bool,
    username: Option<String>,
}

impl RequestContext {
    /// A caller that has not logged in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(username: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            username: Some(username.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Username of the logged-in caller, or `Unauthorized`.
    pub fn require_authenticated(&self) -> DomainResult<&str> {
        match (self.authenticated, self.username.as_deref()) {
            (true, Some(username)) => Ok(username),
            _ => Err(DomainError::Unauthorized),
        }
    }
}
