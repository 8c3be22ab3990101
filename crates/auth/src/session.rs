use chrono::{DateTime, Utc};
use voicepick_core::{RequestContext, UserId};

/// An authenticated login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub username: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Request context for commands issued within this session.
    pub fn context(&self) -> RequestContext {
        RequestContext::authenticated(self.username.clone())
    }
}
