use serde::{Deserialize, Serialize};

/// Authentication status of the current browser session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// The session has not been resolved yet.
    #[default]
    Loading,
    Unauthenticated,
    Authenticated,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// Profile attached to an authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SessionUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Response of `GET /api/auth/session`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SessionResponse {
    pub status: SessionStatus,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

impl SessionResponse {
    /// Session with nobody signed in.
    #[must_use]
    pub const fn unauthenticated() -> Self {
        Self {
            status: SessionStatus::Unauthenticated,
            user: None,
        }
    }
}
