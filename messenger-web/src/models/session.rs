use async_trait::async_trait;
use shared::models::{SessionResponse, SessionStatus, SessionUser};
use tracing::warn;
use yewdux::{Dispatch, Store};

use crate::api::MessengerClient;
use crate::auth::collaborators::SessionRefresher;
use crate::error::ClientError;

/// Process-wide view of the browser session.
#[derive(Debug, Default, Clone, PartialEq, Eq, Store)]
pub struct SessionState {
    pub status: SessionStatus,
    pub user: Option<SessionUser>,
}

impl From<SessionResponse> for SessionState {
    fn from(response: SessionResponse) -> Self {
        Self {
            status: response.status,
            user: response.user,
        }
    }
}

/// Loads the session from the API into the [`SessionState`] store.
#[derive(Clone)]
pub struct SessionSync {
    client: MessengerClient,
    dispatch: Dispatch<SessionState>,
}

impl SessionSync {
    pub fn new(client: MessengerClient, dispatch: Dispatch<SessionState>) -> Self {
        Self { client, dispatch }
    }

    /// Fetch the session and publish it. On failure the store falls back to
    /// unauthenticated so the auth form stays usable.
    pub async fn load(&self) -> Result<SessionStatus, ClientError> {
        match self.client.session().await {
            Ok(response) => {
                let state = SessionState::from(response);
                let status = state.status;
                self.dispatch.set(state);
                Ok(status)
            }
            Err(err) => {
                warn!(error = %err, "could not load session");
                self.dispatch
                    .set(SessionState::from(SessionResponse::unauthenticated()));
                Err(err)
            }
        }
    }
}

#[async_trait(?Send)]
impl SessionRefresher for SessionSync {
    async fn refresh(&self) -> Result<SessionStatus, ClientError> {
        self.load().await
    }
}
