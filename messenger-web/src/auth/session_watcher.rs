use std::rc::Rc;

use shared::models::SessionStatus;
use tracing::info;

use super::collaborators::Navigation;
use crate::routes::MainRoute;

/// Sends the browser to the post-login route when the session becomes
/// authenticated.
pub struct SessionWatcher {
    navigation: Rc<dyn Navigation>,
    last: Option<SessionStatus>,
}

impl SessionWatcher {
    pub fn new(navigation: Rc<dyn Navigation>) -> Self {
        Self {
            navigation,
            last: None,
        }
    }

    /// Records `status`; navigates on a transition into
    /// [`SessionStatus::Authenticated`]. Returns whether it navigated.
    pub fn observe(&mut self, status: SessionStatus) -> bool {
        let previous = self.last.replace(status);
        let entered = status.is_authenticated()
            && !previous.is_some_and(SessionStatus::is_authenticated);
        if entered {
            info!("session authenticated, leaving the auth form");
            self.navigation.push(&MainRoute::Users);
        }
        entered
    }
}

impl std::fmt::Debug for SessionWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionWatcher")
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}
