//! Seams between the auth form and the services it drives.
//!
//! The browser implementations live next to the things they wrap
//! (`api`, `models::toast`, `models::session`); tests substitute mocks.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use shared::models::{CredentialsSignIn, RegisterRequest, SessionStatus, SignInResponse};

use crate::error::ClientError;
use crate::routes::MainRoute;

use super::Notice;

/// How a sign-in is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInMethod {
    Credentials(CredentialsSignIn),
    /// External provider identifier such as `github`.
    Provider(String),
}

/// Creates accounts.
#[cfg_attr(test, automock)]
#[async_trait(?Send)]
pub trait Registrar {
    async fn register(&self, request: &RegisterRequest) -> Result<(), ClientError>;
}

/// Verifies credentials or hands off to an identity provider.
#[cfg_attr(test, automock)]
#[async_trait(?Send)]
pub trait Authenticator {
    async fn sign_in(&self, method: &SignInMethod) -> Result<SignInResponse, ClientError>;
}

/// Re-reads the session after a sign-in so observers see the new status.
#[cfg_attr(test, automock)]
#[async_trait(?Send)]
pub trait SessionRefresher {
    async fn refresh(&self) -> Result<SessionStatus, ClientError>;
}

/// Shows transient messages to the user.
#[cfg_attr(test, automock)]
pub trait Notifier {
    fn success(&self, notice: Notice);
    fn error(&self, notice: Notice);
}

/// Moves the browser to another route.
#[cfg_attr(test, automock)]
pub trait Navigation {
    fn push(&self, route: &MainRoute);
}

impl Navigation for yew_router::navigator::Navigator {
    fn push(&self, route: &MainRoute) {
        yew_router::navigator::Navigator::push(self, route);
    }
}
