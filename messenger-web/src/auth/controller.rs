//! Dispatches auth form actions to the sign-in services.
//!
//! One controller lives as long as one mounted auth form. It enforces a
//! single in-flight action and goes quiet once its lifetime token is
//! cancelled, so late results never reach a torn-down view.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use shared::models::{CredentialsSignIn, SignInResponse};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::collaborators::{Authenticator, Notifier, Registrar, SessionRefresher, SignInMethod};
use super::{AuthMode, FormValues, Notice};

/// Receives loading-flag changes.
pub type LoadingSink = Rc<dyn Fn(bool)>;

/// How a dispatched action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user is signed in (or the provider accepted the hand-off).
    Accepted,
    /// The attempt failed; the user has been told.
    Refused,
    /// Another action was still in flight; nothing was sent.
    Busy,
    /// The form went away before the action settled.
    Cancelled,
}

/// Services the controller drives.
pub struct AuthServices {
    pub registrar: Rc<dyn Registrar>,
    pub authenticator: Rc<dyn Authenticator>,
    pub session: Rc<dyn SessionRefresher>,
    pub notifier: Rc<dyn Notifier>,
}

/// Marks an action as in flight until dropped.
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct AuthController {
    services: AuthServices,
    loading: LoadingSink,
    in_flight: Cell<bool>,
    lifetime: CancellationToken,
}

impl fmt::Debug for AuthController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthController")
            .field("in_flight", &self.in_flight.get())
            .field("cancelled", &self.lifetime.is_cancelled())
            .finish_non_exhaustive()
    }
}

impl AuthController {
    pub fn new(services: AuthServices, loading: LoadingSink) -> Self {
        Self {
            services,
            loading,
            in_flight: Cell::new(false),
            lifetime: CancellationToken::new(),
        }
    }

    /// Token cancelled by [`AuthController::shutdown`].
    pub fn lifetime(&self) -> CancellationToken {
        self.lifetime.clone()
    }

    /// Stops all further notifications, loading updates and session refreshes.
    pub fn shutdown(&self) {
        self.lifetime.cancel();
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.get()
    }

    /// Submits the form: registers then signs in, or signs in directly.
    pub async fn submit(&self, values: &FormValues, mode: AuthMode) -> Outcome {
        let Some(_in_flight) = InFlight::acquire(&self.in_flight) else {
            debug!(?mode, "submission ignored, another action is in flight");
            return Outcome::Busy;
        };

        debug!(?mode, "submitting auth form");
        (self.loading)(true);
        let outcome = match mode {
            AuthMode::Register => self.register_and_sign_in(values).await,
            AuthMode::Login => self.sign_in_with_credentials(values).await,
        };
        self.finish(outcome).await
    }

    /// Signs in through an external identity provider.
    pub async fn social_action(&self, provider_id: &str) -> Outcome {
        let Some(_in_flight) = InFlight::acquire(&self.in_flight) else {
            debug!(provider = provider_id, "social sign-in ignored, another action is in flight");
            return Outcome::Busy;
        };

        debug!(provider = provider_id, "starting social sign-in");
        (self.loading)(true);
        let method = SignInMethod::Provider(provider_id.to_string());
        let outcome = match self.services.authenticator.sign_in(&method).await {
            Ok(response) if response.is_accepted() => {
                info!(provider = provider_id, "signed in with provider");
                self.notify_success(Notice::LoggedIn);
                Outcome::Accepted
            }
            Ok(response) => {
                self.report_refusal(&response, Notice::SomethingWentWrong);
                Outcome::Refused
            }
            Err(err) => {
                warn!(
                    provider = provider_id,
                    status = ?err.status(),
                    error = %err,
                    "social sign-in failed"
                );
                self.notify_error(Notice::SomethingWentWrong);
                Outcome::Refused
            }
        };
        self.finish(outcome).await
    }

    async fn register_and_sign_in(&self, values: &FormValues) -> Outcome {
        let request = values.register_request();
        if let Err(err) = self.services.registrar.register(&request).await {
            warn!(status = ?err.status(), error = %err, "registration failed");
            self.notify_error(Notice::SomethingWentWrong);
            return Outcome::Refused;
        }
        if !self.is_live() {
            return Outcome::Cancelled;
        }

        info!("account registered, signing in");
        let method = SignInMethod::Credentials(CredentialsSignIn::from(&request));
        match self.services.authenticator.sign_in(&method).await {
            Ok(response) if response.is_accepted() => Outcome::Accepted,
            Ok(response) => {
                debug!(error = ?response.error, "sign-in after registration refused");
                Outcome::Refused
            }
            Err(err) => {
                warn!(status = ?err.status(), error = %err, "sign-in after registration failed");
                self.notify_error(Notice::SomethingWentWrong);
                Outcome::Refused
            }
        }
    }

    async fn sign_in_with_credentials(&self, values: &FormValues) -> Outcome {
        let method = SignInMethod::Credentials(values.credentials());
        match self.services.authenticator.sign_in(&method).await {
            Ok(response) if response.is_accepted() => {
                info!("signed in with credentials");
                self.notify_success(Notice::LoggedIn);
                Outcome::Accepted
            }
            Ok(response) => {
                self.report_refusal(&response, Notice::InvalidCredentials);
                Outcome::Refused
            }
            Err(err) => {
                warn!(status = ?err.status(), error = %err, "credentials sign-in failed");
                self.notify_error(Notice::InvalidCredentials);
                Outcome::Refused
            }
        }
    }

    /// A response without an error code and without `ok` stays silent.
    fn report_refusal(&self, response: &SignInResponse, notice: Notice) {
        debug!(status = response.status, error = ?response.error, "sign-in refused");
        if response.error.is_some() {
            self.notify_error(notice);
        }
    }

    async fn refresh_session(&self) {
        if !self.is_live() {
            return;
        }
        match self.services.session.refresh().await {
            Ok(status) => debug!(?status, "session refreshed"),
            Err(err) => warn!(error = %err, "session refresh failed"),
        }
    }

    /// Clears the loading flag, then refreshes the session after an accepted
    /// sign-in. The in-flight guard is still held during the refresh.
    async fn finish(&self, outcome: Outcome) -> Outcome {
        let outcome = self.settle(outcome);
        if outcome == Outcome::Accepted {
            self.refresh_session().await;
        }
        outcome
    }

    fn settle(&self, outcome: Outcome) -> Outcome {
        if !self.is_live() {
            debug!(?outcome, "auth form gone before the action settled");
            return Outcome::Cancelled;
        }
        (self.loading)(false);
        outcome
    }

    fn is_live(&self) -> bool {
        !self.lifetime.is_cancelled()
    }

    fn notify_success(&self, notice: Notice) {
        if self.is_live() {
            self.services.notifier.success(notice);
        }
    }

    fn notify_error(&self, notice: Notice) {
        if self.is_live() {
            self.services.notifier.error(notice);
        }
    }
}
