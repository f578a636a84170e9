//! Tests for the auth form dispatcher
//!
//! Drives the controller against mocked services and checks which calls,
//! notifications and loading transitions each path produces.

use std::cell::RefCell;
use std::pin::pin;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::executor::block_on;
use futures::poll;
use mockall::predicate::eq;
use reqwest::StatusCode;
use shared::models::{CREDENTIALS_SIGNIN_ERROR, RegisterRequest, SessionStatus, SignInResponse};
use tokio_util::sync::CancellationToken;

use super::collaborators::{
    Authenticator, MockAuthenticator, MockNotifier, MockRegistrar, MockSessionRefresher,
    SignInMethod,
};
use super::{AuthController, AuthMode, AuthServices, FormValues, Notice, Outcome};
use crate::error::ClientError;

type LoadingLog = Arc<Mutex<Vec<bool>>>;

fn ada() -> FormValues {
    FormValues {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "correct horse".to_string(),
    }
}

fn accepted() -> SignInResponse {
    SignInResponse {
        ok: true,
        status: 200,
        error: None,
        url: Some("/users".to_string()),
    }
}

fn is_loading(log: &LoadingLog) -> bool {
    log.lock().unwrap().last().copied().unwrap_or(false)
}

struct Harness {
    registrar: MockRegistrar,
    authenticator: MockAuthenticator,
    session: MockSessionRefresher,
    notifier: MockNotifier,
    loading: LoadingLog,
}

impl Harness {
    fn new() -> Self {
        Self {
            registrar: MockRegistrar::new(),
            authenticator: MockAuthenticator::new(),
            session: MockSessionRefresher::new(),
            notifier: MockNotifier::new(),
            loading: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn expect_refresh(&mut self) {
        self.session
            .expect_refresh()
            .times(1)
            .returning(|| Ok(SessionStatus::Authenticated));
    }

    fn expect_success(&mut self, notice: Notice) {
        self.notifier
            .expect_success()
            .with(eq(notice))
            .times(1)
            .return_const(());
    }

    fn expect_error(&mut self, notice: Notice) {
        self.notifier
            .expect_error()
            .with(eq(notice))
            .times(1)
            .return_const(());
    }

    fn build(self) -> (AuthController, LoadingLog) {
        let log = Arc::clone(&self.loading);
        let sink = Arc::clone(&self.loading);
        let controller = AuthController::new(
            AuthServices {
                registrar: Rc::new(self.registrar),
                authenticator: Rc::new(self.authenticator),
                session: Rc::new(self.session),
                notifier: Rc::new(self.notifier),
            },
            Rc::new(move |loading| sink.lock().unwrap().push(loading)),
        );
        (controller, log)
    }
}

#[test]
fn test_login_accepted_notifies_once_and_refreshes_session() {
    let mut harness = Harness::new();
    let loading = Arc::clone(&harness.loading);
    harness
        .authenticator
        .expect_sign_in()
        .withf(|method| {
            matches!(method, SignInMethod::Credentials(credentials)
                if credentials.email == "ada@example.com"
                    && credentials.password == "correct horse"
                    && !credentials.redirect)
        })
        .times(1)
        .returning(move |_| {
            assert!(is_loading(&loading), "loading must be set while signing in");
            Ok(accepted())
        });
    harness.expect_success(Notice::LoggedIn);
    harness.notifier.expect_error().never();
    let settled = Arc::clone(&harness.loading);
    harness.session.expect_refresh().times(1).returning(move || {
        assert!(!is_loading(&settled), "loading must be cleared before the session refresh");
        Ok(SessionStatus::Authenticated)
    });

    let (controller, log) = harness.build();
    let outcome = block_on(controller.submit(&ada(), AuthMode::Login));

    assert_eq!(outcome, Outcome::Accepted);
    assert_eq!(*log.lock().unwrap(), vec![true, false]);
    assert!(!controller.is_busy());
}

#[test]
fn test_login_rejected_notifies_invalid_credentials() {
    let mut harness = Harness::new();
    harness
        .authenticator
        .expect_sign_in()
        .times(1)
        .returning(|_| Ok(SignInResponse::rejected(401, CREDENTIALS_SIGNIN_ERROR)));
    harness.expect_error(Notice::InvalidCredentials);
    harness.notifier.expect_success().never();
    harness.session.expect_refresh().never();

    let (controller, log) = harness.build();
    let outcome = block_on(controller.submit(&ada(), AuthMode::Login));

    assert_eq!(outcome, Outcome::Refused);
    assert_eq!(*log.lock().unwrap(), vec![true, false]);
}

#[test]
fn test_login_transport_failure_still_settles() {
    let mut harness = Harness::new();
    harness
        .authenticator
        .expect_sign_in()
        .times(1)
        .returning(|_| Err(ClientError::Status(StatusCode::BAD_GATEWAY)));
    harness.expect_error(Notice::InvalidCredentials);

    let (controller, log) = harness.build();
    let outcome = block_on(controller.submit(&ada(), AuthMode::Login));

    assert_eq!(outcome, Outcome::Refused);
    assert_eq!(*log.lock().unwrap(), vec![true, false]);
}

#[test]
fn test_login_refusal_without_error_code_is_silent() {
    let mut harness = Harness::new();
    harness.authenticator.expect_sign_in().times(1).returning(|_| {
        Ok(SignInResponse {
            ok: false,
            status: 500,
            error: None,
            url: None,
        })
    });
    harness.notifier.expect_success().never();
    harness.notifier.expect_error().never();

    let (controller, log) = harness.build();
    assert_eq!(
        block_on(controller.submit(&ada(), AuthMode::Login)),
        Outcome::Refused
    );
    assert_eq!(*log.lock().unwrap(), vec![true, false]);
}

#[test]
fn test_register_failure_skips_sign_in() {
    let mut harness = Harness::new();
    let loading = Arc::clone(&harness.loading);
    harness.registrar.expect_register().times(1).returning(move |_| {
        assert!(is_loading(&loading), "loading must be set while registering");
        Err(ClientError::Status(StatusCode::CONFLICT))
    });
    harness.authenticator.expect_sign_in().never();
    harness.expect_error(Notice::SomethingWentWrong);
    harness.notifier.expect_success().never();

    let (controller, log) = harness.build();
    let outcome = block_on(controller.submit(&ada(), AuthMode::Register));

    assert_eq!(outcome, Outcome::Refused);
    assert_eq!(*log.lock().unwrap(), vec![true, false]);
}

#[test]
fn test_register_success_signs_in_with_submitted_values() {
    let mut harness = Harness::new();
    harness
        .registrar
        .expect_register()
        .with(eq(RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "correct horse".to_string(),
        }))
        .times(1)
        .returning(|_| Ok(()));
    harness
        .authenticator
        .expect_sign_in()
        .withf(|method| {
            matches!(method, SignInMethod::Credentials(credentials)
                if credentials.email == "ada@example.com"
                    && credentials.password == "correct horse")
        })
        .times(1)
        .returning(|_| Ok(accepted()));
    harness.expect_refresh();
    harness.notifier.expect_error().never();
    harness.notifier.expect_success().never();

    let (controller, log) = harness.build();
    let outcome = block_on(controller.submit(&ada(), AuthMode::Register));

    assert_eq!(outcome, Outcome::Accepted);
    assert_eq!(*log.lock().unwrap(), vec![true, false]);
}

#[test]
fn test_register_then_refused_sign_in_is_silent() {
    let mut harness = Harness::new();
    harness.registrar.expect_register().times(1).returning(|_| Ok(()));
    harness
        .authenticator
        .expect_sign_in()
        .times(1)
        .returning(|_| Ok(SignInResponse::rejected(401, CREDENTIALS_SIGNIN_ERROR)));
    harness.notifier.expect_success().never();
    harness.notifier.expect_error().never();
    harness.session.expect_refresh().never();

    let (controller, log) = harness.build();
    assert_eq!(
        block_on(controller.submit(&ada(), AuthMode::Register)),
        Outcome::Refused
    );
    assert_eq!(*log.lock().unwrap(), vec![true, false]);
}

#[test]
fn test_register_then_sign_in_transport_failure_notifies() {
    let mut harness = Harness::new();
    harness.registrar.expect_register().times(1).returning(|_| Ok(()));
    harness
        .authenticator
        .expect_sign_in()
        .times(1)
        .returning(|_| Err(ClientError::Status(StatusCode::SERVICE_UNAVAILABLE)));
    harness.expect_error(Notice::SomethingWentWrong);

    let (controller, log) = harness.build();
    assert_eq!(
        block_on(controller.submit(&ada(), AuthMode::Register)),
        Outcome::Refused
    );
    assert_eq!(*log.lock().unwrap(), vec![true, false]);
}

#[test]
fn test_social_action_uses_provider_id() {
    let mut harness = Harness::new();
    let loading = Arc::clone(&harness.loading);
    harness
        .authenticator
        .expect_sign_in()
        .with(eq(SignInMethod::Provider("github".to_string())))
        .times(1)
        .returning(move |_| {
            assert!(is_loading(&loading));
            Ok(accepted())
        });
    harness.expect_success(Notice::LoggedIn);
    harness.expect_refresh();

    let (controller, log) = harness.build();
    assert_eq!(block_on(controller.social_action("github")), Outcome::Accepted);
    assert_eq!(*log.lock().unwrap(), vec![true, false]);
}

#[test]
fn test_social_action_error_notifies_generic_failure() {
    let mut harness = Harness::new();
    harness
        .authenticator
        .expect_sign_in()
        .times(1)
        .returning(|_| Ok(SignInResponse::rejected(400, "OAuthSignin")));
    harness.expect_error(Notice::SomethingWentWrong);
    harness.notifier.expect_success().never();

    let (controller, log) = harness.build();
    assert_eq!(block_on(controller.social_action("google")), Outcome::Refused);
    assert_eq!(*log.lock().unwrap(), vec![true, false]);
}

#[test]
fn test_social_action_transport_failure_notifies_generic_failure() {
    let mut harness = Harness::new();
    harness
        .authenticator
        .expect_sign_in()
        .with(eq(SignInMethod::Provider("github".to_string())))
        .times(1)
        .returning(|_| Err(ClientError::Status(StatusCode::BAD_GATEWAY)));
    harness.expect_error(Notice::SomethingWentWrong);
    harness.notifier.expect_success().never();
    harness.session.expect_refresh().never();

    let (controller, log) = harness.build();
    assert_eq!(block_on(controller.social_action("github")), Outcome::Refused);
    assert_eq!(*log.lock().unwrap(), vec![true, false]);
    assert!(!controller.is_busy());
}

#[test]
fn test_teardown_mid_call_suppresses_results() {
    let mut harness = Harness::new();
    let lifetime_slot: Arc<Mutex<Option<CancellationToken>>> = Arc::new(Mutex::new(None));
    let lifetime = Arc::clone(&lifetime_slot);
    harness.authenticator.expect_sign_in().times(1).returning(move |_| {
        if let Some(token) = lifetime.lock().unwrap().as_ref() {
            token.cancel();
        }
        Ok(accepted())
    });
    harness.notifier.expect_success().never();
    harness.notifier.expect_error().never();
    harness.session.expect_refresh().never();

    let (controller, log) = harness.build();
    *lifetime_slot.lock().unwrap() = Some(controller.lifetime());

    assert_eq!(
        block_on(controller.submit(&ada(), AuthMode::Login)),
        Outcome::Cancelled
    );
    assert_eq!(*log.lock().unwrap(), vec![true]);
    assert!(!controller.is_busy());
}

/// Authenticator that holds the first sign-in open until released.
struct GatedAuthenticator {
    gate: RefCell<Option<oneshot::Receiver<SignInResponse>>>,
}

#[async_trait(?Send)]
impl Authenticator for GatedAuthenticator {
    async fn sign_in(&self, _method: &SignInMethod) -> Result<SignInResponse, ClientError> {
        let gate = self.gate.borrow_mut().take().expect("only one sign-in may be sent");
        Ok(gate.await.expect("gate released"))
    }
}

#[test]
fn test_second_submission_while_in_flight_is_rejected() {
    let (release, gate) = oneshot::channel();
    let mut notifier = MockNotifier::new();
    notifier
        .expect_success()
        .with(eq(Notice::LoggedIn))
        .times(1)
        .return_const(());
    let mut session = MockSessionRefresher::new();
    session
        .expect_refresh()
        .times(1)
        .returning(|| Ok(SessionStatus::Authenticated));
    let loading = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&loading);

    let controller = AuthController::new(
        AuthServices {
            registrar: Rc::new(MockRegistrar::new()),
            authenticator: Rc::new(GatedAuthenticator {
                gate: RefCell::new(Some(gate)),
            }),
            session: Rc::new(session),
            notifier: Rc::new(notifier),
        },
        Rc::new(move |value| sink.borrow_mut().push(value)),
    );
    let values = ada();

    block_on(async {
        let mut first = pin!(controller.submit(&values, AuthMode::Login));
        assert!(poll!(first.as_mut()).is_pending());
        assert!(controller.is_busy());

        assert_eq!(
            controller.submit(&values, AuthMode::Register).await,
            Outcome::Busy
        );
        assert!(controller.is_busy(), "a rejected submission must not release the guard");
        assert_eq!(controller.social_action("github").await, Outcome::Busy);
        assert!(controller.is_busy());
        assert_eq!(controller.submit(&values, AuthMode::Login).await, Outcome::Busy);

        release.send(accepted()).expect("first submission still waiting");
        assert_eq!(first.await, Outcome::Accepted);
    });

    assert_eq!(*loading.borrow(), vec![true, false]);
    assert!(!controller.is_busy());
}
