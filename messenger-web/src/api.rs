use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use shared::models::{
    CREDENTIALS_SIGNIN_ERROR, ErrorResponse, OAUTH_SIGNIN_ERROR, RegisterRequest, SessionResponse,
    SignInOptions, SignInResponse,
};
use tracing::debug;

use crate::auth::collaborators::{Authenticator, Registrar, SignInMethod};
use crate::config::FrontendConfig;
use crate::error::ClientError;

thread_local! {
    static SHARED_CLIENT: OnceCell<MessengerClient> = OnceCell::new();
}

/// Lightweight API client for the Messenger auth endpoints.
#[derive(Clone, Debug)]
pub struct MessengerClient {
    base_url: String,
    client: Client,
}

impl MessengerClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Client for the configured API, shared by every component.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(&FrontendConfig::default().api_base_url))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn sign_in_url(&self, method: &SignInMethod) -> String {
        match method {
            SignInMethod::Credentials(_) => self.api_url("auth/callback/credentials"),
            SignInMethod::Provider(provider) => self.api_url(&format!("auth/signin/{provider}")),
        }
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: String,
        payload: &T,
    ) -> Result<Response, ClientError> {
        Ok(self.client.post(url).json(payload).send().await?)
    }

    /// Create an account. Any 2xx is success; the body is never read.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ClientError> {
        let response = self.post_json(self.api_url("register"), request).await?;
        let status = response.status();
        debug!(%status, "register answered");
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::Status(status))
        }
    }

    /// Sign in and report the result instead of following a redirect.
    pub async fn sign_in(&self, method: &SignInMethod) -> Result<SignInResponse, ClientError> {
        let url = self.sign_in_url(method);
        let response = match method {
            SignInMethod::Credentials(credentials) => self.post_json(url, credentials).await?,
            SignInMethod::Provider(_) => self.post_json(url, &SignInOptions::default()).await?,
        };
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, "sign-in answered");
        settle_sign_in(status, &body, refusal_code(method))
    }

    /// Load the current session. A 401 means nobody is signed in.
    pub async fn session(&self) -> Result<SessionResponse, ClientError> {
        let response = self.client.get(self.api_url("auth/session")).send().await?;
        let status = response.status();
        let body = response.text().await?;
        settle_session(status, &body)
    }
}

#[async_trait(?Send)]
impl Registrar for MessengerClient {
    async fn register(&self, request: &RegisterRequest) -> Result<(), ClientError> {
        MessengerClient::register(self, request).await
    }
}

#[async_trait(?Send)]
impl Authenticator for MessengerClient {
    async fn sign_in(&self, method: &SignInMethod) -> Result<SignInResponse, ClientError> {
        MessengerClient::sign_in(self, method).await
    }
}

/// Error code used when a refused sign-in carries no readable body.
pub(crate) fn refusal_code(method: &SignInMethod) -> &'static str {
    match method {
        SignInMethod::Credentials(_) => CREDENTIALS_SIGNIN_ERROR,
        SignInMethod::Provider(_) => OAUTH_SIGNIN_ERROR,
    }
}

/// Turn a sign-in HTTP answer into the callback result the form inspects.
pub(crate) fn settle_sign_in(
    status: StatusCode,
    body: &str,
    refusal_code: &str,
) -> Result<SignInResponse, ClientError> {
    if status.is_success() {
        return Ok(serde_json::from_str(body)?);
    }
    let error = ErrorResponse::parse(body)
        .map(|error| error.message)
        .unwrap_or_else(|| refusal_code.to_string());
    Ok(SignInResponse::rejected(status.as_u16(), error))
}

pub(crate) fn settle_session(status: StatusCode, body: &str) -> Result<SessionResponse, ClientError> {
    if status == StatusCode::UNAUTHORIZED {
        return Ok(SessionResponse::unauthenticated());
    }
    if !status.is_success() {
        return Err(ClientError::Status(status));
    }
    Ok(serde_json::from_str(body)?)
}
