use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Error code reported when a credentials sign-in is refused without a body.
pub const CREDENTIALS_SIGNIN_ERROR: &str = "CredentialsSignin";

/// Error code reported when a provider sign-in is refused without a body.
pub const OAUTH_SIGNIN_ERROR: &str = "OAuthSignin";

/// Body of `POST /api/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Display name for the new account.
    pub name: String,

    /// The account email address.
    pub email: String,

    /// The chosen password.
    pub password: String,
}

/// Email/password sign-in submitted to the credentials provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CredentialsSignIn {
    pub email: String,
    pub password: String,

    /// Whether the server should answer with a redirect instead of a JSON result.
    #[serde(default)]
    pub redirect: bool,
}

impl CredentialsSignIn {
    /// Credentials sign-in that reports its result instead of redirecting.
    #[must_use]
    pub fn without_redirect(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            redirect: false,
        }
    }
}

impl From<&RegisterRequest> for CredentialsSignIn {
    /// Follow-up sign-in after registration keeps the default redirect behaviour.
    fn from(request: &RegisterRequest) -> Self {
        Self {
            email: request.email.clone(),
            password: request.password.clone(),
            redirect: true,
        }
    }
}

/// Options sent with a provider sign-in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SignInOptions {
    #[serde(default)]
    pub redirect: bool,
}

/// Outcome reported by the sign-in endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignInResponse {
    /// True when the request itself completed.
    pub ok: bool,

    /// HTTP status the server answered with.
    pub status: u16,

    /// Error code when the sign-in was refused.
    #[serde(default)]
    pub error: Option<String>,

    /// Where the server would have redirected the browser.
    #[serde(default)]
    pub url: Option<String>,
}

impl SignInResponse {
    /// A refused sign-in carrying `error`.
    #[must_use]
    pub fn rejected(status: u16, error: impl Into<String>) -> Self {
        Self {
            ok: false,
            status,
            error: Some(error.into()),
            url: None,
        }
    }

    /// True when the sign-in went through with no error reported.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.ok && self.error.is_none()
    }
}

/// External identity providers offered as sign-in shortcuts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SocialProvider {
    Github,
    Google,
}

impl SocialProvider {
    /// Identifier the sign-in endpoint expects in its path.
    #[must_use]
    pub fn id(self) -> &'static str {
        self.into()
    }
}
