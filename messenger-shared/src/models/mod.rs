pub mod auth;
pub mod errors;
pub mod session;

pub use auth::{
    CREDENTIALS_SIGNIN_ERROR, CredentialsSignIn, OAUTH_SIGNIN_ERROR, RegisterRequest,
    SignInOptions, SignInResponse, SocialProvider,
};
pub use errors::ErrorResponse;
pub use session::{SessionResponse, SessionStatus, SessionUser};
