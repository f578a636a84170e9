mod auth;
mod error;
mod users;

pub use auth::AuthPage;
pub use error::ErrorPage;
pub use users::UsersPage;
