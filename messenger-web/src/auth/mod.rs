//! Sign-in and registration flow, independent of the view layer.

pub mod collaborators;
mod controller;
mod form;
mod mode;
mod notice;
mod session_watcher;

#[cfg(test)]
mod controller_test;

pub use controller::{AuthController, AuthServices, LoadingSink, Outcome};
pub use form::{FieldErrors, FormField, FormValues, ValidationError};
pub use mode::AuthMode;
pub use notice::Notice;
pub use session_watcher::SessionWatcher;
