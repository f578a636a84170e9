pub(crate) mod auth_form;
pub(crate) mod auth_social_button;
pub(crate) mod input;
pub(crate) mod loading;
pub(crate) mod toast_container;

pub use auth_form::AuthForm;
pub use toast_container::ToastContainer;
