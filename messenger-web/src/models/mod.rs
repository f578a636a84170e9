pub mod session;
pub mod toast;
