/// User-facing messages the auth flow can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    LoggedIn,
    InvalidCredentials,
    SomethingWentWrong,
}

impl Notice {
    #[must_use]
    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::LoggedIn => "auth.notices.logged_in",
            Self::InvalidCredentials => "auth.notices.invalid_credentials",
            Self::SomethingWentWrong => "auth.notices.something_went_wrong",
        }
    }

    /// English text, used when no translation is loaded.
    #[must_use]
    pub const fn fallback_text(self) -> &'static str {
        match self {
            Self::LoggedIn => "Logged in!",
            Self::InvalidCredentials => "Invalid credentials",
            Self::SomethingWentWrong => "Something went wrong!",
        }
    }
}
