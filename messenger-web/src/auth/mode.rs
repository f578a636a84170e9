/// Which action the auth form performs on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    /// The other mode.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    /// Only registration asks for a display name.
    #[must_use]
    pub const fn shows_name_field(self) -> bool {
        matches!(self, Self::Register)
    }

    #[must_use]
    pub const fn submit_label_key(self) -> &'static str {
        match self {
            Self::Login => "auth.sign_in",
            Self::Register => "auth.register",
        }
    }

    #[must_use]
    pub const fn prompt_key(self) -> &'static str {
        match self {
            Self::Login => "auth.new_here",
            Self::Register => "auth.have_account",
        }
    }

    #[must_use]
    pub const fn toggle_link_key(self) -> &'static str {
        match self {
            Self::Login => "auth.create_account",
            Self::Register => "auth.login",
        }
    }
}
