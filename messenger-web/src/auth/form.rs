//! Field values and client-side validation for the auth form.
//!
//! Only presence and the `@` in the email are checked here; the server owns
//! every other rule.

use std::collections::BTreeMap;

use shared::models::{CredentialsSignIn, RegisterRequest};
use strum::{EnumIter, IntoEnumIterator};

use super::AuthMode;

/// Inputs rendered by the auth form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum FormField {
    Name,
    Email,
    Password,
}

impl FormField {
    /// DOM id of the input element.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Name => "auth.fields.name",
            Self::Email => "auth.fields.email",
            Self::Password => "auth.fields.password",
        }
    }

    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Name => "text",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    /// Fields shown in `mode`, in render order.
    pub fn visible_in(mode: AuthMode) -> impl Iterator<Item = Self> {
        Self::iter().filter(move |field| mode.shows_name_field() || *field != Self::Name)
    }
}

/// Validation errors that can occur during form validation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValidationError {
    /// Field is required but empty
    Required,
    /// Email address is invalid (missing @ symbol)
    InvalidEmail,
}

impl ValidationError {
    #[must_use]
    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::Required => "auth.errors.required",
            Self::InvalidEmail => "auth.errors.email_invalid",
        }
    }
}

/// Validates a display name. Must not be blank.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required);
    }

    Ok(())
}

/// Validates an email address.
///
/// # Validation rules
/// - Email must not be empty
/// - Email must contain an '@' symbol
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }

    if !trimmed.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validates a password. Any non-empty value passes, whitespace included;
/// strength rules belong to the server.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required);
    }

    Ok(())
}

/// Per-field validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, ValidationError>);

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn record(&mut self, field: FormField, result: Result<(), ValidationError>) {
        if let Err(error) = result {
            self.0.insert(field, error);
        }
    }
}

/// Current contents of the auth form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl FormValues {
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
        }
    }

    /// Checks every field visible in `mode`.
    ///
    /// # Errors
    /// Returns the failures keyed by field when any visible field is invalid.
    pub fn validate(&self, mode: AuthMode) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in FormField::visible_in(mode) {
            let value = self.get(field);
            let result = match field {
                FormField::Name => validate_name(value),
                FormField::Email => validate_email(value),
                FormField::Password => validate_password(value),
            };
            errors.record(field, result);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    #[must_use]
    pub fn register_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// Credentials for a sign-in that reports back instead of redirecting.
    #[must_use]
    pub fn credentials(&self) -> CredentialsSignIn {
        CredentialsSignIn::without_redirect(self.email.clone(), self.password.clone())
    }
}
