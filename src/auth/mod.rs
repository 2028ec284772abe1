//! Mock authentication: form types, validation and display-name derivation.
//!
//! Nothing here checks credentials. A submission that passes the
//! non-empty checks always yields a [`User`].

mod simulator;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub use simulator::AuthSimulator;

/// The current mock user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Which variant of the auth dialog is in use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    /// Path segment used in routes (`/auth/{segment}`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SignIn => "signin",
            Self::SignUp => "signup",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Welcome Back",
            Self::SignUp => "Create Account",
        }
    }

    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Create Account",
        }
    }
}

/// Auth form fields as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl AuthForm {
    /// Copy of the form safe to render back: passwords are dropped.
    #[must_use]
    pub fn without_secrets(&self) -> Self {
        Self {
            name: self.name.clone(),
            email: self.email.clone(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.password.is_empty()
            && self.confirm_password.is_empty()
    }
}

/// Auth dialog state held by a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthDialog {
    pub open: bool,
    pub mode: AuthMode,
    pub form: AuthForm,
    pub error: Option<ValidationError>,
}

impl AuthDialog {
    /// Open the dialog in `mode` with a blank form.
    pub fn open(&mut self, mode: AuthMode) {
        *self = Self {
            open: true,
            mode,
            ..Self::default()
        };
    }

    /// Close the dialog and drop anything typed into it.
    pub fn close(&mut self) {
        *self = Self::default();
    }
}

/// Check the fields a submission must carry.
///
/// `enforce_password_match` only applies to sign-up.
pub fn validate(
    mode: AuthMode,
    form: &AuthForm,
    enforce_password_match: bool,
) -> Result<(), ValidationError> {
    if form.email.trim().is_empty() {
        return Err(ValidationError::MissingField("email"));
    }
    if form.password.is_empty() {
        return Err(ValidationError::MissingField("password"));
    }
    if mode == AuthMode::SignUp && enforce_password_match && form.password != form.confirm_password
    {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Name shown for a user: the supplied name, else the local part of the email.
#[must_use]
pub fn display_name(name: &str, email: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        email
            .trim()
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string()
    } else {
        name.to_string()
    }
}

/// Build the [`User`] a successful submission produces.
///
/// Sign-in forms carry no name field, so the email prefix is always used.
#[must_use]
pub fn user_from_form(mode: AuthMode, form: &AuthForm) -> User {
    let name = match mode {
        AuthMode::SignIn => "",
        AuthMode::SignUp => form.name.as_str(),
    };
    User {
        name: display_name(name, &form.email),
        email: form.email.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str) -> AuthForm {
        AuthForm {
            name: name.into(),
            email: email.into(),
            password: "hunter2".into(),
            confirm_password: "hunter2".into(),
        }
    }

    #[test]
    fn test_signup_without_name_uses_email_prefix() {
        let user = user_from_form(AuthMode::SignUp, &form("", "jane@example.com"));
        assert_eq!(user.name, "jane");
        assert_eq!(user.email, "jane@example.com");
    }

    #[test]
    fn test_email_prefix_for_various_addresses() {
        for (email, expected) in [
            ("a@b.c", "a"),
            ("first.last+tag@mail.example", "first.last+tag"),
            ("two@at@signs", "two"),
            ("no-at-sign", "no-at-sign"),
            ("@leading", ""),
        ] {
            assert_eq!(display_name("", email), expected, "email {email}");
        }
    }

    #[test]
    fn test_blank_name_falls_back() {
        assert_eq!(display_name("   ", "sam@x.io"), "sam");
        assert_eq!(display_name(" Sam Lee ", "sam@x.io"), "Sam Lee");
    }

    #[test]
    fn test_signin_ignores_name() {
        let user = user_from_form(AuthMode::SignIn, &form("Someone Else", "kim@x.io"));
        assert_eq!(user.name, "kim");
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            validate(AuthMode::SignIn, &form("", "  "), false),
            Err(ValidationError::MissingField("email"))
        );

        let mut no_password = form("", "a@b.c");
        no_password.password.clear();
        assert_eq!(
            validate(AuthMode::SignIn, &no_password, false),
            Err(ValidationError::MissingField("password"))
        );

        let mut mismatch = form("", "a@b.c");
        mismatch.confirm_password = "other".into();
        assert!(validate(AuthMode::SignUp, &mismatch, false).is_ok());
        assert_eq!(
            validate(AuthMode::SignUp, &mismatch, true),
            Err(ValidationError::PasswordMismatch)
        );
        // Sign-in has no confirmation field.
        assert!(validate(AuthMode::SignIn, &mismatch, true).is_ok());
    }

    #[test]
    fn test_dialog_open_close() {
        let mut dialog = AuthDialog::default();
        dialog.open(AuthMode::SignUp);
        assert!(dialog.open);
        assert_eq!(dialog.mode, AuthMode::SignUp);

        dialog.form = form("Jo", "jo@x.io");
        dialog.close();
        assert!(!dialog.open);
        assert!(dialog.form.is_empty());
    }

    #[test]
    fn test_without_secrets() {
        let safe = form("Jo", "jo@x.io").without_secrets();
        assert_eq!(safe.name, "Jo");
        assert!(safe.password.is_empty());
        assert!(safe.confirm_password.is_empty());
    }
}
