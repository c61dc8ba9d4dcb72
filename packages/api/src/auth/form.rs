use serde::Serialize;

use super::SignInError;

/// Minimum username length accepted by the sign-in form.
pub const MIN_USERNAME_LEN: usize = 3;

/// What the user typed into the sign-in form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignInForm {
    pub username: String,
    pub password: String,
    /// Keep the session for the configured number of days instead of the
    /// browser session.
    pub remember_me: bool,
}

/// Request body for the sign-in endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl SignInForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            remember_me: false,
        }
    }

    /// Local checks, in the order the form reports them.
    pub fn validate(&self) -> Result<(), SignInError> {
        if self.username.trim().is_empty() {
            return Err(SignInError::Validation("Username is required"));
        }
        if self.password.is_empty() {
            return Err(SignInError::Validation("Password is required"));
        }
        if self.username.chars().count() < MIN_USERNAME_LEN {
            return Err(SignInError::Validation(
                "Username must be at least 3 characters",
            ));
        }
        Ok(())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}
