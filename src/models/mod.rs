//! Data types flowing through a sign-in handoff
//!
//! Every value here lives for a single handler invocation: credentials are
//! read from the form, exchanged for an identity token, and the token is sent
//! to the backend once. Nothing is persisted.

pub mod auth;
pub mod form;

pub use auth::{HandoffError, SessionOutcome};
pub use form::{FieldMap, Form, CONFIRM_PASSWORD_FIELD, EMAIL_FIELD, PASSWORD_FIELD};

use serde::Serialize;
use std::fmt;

/// Email/password pair read from the form
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

impl Credential {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Read the `email` and `password` fields. Missing fields read as empty
    /// strings and are forwarded as-is.
    #[must_use]
    pub fn from_form(form: &dyn Form) -> Self {
        Self::new(form.value(EMAIL_FIELD), form.value(PASSWORD_FIELD))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("email", &self.email)
            .field("password", &"********")
            .finish()
    }
}

/// Opaque bearer token issued by the identity provider
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IdentityToken(String);

impl IdentityToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for IdentityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentityToken(<redacted>, {} chars)", self.0.len())
    }
}
