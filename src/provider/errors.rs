//! Identity provider error type
//!
//! The message carried here is what the user sees, so providers are expected
//! to fill it with their own wording rather than a generic description.

use thiserror::Error;

/// Broad category of a provider failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// The provider answered and refused the request (bad credentials,
    /// duplicate account, weak password, disabled user)
    Rejected,
    /// The provider could not be reached or timed out
    Network,
    /// The session handle can no longer produce a token
    SessionExpired,
    /// The provider answered with something that could not be understood
    Internal,
}

/// Error raised by an identity provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProviderError {
    kind: ProviderErrorKind,
    code: String,
    message: String,
}

impl ProviderError {
    #[must_use]
    pub fn new(kind: ProviderErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn rejected(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Rejected, code, message)
    }

    #[must_use]
    pub fn kind(&self) -> ProviderErrorKind {
        self.kind
    }

    /// Machine-readable code, e.g. `auth/wrong-password`
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable message, shown to the user verbatim
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
