//! Handoff results and the unified error type
//!
//! A handoff either ends with a [`SessionOutcome`] from the backend or stops
//! early with a [`HandoffError`]. Handlers turn both into exactly one
//! user-facing notification.

use crate::provider::ProviderError;
use crate::session::SessionError;
use thiserror::Error;

/// What the backend said about the identity token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// 2xx response; the session cookie is now held by the HTTP client
    Established,
    /// Non-2xx response carrying a server-supplied `error` message
    Rejected { status: u16, message: String },
}

impl SessionOutcome {
    #[must_use]
    pub fn is_established(&self) -> bool {
        matches!(self, SessionOutcome::Established)
    }
}

/// Errors that stop a handoff before the backend produces an outcome
#[derive(Debug, Error)]
pub enum HandoffError {
    /// Local validation failed; nothing was sent anywhere
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// The identity provider refused or could not be reached
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The backend call failed or answered with an unreadable error body
    #[error("Backend session error: {0}")]
    Session(#[from] SessionError),
}
