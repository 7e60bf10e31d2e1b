//! Backend session establishment
//!
//! After the identity provider issues a token, the backend exchanges it for
//! its own session (usually a cookie). This module holds the HTTP client side
//! of that exchange and the navigator that follows it.

pub mod backend;
pub mod navigator;

pub use backend::{HttpSessionBackend, DEFAULT_SESSION_LOGIN_PATH};
pub use navigator::{HttpNavigator, DEFAULT_DASHBOARD_PATH};

use thiserror::Error;

/// Failures talking to the backend session endpoint
///
/// A well-formed rejection (`{"error": "..."}`) is not an error here; it is
/// reported as [`crate::models::SessionOutcome::Rejected`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The request could not be sent or its response could not be read
    #[error("{0}")]
    Transport(String),

    /// Non-2xx response whose body is not JSON or has no string `error` field
    #[error("unreadable response (HTTP {status})")]
    MalformedErrorBody { status: u16 },
}
