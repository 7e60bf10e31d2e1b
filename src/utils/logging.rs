// Centralized logging for the sign-in handoff. Passwords and tokens are never
// logged; emails are masked.
use crate::handlers::Action;
use crate::models::HandoffError;
use log::{debug, info, warn};

pub struct LoggingHelper;

impl LoggingHelper {
    /// Log the start of a handoff
    pub fn log_handoff_start(action: Action, email: &str, provider: &str) {
        info!(
            "🔄 {} for {} via {}",
            action,
            mask_email(email),
            provider
        );
    }

    /// Log that the provider issued an identity token
    pub fn log_token_issued(provider: &str) {
        debug!("Identity token issued by {provider}, sending to backend");
    }

    /// Log a successful backend session
    pub fn log_session_established(action: Action) {
        info!("✅ {action}: backend session established");
    }

    /// Log a backend rejection carrying a server-supplied message
    pub fn log_session_rejected(action: Action, status: u16, message: &str) {
        warn!("❌ {action}: backend rejected session (HTTP {status}): {message}");
    }

    /// Log a handoff that stopped before the backend answered
    pub fn log_handoff_failed(action: Action, error: &HandoffError) {
        match error {
            HandoffError::PasswordMismatch => {
                warn!("❌ {action}: password confirmation does not match");
            }
            HandoffError::Provider(err) => {
                warn!("❌ {action}: identity provider refused ({})", err.code());
            }
            HandoffError::Session(err) => {
                warn!("❌ {action}: backend session call failed: {err}");
            }
        }
    }

    /// Log the effective configuration at startup
    pub fn log_configuration(backend_url: &str, identity_toolkit_url: &str, timeout_secs: u64) {
        info!("🔧 Backend: {backend_url}");
        info!("🔧 Identity Toolkit: {identity_toolkit_url}");
        if timeout_secs == 0 {
            info!("🔧 Request timeout: disabled");
        } else {
            info!("🔧 Request timeout: {timeout_secs}s");
        }
    }
}

/// Mask the local part of an email address, keeping its first character
#[must_use]
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{first}***@{domain}"),
            None => format!("***@{domain}"),
        },
        None if email.is_empty() => "<empty>".to_string(),
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("@example.com"), "***@example.com");
        assert_eq!(mask_email("not-an-email"), "***");
        assert_eq!(mask_email(""), "<empty>");
    }
}
