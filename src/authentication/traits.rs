//! Capability traits for every external collaborator of a handoff
//!
//! The handoff pipeline only talks to these traits, so each collaborator can
//! be swapped: a real identity provider or a fake, an HTTP backend or an
//! in-memory one, a terminal or a GUI for notifications.

use crate::models::{Credential, IdentityToken, SessionOutcome};
use crate::provider::ProviderError;
use crate::session::SessionError;
use async_trait::async_trait;

/// Identity provider able to verify or create email/password accounts
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Handle to a signed-in user
    type Session: SessionHandle;

    /// Sign in an existing account
    ///
    /// # Errors
    /// Returns an error if:
    /// - The credentials are wrong or the account is disabled
    /// - The provider cannot be reached
    async fn authenticate_with_password(
        &self,
        credential: &Credential,
    ) -> Result<Self::Session, ProviderError>;

    /// Create a new account and sign it in
    ///
    /// # Errors
    /// Returns an error if:
    /// - The email is already registered
    /// - The password violates the provider's policy
    /// - The provider cannot be reached
    async fn create_account_with_password(
        &self,
        credential: &Credential,
    ) -> Result<Self::Session, ProviderError>;

    /// Name used in logs (e.g., "firebase")
    fn provider_name(&self) -> &'static str;
}

/// A signed-in user as seen by the identity provider
#[async_trait]
pub trait SessionHandle: Send + Sync {
    /// Current identity token for this user
    ///
    /// # Errors
    /// Returns an error if the session is no longer valid or the provider
    /// cannot be reached to refresh it.
    async fn identity_token(&self) -> Result<IdentityToken, ProviderError>;
}

/// Backend that turns an identity token into its own session
#[async_trait]
pub trait SessionEndpoint: Send + Sync {
    /// Send the token once and report the backend's answer
    ///
    /// # Errors
    /// Returns an error if the request cannot be sent or the backend answers
    /// with an error body that cannot be read.
    async fn establish(&self, token: &IdentityToken) -> Result<SessionOutcome, SessionError>;
}

/// Shows a message to the user
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Moves the user to another page after a successful handoff
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate(&self, path: &str);
}
