//! Login handler

use crate::authentication::{IdentityProvider, Navigator, Notifier, SessionEndpoint};
use crate::handlers::{Action, AuthFlow, HandlerOutcome};
use crate::models::{Credential, Form, HandoffError, SessionOutcome};
use crate::utils::logging::LoggingHelper;

impl<P, E, N, V> AuthFlow<P, E, N, V>
where
    P: IdentityProvider,
    E: SessionEndpoint,
    N: Notifier,
    V: Navigator,
{
    /// Sign in with the provider and establish a backend session
    ///
    /// No client-side validation happens here: empty fields are forwarded
    /// and the provider's rejection is the first failure point.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The provider rejects the credentials or cannot be reached
    /// - The signed-in user cannot produce an identity token
    /// - The backend cannot be reached or sends an unreadable error body
    pub async fn sign_in(&self, credential: &Credential) -> Result<SessionOutcome, HandoffError> {
        LoggingHelper::log_handoff_start(
            Action::Login,
            &credential.email,
            self.provider.provider_name(),
        );
        let session = self.provider.authenticate_with_password(credential).await?;
        self.exchange_token(&session).await
    }

    /// Read `email` and `password` from the form and run the login pipeline
    pub async fn attempt_login(&self, form: &dyn Form) -> HandlerOutcome {
        let credential = Credential::from_form(form);
        let result = self.sign_in(&credential).await;
        self.report(Action::Login, result).await
    }
}
