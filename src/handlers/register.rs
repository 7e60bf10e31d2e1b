//! Registration handler

use crate::authentication::{IdentityProvider, Navigator, Notifier, SessionEndpoint};
use crate::handlers::{Action, AuthFlow, HandlerOutcome};
use crate::models::{Credential, Form, HandoffError, SessionOutcome, CONFIRM_PASSWORD_FIELD};
use crate::utils::logging::LoggingHelper;

impl<P, E, N, V> AuthFlow<P, E, N, V>
where
    P: IdentityProvider,
    E: SessionEndpoint,
    N: Notifier,
    V: Navigator,
{
    /// Create an account with the provider and establish a backend session
    ///
    /// A confirmation mismatch fails before any provider or network call.
    ///
    /// # Errors
    /// Returns an error if:
    /// - `confirm_password` differs from the credential's password
    /// - The provider refuses to create the account or cannot be reached
    /// - The new user cannot produce an identity token
    /// - The backend cannot be reached or sends an unreadable error body
    pub async fn sign_up(
        &self,
        credential: &Credential,
        confirm_password: &str,
    ) -> Result<SessionOutcome, HandoffError> {
        if credential.password != confirm_password {
            return Err(HandoffError::PasswordMismatch);
        }

        LoggingHelper::log_handoff_start(
            Action::Register,
            &credential.email,
            self.provider.provider_name(),
        );
        let session = self.provider.create_account_with_password(credential).await?;
        self.exchange_token(&session).await
    }

    /// Read `email`, `password` and `confirm_password` from the form and run
    /// the registration pipeline
    pub async fn attempt_register(&self, form: &dyn Form) -> HandlerOutcome {
        let credential = Credential::from_form(form);
        let confirm_password = form.value(CONFIRM_PASSWORD_FIELD);
        let result = self.sign_up(&credential, &confirm_password).await;
        self.report(Action::Register, result).await
    }
}
