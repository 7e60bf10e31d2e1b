//! Steps shared by both handlers once the provider has signed the user in

use crate::authentication::{IdentityProvider, Navigator, Notifier, SessionEndpoint, SessionHandle};
use crate::handlers::{Action, AuthFlow, HandlerOutcome, BACKEND_SESSION_ERROR_PREFIX};
use crate::models::{HandoffError, SessionOutcome};
use crate::utils::logging::LoggingHelper;

impl<P, E, N, V> AuthFlow<P, E, N, V>
where
    P: IdentityProvider,
    E: SessionEndpoint,
    N: Notifier,
    V: Navigator,
{
    /// Fetch a token from the signed-in user and hand it to the backend
    pub(crate) async fn exchange_token(
        &self,
        session: &P::Session,
    ) -> Result<SessionOutcome, HandoffError> {
        let token = session.identity_token().await?;
        LoggingHelper::log_token_issued(self.provider.provider_name());
        Ok(self.endpoint.establish(&token).await?)
    }

    /// Turn a pipeline result into one notification and, on success, one
    /// navigation
    pub(crate) async fn report(
        &self,
        action: Action,
        result: Result<SessionOutcome, HandoffError>,
    ) -> HandlerOutcome {
        match result {
            Ok(SessionOutcome::Established) => {
                LoggingHelper::log_session_established(action);
                let message = action.success_message();
                self.notifier.notify(message);
                self.navigator.navigate(&self.dashboard_path).await;
                HandlerOutcome::established(message, &self.dashboard_path)
            }
            Ok(SessionOutcome::Rejected { status, message }) => {
                LoggingHelper::log_session_rejected(action, status, &message);
                let notification = format!("{BACKEND_SESSION_ERROR_PREFIX}{message}");
                self.notifier.notify(&notification);
                HandlerOutcome::failed(notification)
            }
            Err(err) => {
                LoggingHelper::log_handoff_failed(action, &err);
                let notification = err.to_string();
                self.notifier.notify(&notification);
                HandlerOutcome::failed(notification)
            }
        }
    }
}
