//! Login and registration handlers
//!
//! [`AuthFlow`] owns one of each collaborator and exposes the two handlers.
//! Each handler runs a linear pipeline (provider call, token retrieval,
//! backend exchange) that stops at the first failure, then reports the result
//! as exactly one notification plus, on success, one navigation.

pub mod helpers;
pub mod login;
pub mod register;
pub mod types;


pub use types::{
    Action, HandlerOutcome, BACKEND_SESSION_ERROR_PREFIX, LOGIN_SUCCESS_MESSAGE,
    REGISTER_SUCCESS_MESSAGE,
};

use crate::authentication::{IdentityProvider, Navigator, Notifier, SessionEndpoint};
use crate::models::Form;
use crate::session::DEFAULT_DASHBOARD_PATH;

/// The login and registration handlers bound to their collaborators
pub struct AuthFlow<P, E, N, V> {
    provider: P,
    endpoint: E,
    notifier: N,
    navigator: V,
    dashboard_path: String,
}

impl<P, E, N, V> AuthFlow<P, E, N, V>
where
    P: IdentityProvider,
    E: SessionEndpoint,
    N: Notifier,
    V: Navigator,
{
    #[must_use]
    pub fn new(provider: P, endpoint: E, notifier: N, navigator: V) -> Self {
        Self {
            provider,
            endpoint,
            notifier,
            navigator,
            dashboard_path: DEFAULT_DASHBOARD_PATH.to_string(),
        }
    }

    /// Where to send the user after a session is established
    #[must_use]
    pub fn with_dashboard_path(mut self, path: impl Into<String>) -> Self {
        self.dashboard_path = path.into();
        self
    }

    #[must_use]
    pub fn dashboard_path(&self) -> &str {
        &self.dashboard_path
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Run the handler registered for `action` against `form`
    pub async fn dispatch(&self, action: Action, form: &dyn Form) -> HandlerOutcome {
        match action {
            Action::Login => self.attempt_login(form).await,
            Action::Register => self.attempt_register(form).await,
        }
    }
}
