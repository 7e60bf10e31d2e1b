//! Mock objects and fake implementations for testing
//!
//! Every fake is cheaply cloneable and shares its state between clones, so a
//! test can hand one clone to an [`crate::handlers::AuthFlow`] and inspect
//! the other afterwards.

use crate::authentication::{IdentityProvider, Navigator, Notifier, SessionEndpoint, SessionHandle};
use crate::models::{Credential, IdentityToken, SessionOutcome};
use crate::provider::ProviderError;
use crate::session::SessionError;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

struct ProviderState {
    sign_in: Result<(), ProviderError>,
    sign_up: Result<(), ProviderError>,
    token: Result<IdentityToken, ProviderError>,
    sign_in_calls: Vec<Credential>,
    sign_up_calls: Vec<Credential>,
}

/// Identity provider with scripted answers that records every call
#[derive(Clone)]
pub struct MockIdentityProvider {
    state: Arc<Mutex<ProviderState>>,
}

impl MockIdentityProvider {
    /// Accept every sign-in and sign-up, issuing `token`
    #[must_use]
    pub fn accepting(token: &str) -> Self {
        Self {
            state: Arc::new(Mutex::new(ProviderState {
                sign_in: Ok(()),
                sign_up: Ok(()),
                token: Ok(IdentityToken::new(token)),
                sign_in_calls: Vec::new(),
                sign_up_calls: Vec::new(),
            })),
        }
    }

    /// Reject every sign-in and sign-up with `error`
    #[must_use]
    pub fn rejecting(error: ProviderError) -> Self {
        let provider = Self::accepting("unused");
        {
            let mut state = lock(&provider.state);
            state.sign_in = Err(error.clone());
            state.sign_up = Err(error);
        }
        provider
    }

    /// Sign users in, but fail when they are asked for a token
    #[must_use]
    pub fn with_token_error(self, error: ProviderError) -> Self {
        lock(&self.state).token = Err(error);
        self
    }

    #[must_use]
    pub fn sign_in_calls(&self) -> Vec<Credential> {
        lock(&self.state).sign_in_calls.clone()
    }

    #[must_use]
    pub fn sign_up_calls(&self) -> Vec<Credential> {
        lock(&self.state).sign_up_calls.clone()
    }

    /// Number of provider calls of either kind
    #[must_use]
    pub fn call_count(&self) -> usize {
        let state = lock(&self.state);
        state.sign_in_calls.len() + state.sign_up_calls.len()
    }
}

/// Session handle produced by [`MockIdentityProvider`]
pub struct MockSession {
    token: Result<IdentityToken, ProviderError>,
}

#[async_trait]
impl SessionHandle for MockSession {
    async fn identity_token(&self) -> Result<IdentityToken, ProviderError> {
        self.token.clone()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    type Session = MockSession;

    async fn authenticate_with_password(
        &self,
        credential: &Credential,
    ) -> Result<MockSession, ProviderError> {
        let mut state = lock(&self.state);
        state.sign_in_calls.push(credential.clone());
        state.sign_in.clone()?;
        Ok(MockSession {
            token: state.token.clone(),
        })
    }

    async fn create_account_with_password(
        &self,
        credential: &Credential,
    ) -> Result<MockSession, ProviderError> {
        let mut state = lock(&self.state);
        state.sign_up_calls.push(credential.clone());
        state.sign_up.clone()?;
        Ok(MockSession {
            token: state.token.clone(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

struct EndpointState {
    response: Result<SessionOutcome, SessionError>,
    received: Vec<IdentityToken>,
}

/// Session endpoint with a scripted answer that records received tokens
#[derive(Clone)]
pub struct MockSessionEndpoint {
    state: Arc<Mutex<EndpointState>>,
}

impl MockSessionEndpoint {
    fn responding(response: Result<SessionOutcome, SessionError>) -> Self {
        Self {
            state: Arc::new(Mutex::new(EndpointState {
                response,
                received: Vec::new(),
            })),
        }
    }

    /// Answer 2xx to every token
    #[must_use]
    pub fn accepting() -> Self {
        Self::responding(Ok(SessionOutcome::Established))
    }

    /// Answer `status` with `{"error": message}`
    #[must_use]
    pub fn rejecting(status: u16, message: &str) -> Self {
        Self::responding(Ok(SessionOutcome::Rejected {
            status,
            message: message.to_string(),
        }))
    }

    /// Fail every call with `error`
    #[must_use]
    pub fn failing(error: SessionError) -> Self {
        Self::responding(Err(error))
    }

    #[must_use]
    pub fn received_tokens(&self) -> Vec<IdentityToken> {
        lock(&self.state).received.clone()
    }
}

#[async_trait]
impl SessionEndpoint for MockSessionEndpoint {
    async fn establish(&self, token: &IdentityToken) -> Result<SessionOutcome, SessionError> {
        let mut state = lock(&self.state);
        state.received.push(token.clone());
        state.response.clone()
    }
}

/// Notifier that keeps every message it was asked to show
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        lock(&self.messages).clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        lock(&self.messages).push(message.to_string());
    }
}

/// Navigator that keeps every path it was asked to visit
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    paths: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        lock(&self.paths).clone()
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn navigate(&self, path: &str) {
        lock(&self.paths).push(path.to_string());
    }
}
