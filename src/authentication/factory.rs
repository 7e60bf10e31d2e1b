//! Factory for wiring a handoff flow from configuration
//!
//! Builds the Firebase provider, the HTTP session backend and the HTTP
//! navigator from settings. The backend and the navigator share one
//! cookie-carrying client so the session cookie from `/sessionLogin` is
//! presented when navigating to the dashboard.

use crate::authentication::Notifier;
use crate::handlers::AuthFlow;
use crate::provider::FirebaseProvider;
use crate::session::{HttpNavigator, HttpSessionBackend};
use crate::settings::LoginBridgeSettings;
use crate::utils::http::build_http_client;
use crate::utils::logging::LoggingHelper;
use anyhow::{Context, Result};

/// Flow wired to the real provider and backend, with a caller-chosen notifier
pub type HttpAuthFlow<N> = AuthFlow<FirebaseProvider, HttpSessionBackend, N, HttpNavigator>;

/// Configuration for creating the backend side of a flow
#[derive(Debug, Clone)]
pub struct AuthenticationConfig {
    pub base_url: String,
    pub session_login_path: String,
    pub dashboard_path: String,
    pub request_timeout_secs: u64,
}

impl AuthenticationConfig {
    /// Create authentication configuration from settings
    #[must_use]
    pub fn from_settings(settings: &LoginBridgeSettings) -> Self {
        Self {
            base_url: settings.backend.base_url.clone(),
            session_login_path: settings.backend.session_login_path.clone(),
            dashboard_path: settings.backend.dashboard_path.clone(),
            request_timeout_secs: settings.backend.request_timeout_secs,
        }
    }
}

/// Factory for creating handoff flows with dependency injection
pub struct AuthenticationServiceFactory;

impl AuthenticationServiceFactory {
    /// Create a fully configured flow that reports through `notifier`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The settings fail validation (missing API key, bad backend URL)
    /// - An HTTP client cannot be built
    pub fn create_auth_flow<N: Notifier>(
        settings: &LoginBridgeSettings,
        notifier: N,
    ) -> Result<HttpAuthFlow<N>> {
        settings.validate()?;
        let config = AuthenticationConfig::from_settings(settings);

        LoggingHelper::log_configuration(
            &config.base_url,
            &settings.provider.identity_toolkit_url,
            config.request_timeout_secs,
        );

        let provider_client = build_http_client(config.request_timeout_secs, false)
            .context("Failed to build identity provider HTTP client")?;
        let provider = FirebaseProvider::from_settings(&settings.provider, provider_client);

        let session_client = build_http_client(config.request_timeout_secs, true)
            .context("Failed to build backend HTTP client")?;
        let backend = HttpSessionBackend::new(
            session_client.clone(),
            &config.base_url,
            &config.session_login_path,
        );
        let navigator = HttpNavigator::new(session_client, &config.base_url);

        log::debug!("Session endpoint: {}", backend.login_url());

        Ok(AuthFlow::new(provider, backend, notifier, navigator)
            .with_dashboard_path(config.dashboard_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mock::RecordingNotifier;

    fn settings_with_key() -> LoginBridgeSettings {
        let mut settings = LoginBridgeSettings::default();
        settings.provider.api_key = "AIzaTest".to_string();
        settings.provider.api_key_env = None;
        settings
    }

    #[test]
    fn test_create_auth_flow_uses_configured_paths() {
        let mut settings = settings_with_key();
        settings.backend.dashboard_path = "/lists".to_string();

        let flow =
            AuthenticationServiceFactory::create_auth_flow(&settings, RecordingNotifier::default())
                .unwrap();

        assert_eq!(flow.dashboard_path(), "/lists");
    }

    #[test]
    fn test_create_auth_flow_requires_api_key() {
        let mut settings = LoginBridgeSettings::default();
        settings.provider.api_key_env = None;

        let result =
            AuthenticationServiceFactory::create_auth_flow(&settings, RecordingNotifier::default());

        let err = result.err().unwrap();
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn test_config_from_settings() {
        let mut settings = settings_with_key();
        settings.backend.request_timeout_secs = 10;
        let config = AuthenticationConfig::from_settings(&settings);
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.session_login_path, "/sessionLogin");
        assert_eq!(config.request_timeout_secs, 10);
    }
}
