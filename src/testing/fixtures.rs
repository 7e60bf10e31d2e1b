//! Pre-built test data: forms, flows and settings

use crate::handlers::AuthFlow;
use crate::models::{FieldMap, CONFIRM_PASSWORD_FIELD, EMAIL_FIELD, PASSWORD_FIELD};
use crate::settings::LoginBridgeSettings;
use crate::testing::constants::{TEST_API_KEY, TEST_EMAIL, TEST_PASSWORD};
use crate::testing::mock::{
    MockIdentityProvider, MockSessionEndpoint, RecordingNavigator, RecordingNotifier,
};

/// Flow wired entirely to fakes
pub type MockAuthFlow =
    AuthFlow<MockIdentityProvider, MockSessionEndpoint, RecordingNotifier, RecordingNavigator>;

/// A flow plus handles on the fakes it was built from
pub struct FlowHarness {
    pub flow: MockAuthFlow,
    pub provider: MockIdentityProvider,
    pub endpoint: MockSessionEndpoint,
    pub notifier: RecordingNotifier,
    pub navigator: RecordingNavigator,
}

pub struct TestFixtures;

impl TestFixtures {
    /// Login form with the default test credentials
    #[must_use]
    pub fn login_form() -> FieldMap {
        Self::login_form_with(TEST_EMAIL, TEST_PASSWORD)
    }

    #[must_use]
    pub fn login_form_with(email: &str, password: &str) -> FieldMap {
        FieldMap::new()
            .with(EMAIL_FIELD, email)
            .with(PASSWORD_FIELD, password)
    }

    /// Registration form whose confirmation matches
    #[must_use]
    pub fn register_form() -> FieldMap {
        Self::register_form_with(TEST_EMAIL, TEST_PASSWORD, TEST_PASSWORD)
    }

    #[must_use]
    pub fn register_form_with(email: &str, password: &str, confirm_password: &str) -> FieldMap {
        Self::login_form_with(email, password).with(CONFIRM_PASSWORD_FIELD, confirm_password)
    }

    /// Build a flow around the given provider and endpoint fakes
    #[must_use]
    pub fn harness(provider: MockIdentityProvider, endpoint: MockSessionEndpoint) -> FlowHarness {
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let flow = AuthFlow::new(
            provider.clone(),
            endpoint.clone(),
            notifier.clone(),
            navigator.clone(),
        );
        FlowHarness {
            flow,
            provider,
            endpoint,
            notifier,
            navigator,
        }
    }

    /// Flow where the provider and the backend both accept
    #[must_use]
    pub fn happy_harness() -> FlowHarness {
        Self::harness(
            MockIdentityProvider::accepting("mock-id-token"),
            MockSessionEndpoint::accepting(),
        )
    }

    /// Settings pointing both the provider and the backend at `base_url`
    #[must_use]
    pub fn settings_for(base_url: &str) -> LoginBridgeSettings {
        let mut settings = LoginBridgeSettings::default();
        settings.provider.api_key = TEST_API_KEY.to_string();
        settings.provider.api_key_env = None;
        settings.provider.identity_toolkit_url = base_url.to_string();
        settings.provider.secure_token_url = base_url.to_string();
        settings.backend.base_url = base_url.to_string();
        settings
    }
}
