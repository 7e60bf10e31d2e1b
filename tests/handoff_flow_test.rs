// Integration tests for the login/registration contract using in-memory fakes
use loginbridge::testing::{
    assert_navigated_once_to, assert_no_navigation, assert_no_network, assert_single_notification,
    MockIdentityProvider, MockSessionEndpoint, TestFixtures,
};
use loginbridge::{Action, ProviderError};

const CREDENTIAL_CASES: &[(&str, &str)] = &[
    ("a@example.com", "secret123"),
    ("", ""),
    ("user+tag@example.org", "p@ss w0rd with spaces"),
    ("ünïcode@example.de", "пароль"),
];

#[tokio::test]
async fn test_accepted_credentials_notify_once_and_navigate_once() {
    for (email, password) in CREDENTIAL_CASES {
        let harness = TestFixtures::happy_harness();
        let form = TestFixtures::login_form_with(email, password);

        harness.flow.attempt_login(&form).await;

        assert_single_notification(&harness.notifier, "Login successful!");
        assert_navigated_once_to(&harness.navigator, "/dashboard");
    }
}

#[tokio::test]
async fn test_provider_rejection_never_reaches_backend() {
    for (email, password) in CREDENTIAL_CASES {
        let error = ProviderError::rejected(
            "auth/invalid-credential",
            "Firebase: Error (auth/invalid-credential).",
        );
        let harness = TestFixtures::harness(
            MockIdentityProvider::rejecting(error),
            MockSessionEndpoint::accepting(),
        );
        let form = TestFixtures::login_form_with(email, password);

        harness.flow.attempt_login(&form).await;

        assert_single_notification(
            &harness.notifier,
            "Firebase: Error (auth/invalid-credential).",
        );
        assert!(harness.endpoint.received_tokens().is_empty());
        assert_no_navigation(&harness.navigator);
    }
}

#[tokio::test]
async fn test_mismatched_confirmation_never_touches_network() {
    let cases = [("abc", "xyz"), ("secret123", "secret124"), ("", " "), ("Secret", "secret")];
    for (password, confirm) in cases {
        let harness = TestFixtures::happy_harness();
        let form = TestFixtures::register_form_with("a@example.com", password, confirm);

        harness.flow.attempt_register(&form).await;

        assert_single_notification(&harness.notifier, "Passwords do not match");
        assert_no_network(&harness.provider, &harness.endpoint);
        assert_no_navigation(&harness.navigator);
    }
}

#[tokio::test]
async fn test_backend_error_message_is_shown_for_both_actions() {
    for action in [Action::Login, Action::Register] {
        let harness = TestFixtures::harness(
            MockIdentityProvider::accepting("mock-id-token"),
            MockSessionEndpoint::rejecting(401, "invalid token"),
        );

        harness
            .flow
            .dispatch(action, &TestFixtures::register_form())
            .await;

        assert_single_notification(&harness.notifier, "Backend session error: invalid token");
        assert_no_navigation(&harness.navigator);
    }
}
