//! Custom assertion helpers for handler outcomes
//!
//! These check the user-visible contract of a handler run: how many
//! notifications were shown, what they said, and whether the user was
//! navigated away.

use crate::testing::mock::{
    MockIdentityProvider, MockSessionEndpoint, RecordingNavigator, RecordingNotifier,
};

/// Assert that exactly one notification was shown and that it equals `expected`
///
/// # Panics
///
/// Panics if zero or several notifications were shown, or the text differs.
pub fn assert_single_notification(notifier: &RecordingNotifier, expected: &str) {
    let messages = notifier.messages();
    assert_eq!(
        messages,
        vec![expected.to_string()],
        "Expected exactly one notification {expected:?}, got {messages:?}"
    );
}

/// Assert that the user was navigated exactly once, to `path`
///
/// # Panics
///
/// Panics if there was no navigation, several, or one to another path.
pub fn assert_navigated_once_to(navigator: &RecordingNavigator, path: &str) {
    let paths = navigator.paths();
    assert_eq!(
        paths,
        vec![path.to_string()],
        "Expected a single navigation to {path}, got {paths:?}"
    );
}

/// Assert that the user stayed on the page
///
/// # Panics
///
/// Panics if any navigation happened.
pub fn assert_no_navigation(navigator: &RecordingNavigator) {
    let paths = navigator.paths();
    assert!(paths.is_empty(), "Expected no navigation, got {paths:?}");
}

/// Assert that neither the provider nor the backend was contacted
///
/// # Panics
///
/// Panics if the provider was called or the backend received a token.
pub fn assert_no_network(provider: &MockIdentityProvider, endpoint: &MockSessionEndpoint) {
    assert_eq!(provider.call_count(), 0, "Expected no identity provider calls");
    assert!(
        endpoint.received_tokens().is_empty(),
        "Expected no POST to the session endpoint"
    );
}
