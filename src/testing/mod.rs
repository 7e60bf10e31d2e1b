//! Unified testing utilities for loginbridge
//!
//! ## Organization
//!
//! - [`fixtures`] - Pre-built forms, settings and fake-wired flows
//! - [`assertions`] - Assertion helpers for the notification/navigation contract
//! - [`mock`] - Fake identity provider, session endpoint, notifier and navigator
//!
//! ## Usage
//!
//! ```rust,ignore
//! use loginbridge::testing::{assert_single_notification, TestFixtures};
//!
//! #[tokio::test]
//! async fn test_login() {
//!     let harness = TestFixtures::happy_harness();
//!     harness.flow.attempt_login(&TestFixtures::login_form()).await;
//!     assert_single_notification(&harness.notifier, "Login successful!");
//! }
//! ```

pub mod assertions;
pub mod fixtures;
pub mod mock;

// Re-export commonly used items for convenience
pub use assertions::*;
pub use fixtures::{FlowHarness, MockAuthFlow, TestFixtures};
pub use mock::{MockIdentityProvider, MockSessionEndpoint, RecordingNavigator, RecordingNotifier};

/// Common test constants
pub mod constants {
    /// Default test email address
    pub const TEST_EMAIL: &str = "a@example.com";

    /// Default test password
    pub const TEST_PASSWORD: &str = "secret123";

    /// Default identity provider API key
    pub const TEST_API_KEY: &str = "test-api-key";
}
