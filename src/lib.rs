#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// Version of the loginbridge application
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod authentication;
pub mod cli;
pub mod handlers;
pub mod models;
pub mod provider;
pub mod session;
pub mod settings;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

/// Re-export commonly used items
pub use authentication::{
    AuthenticationServiceFactory, IdentityProvider, Navigator, Notifier, SessionEndpoint,
    SessionHandle,
};
pub use handlers::{Action, AuthFlow, HandlerOutcome};
pub use models::{Credential, FieldMap, Form, HandoffError, IdentityToken, SessionOutcome};
pub use provider::{FirebaseProvider, ProviderError};
pub use session::{HttpNavigator, HttpSessionBackend, SessionError};
pub use settings::LoginBridgeSettings;
