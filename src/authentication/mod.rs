//! Authentication capability traits and the service factory
//!
//! [`traits`] defines the seams the handoff pipeline depends on; [`factory`]
//! wires concrete implementations of them from configuration.

pub mod factory;
pub mod traits;

pub use factory::{AuthenticationConfig, AuthenticationServiceFactory, HttpAuthFlow};
pub use traits::{IdentityProvider, Navigator, Notifier, SessionEndpoint, SessionHandle};
