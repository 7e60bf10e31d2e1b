//! Identity provider implementations
//!
//! Providers implement [`crate::authentication::IdentityProvider`]. The only
//! concrete provider speaks the Firebase Identity Toolkit REST protocol.

pub mod errors;
pub mod firebase;

pub use errors::{ProviderError, ProviderErrorKind};
pub use firebase::{FirebaseProvider, FirebaseSession};
