//! HTTP client construction

use std::time::Duration;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("loginbridge/", env!("CARGO_PKG_VERSION"));

/// Build a client for provider or backend calls
///
/// `timeout_secs == 0` leaves requests unbounded. `cookies` enables a cookie
/// store so a session cookie set by one response is sent on later requests.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialised.
pub fn build_http_client(timeout_secs: u64, cookies: bool) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .cookie_store(cookies);
    if timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }
    builder.build()
}
