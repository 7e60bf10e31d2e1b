//! Post-login navigation over HTTP
//!
//! The terminal counterpart of a full-page navigation: request the target
//! page with the same client that received the session cookie, so the
//! backend sees an authenticated request.

use crate::authentication::Navigator;
use crate::session::backend::join_url;
use async_trait::async_trait;

pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard";

/// Navigator that fetches the destination page from the backend
#[derive(Clone)]
pub struct HttpNavigator {
    client: reqwest::Client,
    base_url: String,
}

impl HttpNavigator {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Navigator for HttpNavigator {
    async fn navigate(&self, path: &str) {
        let url = join_url(&self.base_url, path);
        log::info!("➡️  Navigating to {url}");

        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                log::info!("✅ {url} answered {}", response.status());
            }
            Ok(response) => {
                log::warn!("⚠️  {url} answered {}", response.status());
            }
            Err(e) => {
                log::warn!("❌ Navigation to {url} failed: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_navigation_presents_session_cookie() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sessionLogin"))
            .respond_with(
                ResponseTemplate::new(200).insert_header("set-cookie", "session=abc123; Path=/"),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/dashboard"))
            .and(header("cookie", "session=abc123"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap();
        client
            .post(format!("{}/sessionLogin", server.uri()))
            .send()
            .await
            .unwrap();

        HttpNavigator::new(client, &server.uri())
            .navigate(DEFAULT_DASHBOARD_PATH)
            .await;
    }
}
