//! HTTP client for the backend `/sessionLogin` endpoint

use crate::authentication::SessionEndpoint;
use crate::models::{IdentityToken, SessionOutcome};
use crate::session::SessionError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SESSION_LOGIN_PATH: &str = "/sessionLogin";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionLoginRequest<'a> {
    id_token: &'a IdentityToken,
}

#[derive(Deserialize)]
struct SessionLoginError {
    error: String,
}

/// Posts identity tokens to the backend and reports what it said
///
/// The client should carry a cookie store so the session cookie is presented
/// on later requests made with the same client.
#[derive(Clone)]
pub struct HttpSessionBackend {
    client: reqwest::Client,
    login_url: String,
}

impl HttpSessionBackend {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: &str, session_login_path: &str) -> Self {
        Self {
            client,
            login_url: join_url(base_url, session_login_path),
        }
    }

    #[must_use]
    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

#[async_trait]
impl SessionEndpoint for HttpSessionBackend {
    async fn establish(&self, token: &IdentityToken) -> Result<SessionOutcome, SessionError> {
        let response = self
            .client
            .post(&self.login_url)
            .json(&SessionLoginRequest { id_token: token })
            .send()
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(SessionOutcome::Established);
        }

        let body = response
            .text()
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))?;

        match serde_json::from_str::<SessionLoginError>(&body) {
            Ok(rejection) => Ok(SessionOutcome::Rejected {
                status: status.as_u16(),
                message: rejection.error,
            }),
            Err(e) => {
                log::debug!("Session endpoint returned {status} with unreadable body: {e}");
                Err(SessionError::MalformedErrorBody {
                    status: status.as_u16(),
                })
            }
        }
    }
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_success_establishes_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sessionLogin"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"idToken": "token-abc"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .expect(1)
            .mount(&server)
            .await;

        let backend =
            HttpSessionBackend::new(reqwest::Client::new(), &server.uri(), DEFAULT_SESSION_LOGIN_PATH);
        let outcome = backend
            .establish(&IdentityToken::new("token-abc"))
            .await
            .unwrap();

        assert_eq!(outcome, SessionOutcome::Established);
    }

    #[tokio::test]
    async fn test_success_body_is_not_inspected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sessionLogin"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let backend = HttpSessionBackend::new(reqwest::Client::new(), &server.uri(), "sessionLogin");
        let outcome = backend.establish(&IdentityToken::new("t")).await.unwrap();
        assert!(outcome.is_established());
    }

    #[tokio::test]
    async fn test_rejection_carries_backend_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sessionLogin"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"error": "invalid token"})),
            )
            .mount(&server)
            .await;

        let backend =
            HttpSessionBackend::new(reqwest::Client::new(), &server.uri(), DEFAULT_SESSION_LOGIN_PATH);
        let outcome = backend.establish(&IdentityToken::new("t")).await.unwrap();

        assert_eq!(
            outcome,
            SessionOutcome::Rejected {
                status: 401,
                message: "invalid token".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_html_error_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sessionLogin"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<h1>Bad Gateway</h1>"))
            .mount(&server)
            .await;

        let backend =
            HttpSessionBackend::new(reqwest::Client::new(), &server.uri(), DEFAULT_SESSION_LOGIN_PATH);
        let err = backend.establish(&IdentityToken::new("t")).await.unwrap_err();

        assert_eq!(err, SessionError::MalformedErrorBody { status: 502 });
    }

    #[tokio::test]
    async fn test_json_without_error_field_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sessionLogin"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "nope"})))
            .mount(&server)
            .await;

        let backend =
            HttpSessionBackend::new(reqwest::Client::new(), &server.uri(), DEFAULT_SESSION_LOGIN_PATH);
        let err = backend.establish(&IdentityToken::new("t")).await.unwrap_err();

        assert_eq!(err, SessionError::MalformedErrorBody { status: 400 });
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let backend = HttpSessionBackend::new(
            reqwest::Client::new(),
            "http://127.0.0.1:1",
            DEFAULT_SESSION_LOGIN_PATH,
        );
        let err = backend.establish(&IdentityToken::new("t")).await.unwrap_err();
        assert!(matches!(err, SessionError::Transport(_)));
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:5000/", "/sessionLogin"),
            "http://localhost:5000/sessionLogin"
        );
        assert_eq!(
            join_url("http://localhost:5000/app", "dashboard"),
            "http://localhost:5000/app/dashboard"
        );
    }
}
