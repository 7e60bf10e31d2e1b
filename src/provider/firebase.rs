//! Firebase Identity Toolkit provider
//!
//! Talks to the same REST endpoints the Firebase web SDK uses for
//! email/password accounts:
//!
//! - `POST /v1/accounts:signInWithPassword` on the Identity Toolkit host
//! - `POST /v1/accounts:signUp` on the Identity Toolkit host
//! - `POST /v1/token` on the Secure Token host, to refresh an ID token
//!
//! Error messages follow the SDK's wording (`Firebase: Error (auth/...).`) so
//! users see the same text the browser flow would have shown them.

use crate::authentication::{IdentityProvider, SessionHandle};
use crate::models::{Credential, IdentityToken};
use crate::provider::{ProviderError, ProviderErrorKind};
use crate::settings::ProviderSettings;
use crate::utils::logging::mask_email;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};

pub const DEFAULT_IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com";
pub const DEFAULT_SECURE_TOKEN_URL: &str = "https://securetoken.googleapis.com";

const SIGN_IN_PATH: &str = "/v1/accounts:signInWithPassword";
const SIGN_UP_PATH: &str = "/v1/accounts:signUp";
const REFRESH_PATH: &str = "/v1/token";

/// Cached tokens closer than this to expiry are refreshed before use
const REFRESH_MARGIN_SECONDS: i64 = 300;
const DEFAULT_TOKEN_LIFETIME_SECONDS: i64 = 3600;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PasswordResponse {
    id_token: String,
    refresh_token: String,
    expires_in: String,
    local_id: String,
    #[serde(default)]
    email: Option<String>,
}

// The Secure Token API answers in snake_case, unlike Identity Toolkit.
#[derive(Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Identity provider backed by the Firebase Identity Toolkit REST API
#[derive(Clone)]
pub struct FirebaseProvider {
    client: reqwest::Client,
    api_key: String,
    identity_toolkit_url: String,
    secure_token_url: String,
}

impl FirebaseProvider {
    /// Create a provider that talks to the public Google endpoints
    #[must_use]
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            identity_toolkit_url: DEFAULT_IDENTITY_TOOLKIT_URL.to_string(),
            secure_token_url: DEFAULT_SECURE_TOKEN_URL.to_string(),
        }
    }

    /// Create a provider from configuration, resolving the API key from the
    /// environment when configured to
    #[must_use]
    pub fn from_settings(settings: &ProviderSettings, client: reqwest::Client) -> Self {
        Self::new(client, settings.get_api_key())
            .with_identity_toolkit_url(&settings.identity_toolkit_url)
            .with_secure_token_url(&settings.secure_token_url)
    }

    /// Override the Identity Toolkit host (emulator or test server)
    #[must_use]
    pub fn with_identity_toolkit_url(mut self, url: &str) -> Self {
        self.identity_toolkit_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Override the Secure Token host (emulator or test server)
    #[must_use]
    pub fn with_secure_token_url(mut self, url: &str) -> Self {
        self.secure_token_url = url.trim_end_matches('/').to_string();
        self
    }

    async fn password_request(
        &self,
        path: &str,
        credential: &Credential,
    ) -> Result<FirebaseSession, ProviderError> {
        let response = self
            .client
            .post(format!("{}{path}", self.identity_toolkit_url))
            .query(&[("key", self.api_key.as_str())])
            .json(&PasswordRequest {
                email: &credential.email,
                password: &credential.password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(|e| network_error(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| network_error(&e))?;
        if !status.is_success() {
            log::debug!("Identity Toolkit {path} failed with status {status}");
            return Err(error_from_body(&body));
        }

        let parsed: PasswordResponse = serde_json::from_str(&body).map_err(|e| {
            log::debug!("Unreadable Identity Toolkit response: {e}");
            sdk_error(ProviderErrorKind::Internal, "internal-error")
        })?;

        log::debug!(
            "Firebase accepted {} as uid {}",
            mask_email(parsed.email.as_deref().unwrap_or(&credential.email)),
            parsed.local_id
        );
        Ok(FirebaseSession {
            provider: self.clone(),
            uid: parsed.local_id,
            state: Mutex::new(TokenState {
                id_token: parsed.id_token,
                refresh_token: parsed.refresh_token,
                expires_at: expiry_from(&parsed.expires_in),
            }),
        })
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenState, ProviderError> {
        let response = self
            .client
            .post(format!("{}{REFRESH_PATH}", self.secure_token_url))
            .query(&[("key", self.api_key.as_str())])
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .send()
            .await
            .map_err(|e| network_error(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| network_error(&e))?;
        if !status.is_success() {
            let err = error_from_body(&body);
            if err.kind() == ProviderErrorKind::Rejected {
                return Err(ProviderError::new(
                    ProviderErrorKind::SessionExpired,
                    err.code(),
                    err.message(),
                ));
            }
            return Err(err);
        }

        let parsed: RefreshResponse = serde_json::from_str(&body).map_err(|e| {
            log::debug!("Unreadable Secure Token response: {e}");
            sdk_error(ProviderErrorKind::Internal, "internal-error")
        })?;

        Ok(TokenState {
            id_token: parsed.id_token,
            refresh_token: parsed.refresh_token,
            expires_at: expiry_from(&parsed.expires_in),
        })
    }
}

#[async_trait]
impl IdentityProvider for FirebaseProvider {
    type Session = FirebaseSession;

    async fn authenticate_with_password(
        &self,
        credential: &Credential,
    ) -> Result<FirebaseSession, ProviderError> {
        self.password_request(SIGN_IN_PATH, credential).await
    }

    async fn create_account_with_password(
        &self,
        credential: &Credential,
    ) -> Result<FirebaseSession, ProviderError> {
        self.password_request(SIGN_UP_PATH, credential).await
    }

    fn provider_name(&self) -> &'static str {
        "firebase"
    }
}

struct TokenState {
    id_token: String,
    refresh_token: String,
    expires_at: DateTime<Utc>,
}

/// Signed-in Firebase user, able to hand out a current ID token
pub struct FirebaseSession {
    provider: FirebaseProvider,
    uid: String,
    state: Mutex<TokenState>,
}

#[async_trait]
impl SessionHandle for FirebaseSession {
    async fn identity_token(&self) -> Result<IdentityToken, ProviderError> {
        let refresh_token = {
            let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if state.expires_at - Utc::now() > TimeDelta::seconds(REFRESH_MARGIN_SECONDS) {
                return Ok(IdentityToken::new(state.id_token.clone()));
            }
            state.refresh_token.clone()
        };

        log::debug!("ID token for {} is near expiry, refreshing", self.uid);
        let refreshed = self.provider.refresh(&refresh_token).await?;
        let token = IdentityToken::new(refreshed.id_token.clone());
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = refreshed;
        Ok(token)
    }
}

fn expiry_from(expires_in: &str) -> DateTime<Utc> {
    let now = Utc::now();
    expires_in
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(TimeDelta::try_seconds)
        .and_then(|lifetime| now.checked_add_signed(lifetime))
        .unwrap_or_else(|| {
            log::warn!("Unexpected expiresIn value {expires_in:?}, assuming one hour");
            now + TimeDelta::seconds(DEFAULT_TOKEN_LIFETIME_SECONDS)
        })
}

fn network_error(err: &reqwest::Error) -> ProviderError {
    log::debug!("Identity provider request failed: {err}");
    sdk_error(ProviderErrorKind::Network, "network-request-failed")
}

fn sdk_error(kind: ProviderErrorKind, sdk_code: &str) -> ProviderError {
    let code = format!("auth/{sdk_code}");
    let message = format!("Firebase: Error ({code}).");
    ProviderError::new(kind, code, message)
}

/// Build a provider error from an Identity Toolkit error body such as
/// `{"error": {"code": 400, "message": "WEAK_PASSWORD : Password should be at least 6 characters"}}`
fn error_from_body(body: &str) -> ProviderError {
    let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) else {
        return sdk_error(ProviderErrorKind::Internal, "internal-error");
    };

    let (server_code, detail) = match envelope.error.message.split_once(" : ") {
        Some((code, detail)) => (code.trim(), Some(detail.trim())),
        None => (envelope.error.message.trim(), None),
    };

    let code = format!("auth/{}", sdk_code(server_code));
    let message = match detail {
        Some(detail) if !detail.is_empty() => format!("Firebase: {detail} ({code})."),
        _ => format!("Firebase: Error ({code})."),
    };
    ProviderError::rejected(code, message)
}

/// Translate a server error code into the code the web SDK reports
fn sdk_code(server_code: &str) -> String {
    let mapped = match server_code {
        "EMAIL_NOT_FOUND" => "user-not-found",
        "INVALID_PASSWORD" => "wrong-password",
        "INVALID_LOGIN_CREDENTIALS" => "invalid-credential",
        "USER_DISABLED" => "user-disabled",
        "EMAIL_EXISTS" => "email-already-in-use",
        "WEAK_PASSWORD" => "weak-password",
        "INVALID_EMAIL" => "invalid-email",
        "MISSING_PASSWORD" => "missing-password",
        "MISSING_EMAIL" => "missing-email",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "too-many-requests",
        "OPERATION_NOT_ALLOWED" => "operation-not-allowed",
        "TOKEN_EXPIRED" | "USER_NOT_FOUND" => "user-token-expired",
        "INVALID_REFRESH_TOKEN" => "invalid-user-token",
        "INVALID_API_KEY" | "API_KEY_INVALID" => "invalid-api-key",
        other => return other.to_ascii_lowercase().replace('_', "-"),
    };
    mapped.to_string()
}
