use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::provider::firebase::{DEFAULT_IDENTITY_TOOLKIT_URL, DEFAULT_SECURE_TOKEN_URL};
use crate::session::{DEFAULT_DASHBOARD_PATH, DEFAULT_SESSION_LOGIN_PATH};

/// Environment variable naming a directory that holds an overriding `Settings.toml`
pub const SECRETS_DIR_ENV: &str = "LOGINBRIDGE_SECRETS_DIR";
const SETTINGS_FILE: &str = "Settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: basic_toml::Error,
    },

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoginBridgeSettings {
    pub provider: ProviderSettings,
    pub backend: BackendSettings,
    pub logging: LoggingSettings,
    /// Files the settings were read from, lowest priority first
    #[serde(skip)]
    sources: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Direct value (can be overridden by the variable named in `api_key_env`)
    pub api_key: String,
    /// Environment variable name for the API key override
    pub api_key_env: Option<String>,
    pub identity_toolkit_url: String,
    pub secure_token_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    pub base_url: String,
    pub session_login_path: String,
    pub dashboard_path: String,
    /// Per-request timeout in seconds. If 0, requests are never timed out.
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_key_env: Some("FIREBASE_API_KEY".to_string()),
            identity_toolkit_url: DEFAULT_IDENTITY_TOOLKIT_URL.to_string(),
            secure_token_url: DEFAULT_SECURE_TOKEN_URL.to_string(),
        }
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            session_login_path: DEFAULT_SESSION_LOGIN_PATH.to_string(),
            dashboard_path: DEFAULT_DASHBOARD_PATH.to_string(),
            request_timeout_secs: 0, // Disabled by default
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoginBridgeSettings {
    /// Load settings from configuration files and environment variables
    ///
    /// The secrets directory is taken from `LOGINBRIDGE_SECRETS_DIR`.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file exists but cannot be read or parsed
    pub fn load() -> Result<Self, SettingsError> {
        let secrets_dir = std::env::var(SECRETS_DIR_ENV).ok().map(PathBuf::from);
        Self::load_from(secrets_dir.as_deref())
    }

    /// Load settings with an explicit secrets directory
    ///
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables (including those from `.env`)
    /// 2. Settings.toml in `secrets_dir` (if specified and exists)
    /// 3. Settings.toml in current directory (if exists)
    /// 4. Default settings
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file exists but cannot be read or parsed
    pub fn load_from(secrets_dir: Option<&Path>) -> Result<Self, SettingsError> {
        let env_file = dotenvy::dotenv().ok();

        let mut settings = Self::load_base_settings(secrets_dir)?;
        settings.sources.extend(env_file);
        Self::apply_env_overrides(&mut settings);

        Ok(settings)
    }

    /// Parse settings from TOML text, filling missing keys with defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for these settings
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        basic_toml::from_str(content).map_err(|source| SettingsError::Parse {
            path: "<inline>".to_string(),
            source,
        })
    }

    /// Initialize `env_logger` using the configured level as the default filter
    ///
    /// # Errors
    ///
    /// Returns an error if a logger has already been installed
    pub fn init_logging(&self) -> Result<(), SettingsError> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.logging.level.as_str()),
        )
        .try_init()?;

        if self.sources.is_empty() {
            log::debug!("No Settings.toml or .env found, using defaults and environment");
        }
        for source in &self.sources {
            log::debug!("Settings loaded from {}", source.display());
        }
        Ok(())
    }

    /// Files the settings were read from, lowest priority first
    #[must_use]
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Check the settings needed to run a handoff
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No API key is configured
    /// - The backend base URL is not an absolute http(s) URL
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.provider.get_api_key().trim().is_empty() {
            let hint = self
                .provider
                .api_key_env
                .as_deref()
                .unwrap_or("provider.api_key");
            return Err(SettingsError::Invalid(format!(
                "identity provider API key is missing (set {hint})"
            )));
        }

        match url::Url::parse(&self.backend.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            Ok(url) => Err(SettingsError::Invalid(format!(
                "backend base_url must use http or https, got {}",
                url.scheme()
            ))),
            Err(e) => Err(SettingsError::Invalid(format!(
                "backend base_url {:?} is not a valid URL: {e}",
                self.backend.base_url
            ))),
        }
    }

    fn load_base_settings(secrets_dir: Option<&Path>) -> Result<Self, SettingsError> {
        // 1. Start with default settings
        let mut settings = Self::default();

        // 2. Settings.toml in current directory (lower priority)
        let default_config_path = PathBuf::from(SETTINGS_FILE);
        if default_config_path.exists() {
            settings = Self::read_settings_file(&default_config_path)?;
            settings.sources.push(default_config_path);
        }

        // 3. Settings.toml in the secrets directory replaces it (higher priority)
        if let Some(secrets_dir) = secrets_dir {
            let secrets_path = secrets_dir.join(SETTINGS_FILE);
            if secrets_path.exists() {
                let sources = std::mem::take(&mut settings.sources);
                settings = Self::read_settings_file(&secrets_path)?;
                settings.sources = sources;
                settings.sources.push(secrets_path);
            }
        }

        Ok(settings)
    }

    fn read_settings_file(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        basic_toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Apply environment variable overrides to settings
    pub fn apply_env_overrides(settings: &mut Self) {
        Self::apply_provider_env_overrides(&mut settings.provider);
        Self::apply_backend_env_overrides(&mut settings.backend);
        Self::apply_logging_env_overrides(&mut settings.logging);
    }

    /// Apply environment overrides for provider settings
    fn apply_provider_env_overrides(provider_settings: &mut ProviderSettings) {
        if let Ok(url) = std::env::var("LOGINBRIDGE_IDENTITY_TOOLKIT_URL") {
            provider_settings.identity_toolkit_url = url;
        }
        if let Ok(url) = std::env::var("LOGINBRIDGE_SECURE_TOKEN_URL") {
            provider_settings.secure_token_url = url;
        }
    }

    /// Apply environment overrides for backend settings
    fn apply_backend_env_overrides(backend_settings: &mut BackendSettings) {
        if let Ok(base_url) = std::env::var("LOGINBRIDGE_BACKEND_URL") {
            backend_settings.base_url = base_url;
        }
        if let Ok(path) = std::env::var("LOGINBRIDGE_SESSION_LOGIN_PATH") {
            backend_settings.session_login_path = path;
        }
        if let Ok(path) = std::env::var("LOGINBRIDGE_DASHBOARD_PATH") {
            backend_settings.dashboard_path = path;
        }
        Self::apply_numeric_env_override(
            "LOGINBRIDGE_REQUEST_TIMEOUT_SECS",
            &mut backend_settings.request_timeout_secs,
        );
    }

    /// Helper function to apply numeric environment variable overrides
    fn apply_numeric_env_override(env_var: &str, target: &mut u64) {
        if let Ok(value_str) = std::env::var(env_var) {
            if let Ok(value) = value_str.parse::<u64>() {
                *target = value;
            }
        }
    }

    /// Apply environment overrides for logging settings
    fn apply_logging_env_overrides(logging_settings: &mut LoggingSettings) {
        if let Ok(log_level) = std::env::var("RUST_LOG") {
            logging_settings.level = log_level;
        }
    }

    // Load environment variables from a `.env` file, if present
}

impl ProviderSettings {
    /// Get the API key, checking the environment variable first, then falling back to the direct value
    #[must_use]
    pub fn get_api_key(&self) -> String {
        if let Some(env_var) = &self.api_key_env {
            if let Ok(value) = std::env::var(env_var) {
                if !value.is_empty() {
                    return value;
                }
            }
        }
        self.api_key.clone()
    }
}
