//! Startup configuration read from the environment.
//!
//! An optional `.env` file in the working directory is loaded first; real
//! environment variables take precedence over it. The API key is required
//! and the process must not start without it. The model is a fixed
//! constant.

use secrecy::SecretString;

use parley_types::error::ConfigError;

/// Environment variable holding the provider API key.
pub const API_KEY_VAR: &str = "LLM_API_KEY";

/// Optional override for the provider base URL (proxies, local mocks).
pub const BASE_URL_VAR: &str = "PARLEY_GEMINI_BASE_URL";

/// Model every request is sent to.
pub const LLM_MODEL: &str = "gemini-2.0-flash-lite";

/// Resolved configuration for the service.
#[derive(Debug)]
pub struct ServiceConfig {
    pub api_key: SecretString,
    pub model: String,
    pub base_url: Option<String>,
}

impl ServiceConfig {
    /// Load `.env` (if present) and read configuration from the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey { var: API_KEY_VAR })?;

        let base_url = match lookup(BASE_URL_VAR) {
            None => None,
            Some(url) => {
                let url = url.trim().trim_end_matches('/').to_string();
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::InvalidValue {
                        var: BASE_URL_VAR,
                        reason: format!("expected an http(s) URL, got '{url}'"),
                    });
                }
                Some(url)
            }
        };

        Ok(Self {
            api_key: SecretString::from(api_key),
            model: LLM_MODEL.to_string(),
            base_url,
        })
    }
}
