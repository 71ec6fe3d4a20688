//! Oracle service configuration.

use std::time::Duration;

/// Environment variable holding the service URL.
pub const ENV_URL: &str = "TWENTY_ORACLE_URL";
/// Environment variable holding the model name.
pub const ENV_MODEL: &str = "TWENTY_ORACLE_MODEL";
/// Environment variable holding the bearer key.
pub const ENV_KEY: &str = "TWENTY_ORACLE_KEY";
/// Environment variable holding the timeout in seconds.
pub const ENV_TIMEOUT: &str = "TWENTY_ORACLE_TIMEOUT";

/// Settings for the chat-completions oracle.
#[derive(Debug, Clone, PartialEq)]
pub struct OracleConfig {
    /// Service URL: a base such as `http://localhost:1234` or the full
    /// chat-completions path. `None` disables the oracle.
    pub endpoint: Option<String>,
    /// Model name sent with each request.
    pub model: String,
    /// Optional bearer token.
    pub api_key: Option<String>,
    /// Sampling temperature.
    pub temperature: f32,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            model: "local-model".to_string(),
            api_key: None,
            temperature: 0.2,
            timeout: Duration::from_secs(20),
        }
    }
}

impl OracleConfig {
    /// Read settings from `TWENTY_ORACLE_*` environment variables, falling
    /// back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults. Blank
    /// values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();
        if let Some(url) = get(ENV_URL) {
            config = config.with_endpoint(url);
        }
        if let Some(model) = get(ENV_MODEL) {
            config = config.with_model(model);
        }
        if let Some(key) = get(ENV_KEY) {
            config = config.with_api_key(key);
        }
        if let Some(raw) = get(ENV_TIMEOUT) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => config = config.with_timeout(Duration::from_secs(secs)),
                Err(_) => log::warn!("ignoring {ENV_TIMEOUT}={raw}: not a number of seconds"),
            }
        }
        config
    }

    /// Set the service URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into().trim().to_string());
        self
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the bearer token.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the temperature (clamped to 0.0..=2.0).
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 2.0);
        self
    }

    /// Set the request timeout (at least one second).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout.max(Duration::from_secs(1));
        self
    }

    /// Whether an endpoint is set.
    pub fn is_configured(&self) -> bool {
        self.endpoint.as_deref().is_some_and(|e| !e.is_empty())
    }

    /// The full chat-completions URL, if configured.
    pub fn completions_url(&self) -> Option<String> {
        let base = self.endpoint.as_deref()?.trim_end_matches('/');
        if base.is_empty() {
            return None;
        }
        Some(if base.ends_with("/chat/completions") {
            base.to_string()
        } else if base.ends_with("/v1") {
            format!("{base}/chat/completions")
        } else {
            format!("{base}/v1/chat/completions")
        })
    }
}
