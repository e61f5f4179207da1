//! SDK configuration
//!
//! This module provides configuration options for the SDK client.

use crate::error::{SdkError, SdkResult};
use std::fmt;
use std::time::Duration;

/// Client configuration
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the Unleash API, e.g. `https://unleash.example.com/api/`
    pub base_url: String,

    /// Value sent verbatim in the `Authorization` header
    pub auth_token: String,

    /// User agent string
    pub user_agent: String,

    /// Request timeout applied to the default transport
    pub timeout: Option<Duration>,

    /// Enable request/response body logging
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            auth_token: String::new(),
            user_agent: crate::USER_AGENT.to_string(),
            timeout: None,
            debug: false,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("auth_token", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("debug", &self.debug)
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration for the given API URL and token
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: auth_token.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// Supported environment variables:
    /// - `UNLEASH_API_URL`: Base URL for the API
    /// - `UNLEASH_AUTH_TOKEN`: Token sent in the `Authorization` header
    /// - `UNLEASH_TIMEOUT`: Request timeout in seconds
    /// - `UNLEASH_DEBUG`: Enable debug logging
    pub fn from_env() -> SdkResult<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("UNLEASH_API_URL") {
            config.base_url = url;
        }

        if let Ok(token) = std::env::var("UNLEASH_AUTH_TOKEN") {
            config.auth_token = token;
        }

        if let Ok(timeout) = std::env::var("UNLEASH_TIMEOUT") {
            let secs: u64 = timeout
                .parse()
                .map_err(|_| SdkError::config(format!("Invalid timeout value: {}", timeout)))?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        if std::env::var("UNLEASH_DEBUG").is_ok() {
            config.debug = true;
        }

        Ok(config)
    }

    /// Set the base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the auth token
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = token.into();
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> SdkResult<()> {
        if self.base_url.is_empty() {
            return Err(SdkError::config("api_url cannot be empty"));
        }

        if self.auth_token.is_empty() {
            return Err(SdkError::config("auth_token cannot be empty"));
        }

        self.api_url().map(|_| ())
    }

    /// Parse the base URL, normalized to end with a path separator
    pub fn api_url(&self) -> SdkResult<url::Url> {
        let mut raw = self.base_url.clone();
        if !raw.ends_with('/') {
            raw.push('/');
        }

        let url = url::Url::parse(&raw)
            .map_err(|e| SdkError::config(format!("Invalid base URL: {}", e)))?;
        if url.cannot_be_a_base() {
            return Err(SdkError::config(format!(
                "Base URL cannot carry a path: {}",
                self.base_url
            )));
        }

        Ok(url)
    }
}
