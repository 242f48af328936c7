//! API configuration.

use std::time::Duration;
use tracing::warn;

/// Environment variable holding the bearer token.
pub const API_KEY_ENV: &str = "BASISDATA_API_KEY";

/// Environment variable overriding the API base URL.
pub const API_BASE_ENV: &str = "BASISDATA_API_BASE";

/// Environment variable overriding the request timeout (seconds).
pub const TIMEOUT_ENV: &str = "BASISDATA_TIMEOUT_SECS";

/// Upstream API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.basisdata.dev";

/// Request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Returned by every tool when no API key is configured.
pub const MISSING_API_KEY_MESSAGE: &str =
    "BASISDATA_API_KEY not set. Get a free key at https://basisdata.dev";

/// Immutable configuration for talking to the BasisData API.
///
/// Built once at startup and shared with the client. A missing key is
/// not an error here: every call reports it instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL, without trailing slash
    pub base_url: String,

    /// Bearer token, `None` when unset or blank
    pub api_key: Option<String>,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default().with_api_key(lookup(API_KEY_ENV));

        if let Some(base) = lookup(API_BASE_ENV) {
            config = config.with_base_url(base);
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!("Ignoring invalid {}={:?}", TIMEOUT_ENV, raw),
            }
        }

        config
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            self.base_url = trimmed.to_string();
        }
        self
    }

    /// Override the API key. Blank keys count as absent.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether a credential is available.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}
