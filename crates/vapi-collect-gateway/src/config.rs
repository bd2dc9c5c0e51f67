//! Vapi gateway configuration

use std::env;
use std::fmt;
use std::time::Duration;

/// Call-creation endpoint used when `VAPI_API_URL` is unset
pub const DEFAULT_API_URL: &str = "https://api.vapi.ai/call";

/// Single-attempt timeout for every gateway request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Vapi gateway
#[derive(Clone)]
pub struct VapiConfig {
    /// Call endpoint; status lookups go to `<api_url>/<call_id>`
    pub api_url: String,
    /// Bearer token. Calls fail with a missing-credential error when absent.
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl VapiConfig {
    /// Create a configuration with just an API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Read `VAPI_API_URL`, `VAPI_API_KEY` and `VAPI_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_url: var("VAPI_API_URL").unwrap_or(defaults.api_url),
            api_key: var("VAPI_API_KEY"),
            timeout: var("VAPI_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            user_agent: defaults.user_agent,
        }
    }

    /// Set the call endpoint
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for VapiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("vapi-collect/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

// Keep the key out of logs
impl fmt::Debug for VapiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VapiConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
