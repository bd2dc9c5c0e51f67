//! Server configuration, read once from the process environment

use std::env;

use vapi_collect::DEFAULT_TEST_PHONE_NUMBER;
use vapi_collect_gateway::VapiConfig;

pub const DEFAULT_PORT: u16 = 5001;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub assistant_id: Option<String>,
    pub phone_number_id: Option<String>,
    /// Webhook URL handed to the platform for call events
    pub server_url: Option<String>,
    /// Dialled when a request omits `phoneNumber`
    pub default_phone_number: String,
    pub vapi: VapiConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            assistant_id: None,
            phone_number_id: None,
            server_url: None,
            default_phone_number: DEFAULT_TEST_PHONE_NUMBER.to_string(),
            vapi: VapiConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read `PORT`, `VAPI_*` and `DEFAULT_PHONE_NUMBER`
    ///
    /// Credentials are never defaulted: a missing key or assistant id leaves
    /// the field empty and calls fail until it is set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            port: var("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            assistant_id: var("VAPI_ASSISTANT_ID"),
            phone_number_id: var("VAPI_PHONE_NUMBER_ID"),
            server_url: var("VAPI_SERVER_URL"),
            default_phone_number: var("DEFAULT_PHONE_NUMBER")
                .unwrap_or(defaults.default_phone_number),
            vapi: VapiConfig::from_lookup(&lookup),
        }
    }

    /// Names of required settings that are unset
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.vapi.api_key.is_none() {
            missing.push("VAPI_API_KEY");
        }
        if self.assistant_id.is_none() {
            missing.push("VAPI_ASSISTANT_ID");
        }
        missing
    }
}
