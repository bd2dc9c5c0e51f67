//! Call envelopes - what goes to the voice platform and what comes back

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::VariableMap;

/// Server messages requested when a webhook URL is configured
pub const SERVER_MESSAGES: [&str; 4] = [
    "transcript",
    "status-update",
    "speech-update",
    "end-of-call-report",
];

/// Destination of the outbound call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub number: String,
}

/// Webhook endpoint the platform reports call events to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEndpoint {
    pub url: String,
}

/// Per-call assistant overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantOverrides {
    pub variable_values: VariableMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerEndpoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub server_messages: Vec<String>,
}

impl AssistantOverrides {
    pub fn new(variable_values: VariableMap) -> Self {
        Self {
            variable_values,
            metadata: None,
            server: None,
            server_messages: Vec::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Option<Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Route call events to `url` and subscribe to the standard messages
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server = Some(ServerEndpoint { url: url.into() });
        self.server_messages = SERVER_MESSAGES.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// Create-call payload (POST body)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCallRequest {
    pub assistant_id: String,
    pub customer: Customer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant_overrides: Option<AssistantOverrides>,
}

impl CreateCallRequest {
    pub fn new(assistant_id: impl Into<String>, customer_number: impl Into<String>) -> Self {
        Self {
            assistant_id: assistant_id.into(),
            customer: Customer {
                number: customer_number.into(),
            },
            phone_number_id: None,
            assistant_overrides: None,
        }
    }

    pub fn with_phone_number_id(mut self, phone_number_id: Option<String>) -> Self {
        self.phone_number_id = phone_number_id;
        self
    }

    pub fn with_overrides(mut self, overrides: AssistantOverrides) -> Self {
        self.assistant_overrides = Some(overrides);
        self
    }
}

/// Normalized create-call result
#[derive(Debug, Clone, PartialEq)]
pub struct CallResult {
    pub call_id: Option<String>,
    pub status: Option<String>,
    /// Platform response, untouched
    pub raw: Value,
}

/// Normalized call-status lookup
///
/// Timestamps, duration and transcript are whatever the platform sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallStatusReport {
    pub call_id: String,
    pub status: Option<String>,
    pub started_at: Value,
    pub ended_at: Value,
    pub duration: Value,
    pub transcript: Value,
}
