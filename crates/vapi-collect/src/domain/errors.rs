//! Domain Errors
//!
//! Error types for call initiation and status lookup.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// The inbound request body could not be understood
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The voice platform answered with a non-2xx status
    #[error("Vapi error {status}: {body}")]
    Gateway { status: u16, body: String },

    /// The voice platform could not be reached (connect failure, timeout)
    #[error("Vapi request failed: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DomainError {
    pub fn missing_credential<T: AsRef<str>>(name: T) -> Self {
        Self::MissingCredential(name.as_ref().to_string())
    }

    /// Whether the error was caused by the caller rather than the gateway
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}
