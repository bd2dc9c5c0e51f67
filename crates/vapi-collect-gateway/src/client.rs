//! Vapi REST client
//!
//! One attempt per call, bearer auth, fixed timeout. Upstream failures are
//! reported verbatim.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde_json::Value;
use tracing::{debug, warn};

use vapi_collect::{CallGateway, CreateCallRequest, DomainError};

use crate::config::VapiConfig;

/// HTTP implementation of CallGateway
pub struct VapiGateway {
    client: Client,
    call_url: Url,
    api_key: Option<String>,
}

impl VapiGateway {
    /// Build the client. Fails on an unparsable endpoint URL.
    pub fn new(config: VapiConfig) -> Result<Self, DomainError> {
        let call_url = Url::parse(&config.api_url).map_err(|e| {
            DomainError::Config(format!("invalid Vapi API URL {:?}: {e}", config.api_url))
        })?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| DomainError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            call_url,
            api_key: config.api_key,
        })
    }

    /// URL of a single call (`<api_url>/<call_id>`)
    pub fn call_url(&self, call_id: &str) -> Result<Url, DomainError> {
        let mut url = self.call_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                DomainError::Config(format!("Vapi API URL {} cannot be a base", self.call_url))
            })?
            .pop_if_empty()
            .push(call_id);
        Ok(url)
    }

    fn api_key(&self) -> Result<&str, DomainError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| DomainError::missing_credential("API key (VAPI_API_KEY)"))
    }

    /// Turn an upstream response into JSON or a gateway error
    async fn read_json(response: Response) -> Result<Value, DomainError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Transport(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), body = %body, "Vapi returned an error");
            return Err(DomainError::Gateway {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body)
            .map_err(|e| DomainError::Serialization(format!("invalid JSON from Vapi: {e}")))
    }
}

fn transport_error(e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::Transport(format!("request timed out: {e}"))
    } else {
        DomainError::Transport(e.to_string())
    }
}

#[async_trait]
impl CallGateway for VapiGateway {
    async fn create_call(&self, request: &CreateCallRequest) -> Result<Value, DomainError> {
        let api_key = self.api_key()?;

        debug!(url = %self.call_url, customer = %request.customer.number, "POST create call");

        let response = self
            .client
            .post(self.call_url.clone())
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        Self::read_json(response).await
    }

    async fn get_call(&self, call_id: &str) -> Result<Value, DomainError> {
        let api_key = self.api_key()?;
        let url = self.call_url(call_id)?;

        debug!(url = %url, "GET call");

        let response = self
            .client
            .get(url)
            .bearer_auth(api_key)
            .send()
            .await
            .map_err(transport_error)?;

        Self::read_json(response).await
    }
}
