//! CollectionCaller - initiate and inspect collections calls
//!
//! The single place where a [`CallRequest`] becomes a platform call. Both the
//! HTTP service and the CLI go through here.

use std::sync::Arc;

use crate::domain::entities::{
    AssistantOverrides, CallRequest, CallResult, CallStatusReport, CollectionPolicy,
    CreateCallRequest, VariableMap,
};
use crate::domain::errors::DomainError;
use crate::ports::CallGateway;

use super::{build_variables, call_metadata, extract_call_result, extract_status_report};

/// Platform-side identifiers used for every call
#[derive(Debug, Clone, Default)]
pub struct CallSettings {
    pub assistant_id: String,
    pub phone_number_id: Option<String>,
    /// Webhook URL for call events; omitted from the payload when `None`
    pub server_url: Option<String>,
}

impl CallSettings {
    pub fn new(assistant_id: impl Into<String>) -> Self {
        Self {
            assistant_id: assistant_id.into(),
            phone_number_id: None,
            server_url: None,
        }
    }

    pub fn with_phone_number_id(mut self, phone_number_id: Option<String>) -> Self {
        self.phone_number_id = phone_number_id;
        self
    }

    pub fn with_server_url(mut self, server_url: Option<String>) -> Self {
        self.server_url = server_url;
        self
    }
}

/// Outcome of a successful initiation
#[derive(Debug, Clone)]
pub struct InitiatedCall {
    pub request: CallRequest,
    pub variables: VariableMap,
    pub result: CallResult,
}

impl InitiatedCall {
    /// Invoice amount as shown to the assistant
    pub fn amount(&self) -> &str {
        &self.variables.formatted_amount
    }
}

/// Ties the variable builder, the gateway and the response adapter together
pub struct CollectionCaller<G: ?Sized> {
    gateway: Arc<G>,
    settings: CallSettings,
}

impl<G: CallGateway + ?Sized> CollectionCaller<G> {
    pub fn new(gateway: Arc<G>, settings: CallSettings) -> Self {
        Self { gateway, settings }
    }

    /// Build the create-call payload without sending it
    pub fn build_payload(
        &self,
        request: &CallRequest,
        policy: &CollectionPolicy,
    ) -> (CreateCallRequest, VariableMap) {
        let variables = build_variables(request, policy);

        let mut overrides =
            AssistantOverrides::new(variables.clone()).with_metadata(call_metadata(request));
        if let Some(url) = &self.settings.server_url {
            overrides = overrides.with_server_url(url.clone());
        }

        let payload = CreateCallRequest::new(&self.settings.assistant_id, &request.phone_number)
            .with_phone_number_id(self.settings.phone_number_id.clone())
            .with_overrides(overrides);

        (payload, variables)
    }

    /// Place a collections call carrying the full variable set
    pub async fn initiate(
        &self,
        request: CallRequest,
        policy: &CollectionPolicy,
    ) -> Result<InitiatedCall, DomainError> {
        self.require_assistant()?;

        let (payload, variables) = self.build_payload(&request, policy);

        tracing::info!(
            phone_number = %request.phone_number,
            invoice_no = %request.invoice_no,
            amount = %variables.formatted_amount,
            "Initiating collections call"
        );

        let raw = self.gateway.create_call(&payload).await?;
        let result = extract_call_result(raw);

        tracing::info!(
            call_id = result.call_id.as_deref().unwrap_or("-"),
            status = result.status.as_deref().unwrap_or("-"),
            "Call created"
        );

        Ok(InitiatedCall {
            request,
            variables,
            result,
        })
    }

    /// Place a call with no assistant overrides
    pub async fn place_plain_call(&self, customer_number: &str) -> Result<CallResult, DomainError> {
        self.require_assistant()?;

        let payload = CreateCallRequest::new(&self.settings.assistant_id, customer_number)
            .with_phone_number_id(self.settings.phone_number_id.clone());

        tracing::info!(phone_number = %customer_number, "Placing call");

        let raw = self.gateway.create_call(&payload).await?;
        Ok(extract_call_result(raw))
    }

    /// Look up a call's current status
    pub async fn status(&self, call_id: &str) -> Result<CallStatusReport, DomainError> {
        tracing::debug!(call_id = %call_id, "Fetching call status");

        let raw = self.gateway.get_call(call_id).await?;
        Ok(extract_status_report(call_id, &raw))
    }

    fn require_assistant(&self) -> Result<(), DomainError> {
        if self.settings.assistant_id.trim().is_empty() {
            return Err(DomainError::missing_credential("assistant id (VAPI_ASSISTANT_ID)"));
        }
        Ok(())
    }
}
