//! Request/Response DTOs

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use vapi_collect::{CallStatusReport, InitiatedCall};

/// Body of `POST /api/initiate-call`
///
/// Every field is optional; missing ones fall back to defaults. The handler
/// reads the body leniently, so this type exists for the API docs.
#[derive(Debug, ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct InitiateCallBody {
    /// Destination; `+` is prepended when missing
    #[schema(example = "+17657469771")]
    pub phone_number: Option<String>,
    pub vendor_id: Option<String>,
    pub invoice_id: Option<String>,
    #[schema(example = "Acme Corp")]
    pub vendor_name: Option<String>,
    #[schema(example = "ap@acmecorp.com")]
    pub vendor_email: Option<String>,
    #[schema(example = "INV-2024-001")]
    pub invoice_no: Option<String>,
    #[schema(example = 125000)]
    pub invoice_amount_cents: Option<i64>,
    #[schema(example = "2024-01-10")]
    pub invoice_due_date: Option<String>,
    #[schema(example = "TechFlow Solutions")]
    pub company_name: Option<String>,
}

/// Call initiation result
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InitiateCallResponse {
    pub success: bool,
    pub call_id: Option<String>,
    pub status: Option<String>,
    pub phone_number: String,
    pub vendor_name: String,
    pub invoice_no: String,
    /// Invoice amount as given to the assistant, e.g. "$1250.00"
    pub amount: String,
}

impl From<InitiatedCall> for InitiateCallResponse {
    fn from(call: InitiatedCall) -> Self {
        Self {
            success: true,
            amount: call.amount().to_string(),
            call_id: call.result.call_id,
            status: call.result.status,
            phone_number: call.request.phone_number,
            vendor_name: call.request.vendor_name,
            invoice_no: call.request.invoice_no,
        }
    }
}

/// Call status lookup result
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CallStatusResponse {
    pub success: bool,
    pub call_id: String,
    pub status: Option<String>,
    #[schema(value_type = Object)]
    pub started_at: Value,
    #[schema(value_type = Object)]
    pub ended_at: Value,
    #[schema(value_type = Object)]
    pub duration: Value,
    #[schema(value_type = Object)]
    pub transcript: Value,
}

impl From<CallStatusReport> for CallStatusResponse {
    fn from(report: CallStatusReport) -> Self {
        Self {
            success: true,
            call_id: report.call_id,
            status: report.status,
            started_at: report.started_at,
            ended_at: report.ended_at,
            duration: report.duration,
            transcript: report.transcript,
        }
    }
}

/// Health check
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub assistant_id: Option<String>,
}

/// Uniform failure body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
