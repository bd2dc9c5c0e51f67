//! Response Adapter
//!
//! The platform answers create-call with either `{id, status}` or
//! `{call: {id, status}}`; both are accepted, top-level first.

use serde_json::{json, Value};

use crate::domain::entities::{CallResult, CallStatusReport};

/// Pull `callId` / `status` out of a create-call response
pub fn extract_call_result(raw: Value) -> CallResult {
    CallResult {
        call_id: call_field(&raw, "id"),
        status: call_field(&raw, "status"),
        raw,
    }
}

/// Reshape a call lookup into the status report
pub fn extract_status_report(call_id: &str, raw: &Value) -> CallStatusReport {
    let passthrough = |key: &str| raw.get(key).cloned().unwrap_or(Value::Null);

    CallStatusReport {
        call_id: call_id.to_string(),
        status: call_field(raw, "status"),
        started_at: passthrough("startedAt"),
        ended_at: passthrough("endedAt"),
        duration: passthrough("duration"),
        transcript: raw
            .get("transcript")
            .filter(|t| !t.is_null())
            .cloned()
            .unwrap_or_else(|| json!([])),
    }
}

fn call_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key)
        .and_then(as_text)
        .or_else(|| raw.get("call").and_then(|call| call.get(key)).and_then(as_text))
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
