//! Input Normalizer
//!
//! Turns a loosely-typed request body into a [`CallRequest`]. Missing or
//! unusable optional fields fall back to defaults; only a body that is not a
//! JSON object is rejected.

use serde_json::{Map, Value};

use crate::domain::entities::{CallRequest, DEFAULT_INVOICE_AMOUNT_CENTS};
use crate::domain::errors::DomainError;

/// Prepend `+` when missing. No further E.164 validation is done.
pub fn normalize_phone(number: &str) -> String {
    if number.starts_with('+') {
        number.to_string()
    } else {
        format!("+{number}")
    }
}

/// Parse raw body bytes. An empty body counts as `{}`.
pub fn parse_call_request(body: &[u8], default_phone: &str) -> Result<CallRequest, DomainError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return normalize_call_request(&Value::Object(Map::new()), default_phone);
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| DomainError::InvalidRequest(format!("malformed JSON body: {e}")))?;

    normalize_call_request(&value, default_phone)
}

/// Apply defaults to an already-parsed body
pub fn normalize_call_request(
    body: &Value,
    default_phone: &str,
) -> Result<CallRequest, DomainError> {
    let fields = body.as_object().ok_or_else(|| {
        DomainError::InvalidRequest("request body must be a JSON object".to_string())
    })?;

    let defaults = CallRequest::default();

    let phone = text_field(fields, "phoneNumber")
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| default_phone.to_string());

    Ok(CallRequest {
        vendor_id: text_field(fields, "vendorId"),
        invoice_id: text_field(fields, "invoiceId"),
        vendor_name: string_field(fields, "vendorName").unwrap_or(defaults.vendor_name),
        vendor_email: string_field(fields, "vendorEmail").unwrap_or(defaults.vendor_email),
        invoice_no: string_field(fields, "invoiceNo").unwrap_or(defaults.invoice_no),
        invoice_amount_cents: amount_cents(fields),
        invoice_due_date: string_field(fields, "invoiceDueDate")
            .unwrap_or(defaults.invoice_due_date),
        company_name: string_field(fields, "companyName").unwrap_or(defaults.company_name),
        phone_number: normalize_phone(phone.trim()),
    })
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Strings, or numbers rendered as text (ids and phone numbers arrive both ways)
fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn amount_cents(fields: &Map<String, Value>) -> i64 {
    let Some(raw) = fields.get("invoiceAmountCents") else {
        return DEFAULT_INVOICE_AMOUNT_CENTS;
    };

    let parsed = match raw {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.unwrap_or_else(|| {
        if !raw.is_null() {
            tracing::warn!(value = %raw, "Unusable invoiceAmountCents, using default");
        }
        DEFAULT_INVOICE_AMOUNT_CENTS
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DEFAULT_TEST_PHONE_NUMBER;
    use serde_json::json;

    #[test]
    fn test_normalize_phone_prepends_plus() {
        assert_eq!(normalize_phone("17657469771"), "+17657469771");
        assert_eq!(normalize_phone("+17657469771"), "+17657469771");
        // Malformed numbers pass through
        assert_eq!(normalize_phone("not-a-number"), "+not-a-number");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let request = normalize_call_request(&json!({}), DEFAULT_TEST_PHONE_NUMBER).unwrap();
        assert_eq!(request, CallRequest::default());
    }

    #[test]
    fn test_missing_phone_uses_configured_number() {
        let request =
            normalize_call_request(&json!({"phoneNumber": "  "}), "+15550009999").unwrap();
        assert_eq!(request.phone_number, "+15550009999");

        let request = normalize_call_request(&json!({}), "15550009999").unwrap();
        assert_eq!(request.phone_number, "+15550009999");
    }

    #[test]
    fn test_full_body_is_taken_verbatim() {
        let body = json!({
            "phoneNumber": "14155550123",
            "vendorId": "vendor_123",
            "invoiceId": 42,
            "vendorName": "Acme Corp",
            "vendorEmail": "ap@acmecorp.com",
            "invoiceNo": "INV-2024-001",
            "invoiceAmountCents": 125000,
            "invoiceDueDate": "2024-01-10",
            "companyName": "Globex"
        });
        let request = normalize_call_request(&body, DEFAULT_TEST_PHONE_NUMBER).unwrap();

        assert_eq!(request.phone_number, "+14155550123");
        assert_eq!(request.vendor_id.as_deref(), Some("vendor_123"));
        assert_eq!(request.invoice_id.as_deref(), Some("42"));
        assert_eq!(request.vendor_name, "Acme Corp");
        assert_eq!(request.invoice_amount_cents, 125_000);
        assert_eq!(request.company_name, "Globex");
    }

    #[test]
    fn test_amount_fallbacks() {
        let amount = |v: Value| {
            normalize_call_request(&json!({ "invoiceAmountCents": v }), "+1")
                .unwrap()
                .invoice_amount_cents
        };

        assert_eq!(amount(json!(50000)), 50_000);
        assert_eq!(amount(json!(-250)), -250);
        assert_eq!(amount(json!(1234.9)), 1234);
        assert_eq!(amount(json!("9900")), 9_900);
        assert_eq!(amount(json!("lots")), DEFAULT_INVOICE_AMOUNT_CENTS);
        assert_eq!(amount(json!(null)), DEFAULT_INVOICE_AMOUNT_CENTS);
        assert_eq!(amount(json!([1])), DEFAULT_INVOICE_AMOUNT_CENTS);
    }

    #[test]
    fn test_non_string_names_fall_back() {
        let request =
            normalize_call_request(&json!({"vendorName": 7, "invoiceNo": null}), "+1").unwrap();
        assert_eq!(request.vendor_name, "Vendor");
        assert_eq!(request.invoice_no, "INV-001");
    }

    #[test]
    fn test_malformed_json_is_client_error() {
        let err = parse_call_request(b"{not json", "+1").unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().contains("malformed JSON"));
    }

    #[test]
    fn test_non_object_body_is_client_error() {
        let err = parse_call_request(b"[1, 2]", "+1").unwrap_err();
        assert!(matches!(err, DomainError::InvalidRequest(_)));
    }

    #[test]
    fn test_empty_body_is_all_defaults() {
        let request = parse_call_request(b"  \n", DEFAULT_TEST_PHONE_NUMBER).unwrap();
        assert_eq!(request, CallRequest::default());
    }
}
