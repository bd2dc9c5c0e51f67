//! Variable Builder
//!
//! Expands a [`CallRequest`] into the fixed-schema [`VariableMap`]. Pure and
//! total; the only request-derived values are the business fields and the
//! amount formatting.

use serde_json::{Map, Value};

use crate::domain::entities::{CallRequest, CollectionPolicy, VariableMap};

/// Share of the invoice the assistant may accept as a minimum payment
pub const MIN_PAYMENT_PERCENTAGE: u32 = 25;
/// Early-settlement discount offered (200 bps)
pub const DISCOUNT_PERCENTAGE: f64 = 2.0;
pub const MAX_INSTALLMENTS: u32 = 3;
pub const MAX_DAYS_TO_SETTLE: u32 = 30;
pub const ALLOW_ZERO_TODAY_IF_DAYS_LATE_LT: u32 = 7;
pub const VENDOR_MIN_PAYMENT_PERCENTAGE: u32 = 30;

/// Render cents as dollars with exactly two decimals (125000 → "$1250.00")
pub fn format_cents(cents: i64) -> String {
    format!("${:.2}", cents as f64 / 100.0)
}

/// 25% of the invoice, rendered like [`format_cents`]
///
/// Computed as `(cents * 25 / 100) / 100` in floating point; fractional cents
/// are rounded by the two-decimal formatter.
pub fn min_payment_amount(cents: i64) -> String {
    let share = (cents as i128 * MIN_PAYMENT_PERCENTAGE as i128) as f64 / 100.0;
    format!("${:.2}", share / 100.0)
}

/// Build the assistant variables for one call
pub fn build_variables(request: &CallRequest, policy: &CollectionPolicy) -> VariableMap {
    let formatted_amount = format_cents(request.invoice_amount_cents);

    VariableMap {
        company_name: request.company_name.clone(),
        invoice_no: request.invoice_no.clone(),
        formatted_amount: formatted_amount.clone(),
        formatted_due_date: request.invoice_due_date.clone(),
        min_payment_percentage: MIN_PAYMENT_PERCENTAGE,
        min_payment_amount: min_payment_amount(request.invoice_amount_cents),
        max_installments: MAX_INSTALLMENTS,
        max_days_to_settle: MAX_DAYS_TO_SETTLE,
        allow_zero_today_if_days_late_lt: ALLOW_ZERO_TODAY_IF_DAYS_LATE_LT,
        discount_percentage: DISCOUNT_PERCENTAGE,
        late_fee_waive: true,
        vendor_name: request.vendor_name.clone(),
        vendor_notes: String::new(),
        vendor_do_not_call: false,
        vendor_min_payment_percentage: VENDOR_MIN_PAYMENT_PERCENTAGE,
        never_collect_card_on_call: true,
        contact_window_start: policy.contact_window_start.clone(),
        contact_window_end: policy.contact_window_end.clone(),
        timezone: policy.timezone.clone(),
        current_attempt_number: 1,
        max_attempts_per_week: policy.max_attempts_per_week,
        allowed_tools: policy.allowed_tools.clone(),
        allowed_tools_list: policy.allowed_tools_list(),
        agent_mail_from: policy.agent_mail_from.clone(),
        email: request.vendor_email.clone(),
        historical_mode: "standard".to_string(),
        last_outcome: "n/a".to_string(),
        last_promise_date: "n/a".to_string(),
        total_recovered: "0.00".to_string(),
        total_outstanding: formatted_amount,
        suggested_date: "within 7 days".to_string(),
    }
}

/// Correlation metadata for platform webhooks; `None` when the request
/// carries neither id.
pub fn call_metadata(request: &CallRequest) -> Option<Value> {
    let mut metadata = Map::new();
    if let Some(vendor_id) = &request.vendor_id {
        metadata.insert("vendorId".to_string(), Value::String(vendor_id.clone()));
    }
    if let Some(invoice_id) = &request.invoice_id {
        metadata.insert("invoiceId".to_string(), Value::String(invoice_id.clone()));
    }

    if metadata.is_empty() {
        None
    } else {
        Some(Value::Object(metadata))
    }
}
