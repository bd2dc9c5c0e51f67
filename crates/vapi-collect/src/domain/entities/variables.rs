//! Assistant variables
//!
//! The assistant's prompt template binds to these exact keys, so field names
//! and defaults must not drift.

use serde::{Deserialize, Serialize};

/// Caller-tunable part of the collections policy
///
/// `Default` is the policy the HTTP service always uses; the extended CLI
/// lets an operator override each field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionPolicy {
    pub contact_window_start: String,
    pub contact_window_end: String,
    pub timezone: String,
    pub max_attempts_per_week: u32,
    pub allowed_tools: Vec<String>,
    pub agent_mail_from: String,
}

impl Default for CollectionPolicy {
    fn default() -> Self {
        Self {
            contact_window_start: "09:00".to_string(),
            contact_window_end: "17:00".to_string(),
            timezone: "America/New_York".to_string(),
            max_attempts_per_week: 3,
            allowed_tools: vec!["payments".to_string(), "email".to_string()],
            agent_mail_from: "collections@company.com".to_string(),
        }
    }
}

impl CollectionPolicy {
    /// Parse a comma separated tool list ("payments, email")
    pub fn parse_tools(list: &str) -> Vec<String> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// The tool list as rendered into `allowedToolsList`
    pub fn allowed_tools_list(&self) -> String {
        self.allowed_tools.join(", ")
    }
}

/// VariableMap - flat variable set injected via `assistantOverrides.variableValues`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableMap {
    pub company_name: String,
    pub invoice_no: String,
    pub formatted_amount: String,
    pub formatted_due_date: String,
    pub min_payment_percentage: u32,
    pub min_payment_amount: String,
    pub max_installments: u32,
    pub max_days_to_settle: u32,
    pub allow_zero_today_if_days_late_lt: u32,
    pub discount_percentage: f64,
    pub late_fee_waive: bool,
    pub vendor_name: String,
    pub vendor_notes: String,
    pub vendor_do_not_call: bool,
    pub vendor_min_payment_percentage: u32,
    pub never_collect_card_on_call: bool,
    pub contact_window_start: String,
    pub contact_window_end: String,
    pub timezone: String,
    pub current_attempt_number: u32,
    pub max_attempts_per_week: u32,
    pub allowed_tools: Vec<String>,
    pub allowed_tools_list: String,
    pub agent_mail_from: String,
    pub email: String,
    pub historical_mode: String,
    pub last_outcome: String,
    pub last_promise_date: String,
    pub total_recovered: String,
    pub total_outstanding: String,
    pub suggested_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tools_trims_and_skips_empty() {
        assert_eq!(
            CollectionPolicy::parse_tools(" payments ,email,, "),
            vec!["payments".to_string(), "email".to_string()]
        );
        assert!(CollectionPolicy::parse_tools("").is_empty());
    }

    #[test]
    fn test_default_tools_list() {
        assert_eq!(
            CollectionPolicy::default().allowed_tools_list(),
            "payments, email"
        );
    }
}
