//! CallRequest - Business fields for one collections call

use serde::{Deserialize, Serialize};

/// Test number dialled when a request does not name one
pub const DEFAULT_TEST_PHONE_NUMBER: &str = "+17657469771";

/// Invoice amount used when the request carries none (or an unusable one)
pub const DEFAULT_INVOICE_AMOUNT_CENTS: i64 = 75_000;

/// CallRequest - vendor, invoice and destination for a single call
///
/// Built by the input normalizer (HTTP) or straight from CLI flags, then
/// discarded once the call has been placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    pub vendor_id: Option<String>,
    pub invoice_id: Option<String>,
    pub vendor_name: String,
    pub vendor_email: String,
    pub invoice_no: String,
    pub invoice_amount_cents: i64,
    /// ISO date, passed through to the assistant verbatim
    pub invoice_due_date: String,
    pub company_name: String,
    pub phone_number: String,
}

impl Default for CallRequest {
    fn default() -> Self {
        Self {
            vendor_id: None,
            invoice_id: None,
            vendor_name: "Vendor".to_string(),
            vendor_email: "ap@vendor.com".to_string(),
            invoice_no: "INV-001".to_string(),
            invoice_amount_cents: DEFAULT_INVOICE_AMOUNT_CENTS,
            invoice_due_date: "2024-01-10".to_string(),
            company_name: "TechFlow Solutions".to_string(),
            phone_number: DEFAULT_TEST_PHONE_NUMBER.to_string(),
        }
    }
}

impl CallRequest {
    /// Create a request for `phone_number` with every other field defaulted
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            ..Self::default()
        }
    }

    pub fn with_vendor(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.vendor_name = name.into();
        self.vendor_email = email.into();
        self
    }

    pub fn with_invoice(
        mut self,
        invoice_no: impl Into<String>,
        amount_cents: i64,
        due_date: impl Into<String>,
    ) -> Self {
        self.invoice_no = invoice_no.into();
        self.invoice_amount_cents = amount_cents;
        self.invoice_due_date = due_date.into();
        self
    }

    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = company_name.into();
        self
    }

    /// Attach the caller's own vendor/invoice identifiers
    pub fn with_ids(mut self, vendor_id: Option<String>, invoice_id: Option<String>) -> Self {
        self.vendor_id = vendor_id;
        self.invoice_id = invoice_id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_untouched_defaults() {
        let request = CallRequest::new("+15550001111")
            .with_vendor("Acme Corp", "ap@acme.test")
            .with_invoice("INV-7", 125_000, "2024-03-01");

        assert_eq!(request.phone_number, "+15550001111");
        assert_eq!(request.vendor_name, "Acme Corp");
        assert_eq!(request.invoice_amount_cents, 125_000);
        assert_eq!(request.company_name, "TechFlow Solutions");
        assert!(request.vendor_id.is_none());
    }
}
