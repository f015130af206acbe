//! Delivery note (conduce) data models.

use serde::{Deserialize, Serialize};

/// A single merchandise line on a delivery note.
///
/// Two items are the same iff their labels are string-equal; the label is the
/// merge key during aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Delivered quantity, always >= 1.
    pub quantity: u32,

    /// Canonical product label, after color/size/connectivity stripping.
    pub label: String,
}

impl LineItem {
    pub fn new(quantity: u32, label: impl Into<String>) -> Self {
        Self {
            quantity,
            label: label.into(),
        }
    }
}

/// Structured data extracted from one vendor invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryNote {
    /// Customer name. Empty when detection missed.
    pub customer: String,

    /// Invoice number. Empty when detection missed.
    pub invoice_number: String,

    /// Aggregated line items, in order of first appearance.
    pub items: Vec<LineItem>,
}

impl DeliveryNote {
    /// Validate the note and return any issues found.
    ///
    /// Empty fields are legitimate outcomes that require user review, so
    /// issues are reported as strings rather than errors.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.customer.is_empty() {
            issues.push("Missing customer name".to_string());
        }

        if self.invoice_number.is_empty() {
            issues.push("Missing invoice number".to_string());
        }

        if self.items.is_empty() {
            issues.push("No line items".to_string());
        }

        issues
    }
}

/// Final outcome of one extraction invocation.
///
/// Only boundary failures (missing input, conversion failure) flip `success`
/// to false; detection misses leave `success` true with empty fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Whether the pipeline ran to completion.
    pub success: bool,

    /// Detected customer name (may be empty).
    pub customer: String,

    /// Detected invoice number (may be empty).
    pub invoice_number: String,

    /// Aggregated line items.
    pub items: Vec<LineItem>,

    /// Boundary failure message, present only when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionResult {
    /// Build a successful result from a parsed note.
    pub fn from_note(note: DeliveryNote) -> Self {
        Self {
            success: true,
            customer: note.customer,
            invoice_number: note.invoice_number,
            items: note.items,
            error: None,
        }
    }

    /// Build a failed result carrying the boundary error message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            customer: String::new(),
            invoice_number: String::new(),
            items: Vec::new(),
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_complete_note() {
        let note = DeliveryNote {
            customer: "Juan Perez".to_string(),
            invoice_number: "B-0001".to_string(),
            items: vec![LineItem::new(1, "iPhone 13")],
        };
        assert!(note.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_missing_fields() {
        let issues = DeliveryNote::default().validate();
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn test_failure_result_has_no_payload() {
        let result = ExtractionResult::failure("no file data supplied");
        assert!(!result.success);
        assert!(result.customer.is_empty());
        assert!(result.items.is_empty());
        assert_eq!(result.error.as_deref(), Some("no file data supplied"));
    }

    #[test]
    fn test_result_serialization_skips_absent_error() {
        let result = ExtractionResult::from_note(DeliveryNote::default());
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("error"));
    }
}
