//! Customer name detection.

use tracing::debug;

use super::patterns::{CUSTOMER_LABEL, CUSTOMER_SPAN};
use super::text::normalize_lines;
use super::FieldDetector;

/// Two-stage customer name detector.
///
/// The primary stage captures the span after the "Cliente:" label. Some
/// vendor layouts place the name on the line immediately *preceding* the
/// label instead; the fallback stage covers those.
#[derive(Debug, Default)]
pub struct CustomerDetector;

impl CustomerDetector {
    pub fn new() -> Self {
        Self
    }

    fn detect_labeled(&self, text: &str) -> Option<String> {
        let caps = CUSTOMER_SPAN.captures(text)?;
        let span = caps.get(1)?.as_str();

        // Collapse internal line breaks to single spaces.
        let name = normalize_lines(span).join(" ");
        if name.is_empty() { None } else { Some(name) }
    }

    fn detect_preceding_line(&self, text: &str) -> Option<String> {
        let label = CUSTOMER_LABEL.find(text)?;
        let before = &text[..label.start()];
        normalize_lines(before).pop()
    }
}

impl FieldDetector for CustomerDetector {
    type Output = String;

    fn detect(&self, text: &str) -> Option<String> {
        let customer = self
            .detect_labeled(text)
            .or_else(|| self.detect_preceding_line(text));
        debug!("Customer detected: {:?}", customer);
        customer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Option<String> {
        CustomerDetector::new().detect(text)
    }

    #[test]
    fn test_labeled_name_before_direccion() {
        let text = "Cliente: Juan Perez\nDirección: Av. Principal 42";
        assert_eq!(detect(text), Some("Juan Perez".to_string()));
    }

    #[test]
    fn test_labeled_name_before_vendedor() {
        let text = "Cliente: COMERCIAL XYZ SRL\nVendedor: Pedro";
        assert_eq!(detect(text), Some("COMERCIAL XYZ SRL".to_string()));
    }

    #[test]
    fn test_multi_line_span_is_reflowed() {
        let text = "Cliente: Juan\nPerez\nVendedor: Ana";
        assert_eq!(detect(text), Some("Juan Perez".to_string()));
    }

    #[test]
    fn test_fallback_takes_line_before_label() {
        let text = "MARIA GOMEZ\nCliente:\nDirección: X";
        assert_eq!(detect(text), Some("MARIA GOMEZ".to_string()));
    }

    #[test]
    fn test_no_label_no_name() {
        assert_eq!(detect("Factura 123\nTotal: 1,000.00"), None);
    }

    #[test]
    fn test_empty_span_with_nothing_before_misses() {
        assert_eq!(detect("Cliente:\nDirección: X"), None);
    }
}
