//! Invoice number detection.

use tracing::debug;

use super::patterns::{DIGITS_ONLY, INVOICE_NUMBER, INVOICE_TOKEN};
use super::text::normalize_lines;
use super::FieldDetector;
use crate::models::config::ExtractionConfig;

/// Layered invoice-number detector, first success wins.
///
/// The primary stage reads the token after the "No Factura" label and rejects
/// boilerplate words that some layouts print there instead of the number. The
/// fallback stage handles layouts that print the number on its own line just
/// *before* the label.
#[derive(Debug)]
pub struct InvoiceNumberDetector {
    denylist: Vec<String>,
    max_len: usize,
    max_preceding_len: usize,
}

impl InvoiceNumberDetector {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            denylist: config
                .invoice_number_denylist
                .iter()
                .map(|w| w.to_uppercase())
                .collect(),
            max_len: config.max_invoice_number_len,
            max_preceding_len: config.max_preceding_number_len,
        }
    }

    fn detect_labeled(&self, text: &str) -> Option<String> {
        let caps = INVOICE_NUMBER.captures(text)?;
        let token = caps.get(1)?.as_str().trim();

        // Anti-false-positive validation
        if token.len() > self.max_len || self.denylist.contains(&token.to_uppercase()) {
            return None;
        }
        Some(token.to_string())
    }

    fn detect_preceding_line(&self, text: &str) -> Option<String> {
        let lines = normalize_lines(text);
        let label_idx = lines
            .iter()
            .position(|l| l.to_lowercase().contains("no factura"))?;

        // The number usually sits one or two lines above the label.
        lines[..label_idx]
            .iter()
            .rev()
            .take(2)
            .find(|prev| self.looks_like_number(prev))
            .cloned()
    }

    fn looks_like_number(&self, line: &str) -> bool {
        // "/" excludes date-like tokens such as 16/02/2026.
        (DIGITS_ONLY.is_match(line) || INVOICE_TOKEN.is_match(line))
            && line.len() < self.max_preceding_len
            && !line.contains('/')
    }
}

impl FieldDetector for InvoiceNumberDetector {
    type Output = String;

    fn detect(&self, text: &str) -> Option<String> {
        let number = self
            .detect_labeled(text)
            .or_else(|| self.detect_preceding_line(text));
        debug!("Invoice number detected: {:?}", number);
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> InvoiceNumberDetector {
        InvoiceNumberDetector::new(&ExtractionConfig::default())
    }

    #[test]
    fn test_labeled_number() {
        assert_eq!(
            detector().detect("No Factura B-0001"),
            Some("B-0001".to_string())
        );
    }

    #[test]
    fn test_denylisted_word_after_label_is_rejected() {
        assert_eq!(detector().detect("No Factura\nCondiciones:\nDE CONTADO"), None);
    }

    #[test]
    fn test_overlong_token_is_rejected() {
        let text = "No Factura ABCDEFGHIJKLMNOPQRSTUVWXYZ123";
        assert_eq!(detector().detect(text), None);
    }

    #[test]
    fn test_fallback_number_on_preceding_line() {
        let text = "Vendedor:\nSIN DEFINIR\n2375\nNo Factura\nCondiciones:\nDE CONTADO";
        assert_eq!(detector().detect(text), Some("2375".to_string()));
    }

    #[test]
    fn test_fallback_skips_date_like_lines() {
        let text = "16/02/2026\nNo Factura\nCondiciones:";
        assert_eq!(detector().detect(text), None);
    }

    #[test]
    fn test_fallback_looks_two_lines_back() {
        let text = "A-42\nSIN-DEFINIR-LARGO\nNo Factura";
        assert_eq!(detector().detect(text), Some("A-42".to_string()));
    }
}
