//! Common regex patterns for delivery-note extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Customer name: everything after "Cliente:" up to the next section label
    // or end of text. Spans line breaks; the span is re-flowed afterwards.
    pub static ref CUSTOMER_SPAN: Regex = Regex::new(
        r"(?is)Cliente:\s*(.*?)\s*(?:Dirección:|Vendedor:|$)"
    ).unwrap();

    // Bare customer label, for the line-before-label fallback.
    pub static ref CUSTOMER_LABEL: Regex = Regex::new(
        r"(?i)Cliente:"
    ).unwrap();

    // Invoice number: alphanumeric token (letters, digits, hyphens, dots)
    // following the label.
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"(?i)No Factura\s*([A-Za-z0-9.\-]+)"
    ).unwrap();

    // Uppercase alphanumeric token with hyphens, e.g. "B-0001". Used by the
    // preceding-line fallback.
    pub static ref INVOICE_TOKEN: Regex = Regex::new(
        r"^[A-Z0-9\-]+$"
    ).unwrap();

    pub static ref DIGITS_ONLY: Regex = Regex::new(
        r"^\d+$"
    ).unwrap();

    // Leading quantity: integer or decimal with up to 2 fraction digits,
    // comma or dot separator, e.g. "40.00CELULAR ..." or "1 Samsung ...".
    pub static ref LEADING_QUANTITY: Regex = Regex::new(
        r"^(\d+(?:[.,]\d{1,2})?)\s*(.*)$"
    ).unwrap();

    // A remainder made solely of digits, dots and commas is a stray price
    // fragment, not a description.
    pub static ref NUMERIC_FRAGMENT: Regex = Regex::new(
        r"^[\d.,]+$"
    ).unwrap();

    // Price-shaped token with thousands groups, e.g. "4,450.00". Descriptions
    // are truncated at the first occurrence.
    pub static ref PRICE_TOKEN: Regex = Regex::new(
        r"\d{1,3}(?:,\d{3})*\.\d{2}"
    ).unwrap();

    // Connectivity suffix stripped from product labels.
    pub static ref CONNECTIVITY_5G: Regex = Regex::new(
        r"(?i)\s*5g\b"
    ).unwrap();

    // Trailing screen/size suffix, e.g. `32"` or `6.7"`.
    pub static ref SIZE_SUFFIX: Regex = Regex::new(
        r#"(?i)\s*\d+\.?\d*"+\s*$"#
    ).unwrap();

    // Parenthetical groups left empty after color stripping.
    pub static ref EMPTY_PARENS: Regex = Regex::new(
        r"\(\s*\)"
    ).unwrap();

    pub static ref MULTI_SPACE: Regex = Regex::new(
        r"\s{2,}"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_span_stops_at_delimiter() {
        let caps = CUSTOMER_SPAN.captures("Cliente: Juan Perez\nDirección: X").unwrap();
        assert_eq!(&caps[1], "Juan Perez");
    }

    #[test]
    fn test_customer_span_runs_to_end_of_text() {
        let caps = CUSTOMER_SPAN.captures("Cliente: Maria Gomez").unwrap();
        assert_eq!(&caps[1], "Maria Gomez");
    }

    #[test]
    fn test_leading_quantity_splits_glued_description() {
        let caps = LEADING_QUANTITY.captures("40.00CELULAR KRIP K5").unwrap();
        assert_eq!(&caps[1], "40.00");
        assert_eq!(&caps[2], "CELULAR KRIP K5");
    }

    #[test]
    fn test_price_token_matches_thousands_groups() {
        let m = PRICE_TOKEN.find("CELULAR SAMSUNG A04E 4,450.00").unwrap();
        assert_eq!(m.as_str(), "4,450.00");
    }

    #[test]
    fn test_size_suffix_only_at_end() {
        assert!(SIZE_SUFFIX.is_match("SMART TV 32\""));
        assert!(!SIZE_SUFFIX.is_match("32\" SMART TV"));
    }
}
