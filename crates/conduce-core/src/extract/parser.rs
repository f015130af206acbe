//! Heuristic delivery-note parser and the one-call extraction orchestrator.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::error::ExtractionError;
use crate::models::config::ConduceConfig;
use crate::models::note::{DeliveryNote, ExtractionResult};
use crate::pdf::{PdfTextExtractor, TextSource};

use super::rules::{
    aggregate_items, normalize_lines, CustomerDetector, FieldDetector, InvoiceNumberDetector,
    LineItemScanner, ModelNameCleaner,
};

/// Result of parsing one text blob.
#[derive(Debug, Clone)]
pub struct ParseReport {
    /// Extracted delivery-note data.
    pub note: DeliveryNote,
    /// Detection misses, for user review.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for delivery-note parsing.
pub trait NoteParser {
    /// Parse a delivery note from text. Detection misses degrade to empty
    /// fields; parsing itself never fails.
    fn parse(&self, text: &str) -> ParseReport;
}

/// Rule-based parser combining field detectors, the line-item scanner and the
/// label cleaner, all built from one configuration.
#[derive(Debug)]
pub struct HeuristicNoteParser {
    customer: CustomerDetector,
    invoice_number: InvoiceNumberDetector,
    scanner: LineItemScanner,
    cleaner: ModelNameCleaner,
}

impl HeuristicNoteParser {
    /// Create a parser with the default heuristics tables.
    pub fn new() -> Self {
        Self::with_config(&ConduceConfig::default())
    }

    /// Create a parser from explicit configuration.
    pub fn with_config(config: &ConduceConfig) -> Self {
        let extraction = &config.extraction;
        Self {
            customer: CustomerDetector::new(),
            invoice_number: InvoiceNumberDetector::new(extraction),
            scanner: LineItemScanner::new(extraction),
            cleaner: ModelNameCleaner::new(extraction),
        }
    }
}

impl Default for HeuristicNoteParser {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteParser for HeuristicNoteParser {
    fn parse(&self, text: &str) -> ParseReport {
        let start = Instant::now();

        info!("Parsing delivery note from {} characters of text", text.len());

        let customer = self.customer.detect(text).unwrap_or_default();
        let invoice_number = self.invoice_number.detect(text).unwrap_or_default();

        let lines = normalize_lines(text);
        debug!("Scanning {} lines for items", lines.len());

        let raw_items = self.scanner.scan(&lines, &self.cleaner);
        let items = aggregate_items(raw_items);

        let note = DeliveryNote {
            customer,
            invoice_number,
            items,
        };
        let warnings = note.validate();

        debug!(
            "Extracted note for customer {:?}, invoice {:?}, {} items",
            note.customer,
            note.invoice_number,
            note.items.len()
        );

        ParseReport {
            note,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// One-call orchestrator: PDF bytes in, `ExtractionResult` out.
///
/// Only boundary failures (missing input, conversion failure) produce a
/// failed result; every heuristic miss degrades the payload, not the success
/// flag.
#[derive(Debug)]
pub struct ConduceExtractor<S: TextSource> {
    source: S,
    parser: HeuristicNoteParser,
}

impl ConduceExtractor<PdfTextExtractor> {
    /// Create an extractor over the built-in PDF text converter.
    pub fn new() -> Self {
        Self::with_source(PdfTextExtractor::new())
    }
}

impl Default for ConduceExtractor<PdfTextExtractor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TextSource> ConduceExtractor<S> {
    /// Create an extractor over a custom text source.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            parser: HeuristicNoteParser::new(),
        }
    }

    /// Replace the parser configuration.
    pub fn with_config(mut self, config: &ConduceConfig) -> Self {
        self.parser = HeuristicNoteParser::with_config(config);
        self
    }

    /// Run the full pipeline on a PDF byte buffer.
    pub fn extract(&self, data: &[u8]) -> ExtractionResult {
        if data.is_empty() {
            warn!("Extraction invoked without file data");
            return ExtractionResult::failure(ExtractionError::NoInput.to_string());
        }

        let text = match self.source.convert(data) {
            Ok(text) => text,
            Err(e) => {
                warn!("PDF conversion failed: {}", e);
                return ExtractionResult::failure(ExtractionError::Conversion(e.to_string()).to_string());
            }
        };

        if text.trim().is_empty() {
            warn!("PDF conversion yielded no text");
            return ExtractionResult::failure(
                ExtractionError::Conversion("no text in PDF".to_string()).to_string(),
            );
        }

        let report = self.parser.parse(&text);
        for warning in &report.warnings {
            debug!("Extraction warning: {}", warning);
        }

        ExtractionResult::from_note(report.note)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::PdfError;
    use crate::models::note::LineItem;

    #[test]
    fn test_parse_basic_delivery_note() {
        let text = "YACELLTECH SRL\n\
                    Cliente: Juan Perez\n\
                    Dirección: Av. Principal 42\n\
                    Vendedor:\n\
                    SIN DEFINIR\n\
                    2375\n\
                    No Factura\n\
                    Condiciones:\n\
                    DE CONTADO\n\
                    Fecha: 16/02/2026\n\
                    2 CELULAR SAMSUNG A04E NEGRO 4,450.00 8,900.00\n\
                    30.00\n\
                    iPhone 13 Pro Max\n\
                    1 Samsung Galaxy A10 Negro\n\
                    SUBTOTAL\n\
                    13,350.00\n\
                    TOTAL\n\
                    13,350.00\n";

        let parser = HeuristicNoteParser::new();
        let report = parser.parse(text);

        assert_eq!(report.note.customer, "Juan Perez");
        assert_eq!(report.note.invoice_number, "2375");
        assert_eq!(
            report.note.items,
            vec![
                LineItem::new(2, "CELULAR SAMSUNG A04E"),
                LineItem::new(30, "iPhone 13 Pro Max"),
                LineItem::new(1, "Samsung Galaxy A10"),
            ]
        );
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_parse_merges_duplicate_labels() {
        let text = "1 iPhone 13 Negro\n2 iPhone 13 Azul\n";
        let report = HeuristicNoteParser::new().parse(text);
        assert_eq!(report.note.items, vec![LineItem::new(3, "iPhone 13")]);
    }

    #[test]
    fn test_parse_degrades_to_warnings() {
        let report = HeuristicNoteParser::new().parse("nothing recognizable here");
        assert!(report.note.customer.is_empty());
        assert!(report.note.invoice_number.is_empty());
        assert!(report.note.items.is_empty());
        assert_eq!(report.warnings.len(), 3);
    }

    struct StaticSource(&'static str);

    impl TextSource for StaticSource {
        fn convert(&self, _data: &[u8]) -> crate::pdf::Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingSource;

    impl TextSource for FailingSource {
        fn convert(&self, _data: &[u8]) -> crate::pdf::Result<String> {
            Err(PdfError::TextExtraction("broken xref table".to_string()))
        }
    }

    #[test]
    fn test_extract_empty_input_fails_fast() {
        let extractor = ConduceExtractor::with_source(StaticSource("Cliente: X"));
        let result = extractor.extract(&[]);
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("no file data supplied"));
    }

    #[test]
    fn test_extract_surfaces_conversion_failure() {
        let extractor = ConduceExtractor::with_source(FailingSource);
        let result = extractor.extract(b"%PDF-1.4");
        assert!(!result.success);
        assert!(result.error.unwrap().contains("broken xref table"));
    }

    #[test]
    fn test_extract_blank_text_is_a_conversion_failure() {
        let extractor = ConduceExtractor::with_source(StaticSource("  \n \n"));
        let result = extractor.extract(b"%PDF-1.4");
        assert!(!result.success);
    }

    #[test]
    fn test_extract_succeeds_with_incomplete_fields() {
        let extractor = ConduceExtractor::with_source(StaticSource("1 TABLET KRIP T9"));
        let result = extractor.extract(b"%PDF-1.4");
        assert!(result.success);
        assert!(result.customer.is_empty());
        assert_eq!(result.items, vec![LineItem::new(1, "TABLET KRIP T9")]);
    }
}
