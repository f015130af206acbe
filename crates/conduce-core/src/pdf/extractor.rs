//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{Result, TextSource};
use crate::error::PdfError;

/// Text-layer PDF converter.
///
/// Loads the document with lopdf to reject broken or pageless files and to
/// decrypt empty-password encryption, then pulls the text layer with
/// pdf-extract.
#[derive(Debug, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Create a new PDF text extractor.
    pub fn new() -> Self {
        Self
    }
}

impl TextSource for PdfTextExtractor {
    fn convert(&self, data: &[u8]) -> Result<String> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        let raw_data = if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }
        debug!("Loaded PDF with {} pages", page_count);

        let text = pdf_extract::extract_text_from_mem(&raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        debug!("Extracted {} chars of text", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_rejects_garbage_bytes() {
        let extractor = PdfTextExtractor::new();
        let result = extractor.convert(b"not a pdf at all");
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }
}
