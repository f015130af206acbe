//! Error types for the conduce-core library.

use thiserror::Error;

/// Main error type for the conduce library.
#[derive(Error, Debug)]
pub enum ConduceError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Extraction pipeline error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF text conversion.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Boundary failures of the extraction pipeline.
///
/// Heuristic detection misses are not errors; they degrade to empty fields.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No file bytes were supplied.
    #[error("no file data supplied")]
    NoInput,

    /// The PDF-to-text conversion failed or yielded no text.
    #[error("conversion failed: {0}")]
    Conversion(String),
}

/// Result type for the conduce library.
pub type Result<T> = std::result::Result<T, ConduceError>;
