//! PDF text conversion boundary.

mod extractor;

pub use extractor::PdfTextExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// The external PDF-to-text capability: bytes in, a single newline-delimited
/// text blob out.
///
/// The extraction core does not depend on how an implementation renders text
/// layout (column order, whitespace insertion); it only assumes visual lines
/// separated by line breaks. Kept behind a trait so tests can substitute a
/// stub source.
pub trait TextSource {
    /// Convert a PDF byte buffer into plain text.
    fn convert(&self, data: &[u8]) -> Result<String>;
}
