//! Core library for conduce (delivery note) extraction.
//!
//! This crate provides:
//! - PDF text conversion (lopdf + pdf-extract behind a `TextSource` seam)
//! - Heuristic field extraction (customer, invoice number, line items) for
//!   free-form vendor invoice layouts
//! - Delivery-note data models and pipeline configuration

pub mod error;
pub mod extract;
pub mod models;
pub mod pdf;

pub use error::{ConduceError, Result};
pub use extract::{ConduceExtractor, HeuristicNoteParser, NoteParser, ParseReport};
pub use models::config::{ConduceConfig, ExtractionConfig};
pub use models::note::{DeliveryNote, ExtractionResult, LineItem};
pub use pdf::{PdfTextExtractor, TextSource};
