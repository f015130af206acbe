//! Configuration for the extraction pipeline.
//!
//! The denylists and the color vocabulary are hand-tuned tables observed from
//! specific vendor layouts. They live in configuration so that a new vendor
//! format is a data addition, not a logic edit.

use serde::{Deserialize, Serialize};

use crate::error::ConduceError;

/// Main configuration for the conduce pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConduceConfig {
    /// Field and line-item extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Extraction heuristics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Words that disqualify a token captured after the "No Factura" label.
    /// Guards against boilerplate immediately following the label.
    pub invoice_number_denylist: Vec<String>,

    /// Section-header words that disqualify a continuation line as a product
    /// description.
    pub section_headers: Vec<String>,

    /// Color and marketing-finish names stripped from product labels.
    pub color_vocabulary: Vec<String>,

    /// Largest value accepted as a quantity. Guards against serial/IMEI-like
    /// numbers being misread as quantities.
    pub max_quantity: u32,

    /// Longest token accepted as an invoice number by the labeled pattern.
    pub max_invoice_number_len: usize,

    /// Longest line accepted as an invoice number by the preceding-line
    /// fallback.
    pub max_preceding_number_len: usize,

    /// Shortest cleaned label accepted as a product description.
    pub min_label_len: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            invoice_number_denylist: to_strings(&[
                "CONDICIONES",
                "DE",
                "CONTADO",
                "CREDITO",
                "FECHA",
                "VENDEDOR",
            ]),
            section_headers: to_strings(&[
                "NO FACTURA",
                "CONDICIONES",
                "VENDEDOR",
                "CLIENTE",
                "FECHA",
                "SUBTOTAL",
                "DESCUENTO",
                "ITBIS",
                "TOTAL",
                "PAGINA",
                "RECIBIDO POR",
                "REALIZADO POR",
            ]),
            color_vocabulary: to_strings(&[
                "negro",
                "rojo",
                "verde",
                "azul",
                "blanco",
                "gris",
                "plateado",
                "dorado",
                "púrpura",
                "morado",
                "lavanda",
                "rosa",
                "rosado",
                "amarillo",
                "naranja",
                "marrón",
                "cyan",
                "magenta",
                "grafito",
                "sierra",
                "black",
                "red",
                "green",
                "blue",
                "white",
                "gray",
                "silver",
                "gold",
                "purple",
                "pink",
                "yellow",
                "orange",
                "brown",
                "graphite",
                "midnight blue",
                "desert gold",
                "titanium",
                "oro",
                "arena",
                "pantone",
                "tapestry",
                "arabesque",
                "navy",
                "violet",
                "mint",
                "cream",
                "beige",
                "charcoal",
                "blaze",
                "pure",
                "tendril",
                "polar",
                "deep",
                "space",
                "rose",
            ]),
            max_quantity: 9000,
            max_invoice_number_len: 20,
            max_preceding_number_len: 12,
            min_label_len: 3,
        }
    }
}

fn to_strings(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}

impl ConduceConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| ConduceError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> crate::Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConduceError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_populated() {
        let config = ExtractionConfig::default();
        assert!(config.invoice_number_denylist.contains(&"CONDICIONES".to_string()));
        assert!(config.section_headers.contains(&"ITBIS".to_string()));
        assert!(config.color_vocabulary.len() > 40);
        assert_eq!(config.max_quantity, 9000);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = ConduceConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ConduceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.extraction.max_quantity, config.extraction.max_quantity);
        assert_eq!(
            parsed.extraction.color_vocabulary.len(),
            config.extraction.color_vocabulary.len()
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: ConduceConfig =
            serde_json::from_str(r#"{"extraction": {"max_quantity": 500}}"#).unwrap();
        assert_eq!(parsed.extraction.max_quantity, 500);
        assert_eq!(parsed.extraction.min_label_len, 3);
        assert!(!parsed.extraction.color_vocabulary.is_empty());
    }
}
