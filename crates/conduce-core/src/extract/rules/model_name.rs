//! Product label cleaning.

use regex::Regex;

use super::patterns::{CONNECTIVITY_5G, EMPTY_PARENS, MULTI_SPACE, SIZE_SUFFIX};
use crate::models::config::ExtractionConfig;

/// Strips decorative tokens from a raw description to produce a canonical
/// product label.
///
/// Order matters: connectivity suffix, then trailing size, then colors, then
/// parenthetical and whitespace cleanup. Idempotent on already-clean labels.
#[derive(Debug)]
pub struct ModelNameCleaner {
    color_pattern: Regex,
}

impl ModelNameCleaner {
    pub fn new(config: &ExtractionConfig) -> Self {
        // Whole-word match across the vocabulary, case-insensitive. Entries
        // are escaped, so compilation cannot fail on user-supplied tables.
        let color_pattern = if config.color_vocabulary.is_empty() {
            Regex::new(r"\b\B").unwrap()
        } else {
            let alternation = config
                .color_vocabulary
                .iter()
                .map(|c| regex::escape(c))
                .collect::<Vec<_>>()
                .join("|");
            Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).unwrap()
        };

        Self { color_pattern }
    }

    /// Clean a raw description into a canonical label.
    ///
    /// If cleaning reduces the string to nothing (e.g. the whole input was a
    /// color name), the original input is returned trimmed; a description is
    /// never destroyed by cleaning.
    pub fn clean(&self, name: &str) -> String {
        let mut label = CONNECTIVITY_5G.replace_all(name, "").into_owned();
        label = SIZE_SUFFIX.replace_all(&label, "").into_owned();
        label = self.color_pattern.replace_all(&label, "").into_owned();
        label = EMPTY_PARENS.replace_all(&label, "").into_owned();
        label = MULTI_SPACE.replace_all(&label, " ").trim().to_string();

        if label.is_empty() {
            return name.trim().to_string();
        }
        label
    }
}
