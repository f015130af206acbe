//! Line-item detection over the normalized line stream.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, trace};

use super::model_name::ModelNameCleaner;
use super::patterns::{LEADING_QUANTITY, NUMERIC_FRAGMENT, PRICE_TOKEN};
use crate::models::config::ExtractionConfig;
use crate::models::note::LineItem;

/// Single-pass line-item scanner.
///
/// Walks the normalized lines with one piece of carried state: a quantity
/// seen alone on a line, awaiting its description on a following line. Every
/// rejection path is a silent skip; the scanner never errors.
#[derive(Debug)]
pub struct LineItemScanner {
    max_quantity: Decimal,
    min_label_len: usize,
    section_headers: Vec<String>,
}

impl LineItemScanner {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            max_quantity: Decimal::from(config.max_quantity),
            min_label_len: config.min_label_len,
            section_headers: config
                .section_headers
                .iter()
                .map(|w| w.to_uppercase())
                .collect(),
        }
    }

    /// Scan the line stream and return line items in line order, before
    /// aggregation.
    pub fn scan(&self, lines: &[String], cleaner: &ModelNameCleaner) -> Vec<LineItem> {
        let mut items = Vec::new();
        let mut pending: Option<Decimal> = None;

        for line in lines {
            match LEADING_QUANTITY.captures(line) {
                Some(caps) => {
                    let Some(quantity) = parse_quantity(&caps[1]) else {
                        continue;
                    };
                    let rest = caps[2].trim();

                    // Zero counts, serial/IMEI-sized numbers and date
                    // fragments ("16/02/2026") are not quantities. Pending
                    // state is left as-is.
                    if quantity.is_zero() || quantity > self.max_quantity {
                        continue;
                    }
                    if rest.starts_with('/') {
                        continue;
                    }

                    if rest.is_empty() {
                        // Quantity alone on the line; description expected on
                        // a following line.
                        pending = Some(quantity);
                        continue;
                    }

                    // A remainder of digits, dots and commas is a stray price
                    // fragment from a mis-split amounts column.
                    if NUMERIC_FRAGMENT.is_match(rest) {
                        continue;
                    }

                    // Prices sometimes end up glued to the description;
                    // keep only the text before the first price token.
                    let description = match PRICE_TOKEN.find(rest) {
                        Some(m) => &rest[..m.start()],
                        None => rest,
                    };

                    let label = cleaner.clean(description);
                    if let Some(item) = build_item(quantity, label) {
                        trace!("Item on one line: {:?}", item);
                        items.push(item);
                        pending = None;
                    }
                }
                None => {
                    let Some(quantity) = pending.take() else {
                        continue;
                    };

                    // The whole line is a candidate description for the
                    // pending quantity.
                    let label = cleaner.clean(line);
                    if self.is_section_header(&label) || label.chars().count() < self.min_label_len
                    {
                        continue;
                    }

                    if let Some(item) = build_item(quantity, label) {
                        trace!("Item continued from pending quantity: {:?}", item);
                        items.push(item);
                    }
                }
            }
        }

        debug!("Scanned {} lines, found {} raw items", lines.len(), items.len());
        items
    }

    fn is_section_header(&self, label: &str) -> bool {
        let upper = label.to_uppercase();
        self.section_headers.iter().any(|w| upper.contains(w))
    }
}

fn parse_quantity(token: &str) -> Option<Decimal> {
    token.replace(',', ".").parse().ok()
}

/// Round half away from zero and keep the item only if both the quantity and
/// the label survived.
fn build_item(quantity: Decimal, label: String) -> Option<LineItem> {
    if label.is_empty() {
        return None;
    }
    let rounded = quantity
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()?;
    if rounded == 0 {
        return None;
    }
    Some(LineItem::new(rounded, label))
}
