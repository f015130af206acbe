//! Merging of line items that share a canonical label.

use crate::models::note::LineItem;

/// Merge items with identical labels by summing quantities.
///
/// The first occurrence of a label establishes its position in the output;
/// later occurrences fold into it. Labels are compared by exact string
/// equality, already cleaned upstream.
pub fn aggregate_items(items: Vec<LineItem>) -> Vec<LineItem> {
    let mut merged: Vec<LineItem> = Vec::with_capacity(items.len());

    for item in items {
        match merged.iter_mut().find(|m| m.label == item.label) {
            Some(existing) => existing.quantity += item.quantity,
            None => merged.push(item),
        }
    }

    merged
}
