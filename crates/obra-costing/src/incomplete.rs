//! Incompleteness check: flags items that cannot yet produce a meaningful
//! cost.
//!
//! Criteria (reasons accumulate independently):
//! - blank output unit
//! - no section rows anywhere and no legacy items
//! - section rows exist but every row has a non-positive price
//!
//! Legacy items count as "potentially resolvable via the catalog": their
//! presence suppresses section-derived reasons from the final flag. A
//! missing unit always counts.

use obra_core::{CompositeItem, IncompleteReport};

pub const REASON_MISSING_UNIT: &str = "missing unit";
pub const REASON_NO_CONTENT: &str = "no sections or items";
pub const REASON_ZERO_PRICES: &str = "zero price in all rows";

pub fn detect_incomplete(item: &CompositeItem) -> IncompleteReport {
    let mut reasons = Vec::new();

    let missing_unit = item.output_unit.trim().is_empty();
    if missing_unit {
        reasons.push(REASON_MISSING_UNIT.to_string());
    }

    let has_rows = item.has_section_rows();
    if !has_rows && item.legacy_items.is_empty() {
        reasons.push(REASON_NO_CONTENT.to_string());
    }

    if has_rows {
        let all_unpriced = item
            .sections
            .as_ref()
            .map(|s| s.all_rows().all(|r| r.unit_price <= 0.0))
            .unwrap_or(false);
        if all_unpriced {
            reasons.push(REASON_ZERO_PRICES.to_string());
        }
    }

    let incomplete = missing_unit || (!reasons.is_empty() && item.legacy_items.is_empty());
    IncompleteReport { incomplete, reasons }
}
