//! Cost resolution engine.
//!
//! Stage 1: pick the authoritative representation (populated sections win).
//! Stage 2: accumulate row costs into the four-way breakdown; legacy refs go
//! through the alias map and the resource catalog.
//!
//! Data-quality problems never abort a resolution: an unresolved reference,
//! a cyclic alias, or an invalid yield contributes zero and a warning, so a
//! budget view renders partial totals instead of failing.

use std::collections::HashMap;

use tracing::warn;

use obra_core::{
    AliasMap, CompositeItem, CostBreakdown, CostResolution, ItemRef, RefKind, Representation,
    Resource, SectionSet,
};

/// Resolve the unit cost of one composite item against catalog snapshots.
///
/// The returned `total` is exactly the sum of the four breakdown subtotals.
pub fn resolve_cost(
    item: &CompositeItem,
    catalog: &HashMap<String, Resource>,
    aliases: &AliasMap,
) -> CostResolution {
    let mut breakdown = CostBreakdown::default();
    let mut warnings = Vec::new();

    match item.representation() {
        Representation::Sections(sections) => {
            accumulate_sections(sections, &mut breakdown);
        }
        Representation::Legacy(refs) => {
            for item_ref in refs {
                accumulate_legacy_ref(
                    item,
                    item_ref,
                    catalog,
                    aliases,
                    &mut breakdown,
                    &mut warnings,
                );
            }
        }
    }

    CostResolution {
        total: breakdown.sum(),
        breakdown,
        warnings,
    }
}

/// Captured section rows: cost = quantity * snapshot price. The three named
/// categories map one-to-one; the varios section and every extra section
/// fold into miscellaneous.
fn accumulate_sections(sections: &SectionSet, breakdown: &mut CostBreakdown) {
    breakdown.materials += section_cost(&sections.materials);
    breakdown.labor += section_cost(&sections.labor);
    breakdown.equipment += section_cost(&sections.equipment);
    breakdown.miscellaneous += section_cost(&sections.miscellaneous);
    for extra in &sections.extras {
        breakdown.miscellaneous += section_cost(&extra.rows);
    }
}

fn section_cost(rows: &[obra_core::Row]) -> f64 {
    rows.iter().map(|r| r.quantity * r.unit_price).sum()
}

/// One legacy reference: resolve the id, look up the resource, derive the
/// quantity, attribute by resource category. Every failure path is a
/// warning plus zero contribution.
fn accumulate_legacy_ref(
    item: &CompositeItem,
    item_ref: &ItemRef,
    catalog: &HashMap<String, Resource>,
    aliases: &AliasMap,
    breakdown: &mut CostBreakdown,
    warnings: &mut Vec<String>,
) {
    let resolved = match aliases.resolve(&item_ref.resource_id) {
        Ok(id) => id,
        Err(e) => {
            warn!(item = %item.id, resource = %item_ref.resource_id, "alias cycle");
            warnings.push(format!("unresolved resource '{}': {e}", item_ref.resource_id));
            return;
        }
    };

    let Some(resource) = catalog.get(resolved) else {
        warn!(item = %item.id, resource = %resolved, "resource not found");
        warnings.push(format!("resource not found: '{resolved}'"));
        return;
    };

    let quantity = match item_ref.kind {
        RefKind::Coefficient => {
            item_ref.coef.unwrap_or(0.0) * (1.0 + item_ref.waste_factor.unwrap_or(0.0))
        }
        RefKind::Yield => {
            let rate = item_ref.yield_rate.unwrap_or(0.0);
            if rate <= 0.0 {
                warn!(item = %item.id, resource = %resolved, rate, "invalid yield rate");
                warnings.push(format!("invalid yield rate {rate} for resource '{resolved}'"));
                return;
            }
            1.0 / rate
        }
    };

    breakdown.add(resource.kind, quantity * resource.unit_price);
}
