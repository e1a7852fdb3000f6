use std::collections::HashMap;

use obra_core::{AliasMap, CompositeItem, ItemRef, RefKind, Resource, ResourceKind, Row, SectionSet};
use obra_costing::resolve_cost;
use proptest::prelude::*;

fn row_strategy() -> impl Strategy<Value = Row> {
    (0.0..100.0f64, 0.0..1000.0f64).prop_map(|(quantity, unit_price)| Row {
        description: "row".into(),
        unit: "u".into(),
        quantity,
        unit_price,
    })
}

fn kind_strategy() -> impl Strategy<Value = ResourceKind> {
    prop_oneof![
        Just(ResourceKind::Material),
        Just(ResourceKind::Labor),
        Just(ResourceKind::Equipment),
        Just(ResourceKind::Service),
    ]
}

fn item_ref_strategy() -> impl Strategy<Value = ItemRef> {
    (0usize..8, prop::bool::ANY, 0.0..50.0f64, 0.0..0.3f64, -1.0..40.0f64).prop_map(
        |(n, is_coef, coef, waste, rate)| ItemRef {
            // Some ids fall outside the catalog on purpose.
            resource_id: format!("r{n}"),
            kind: if is_coef {
                RefKind::Coefficient
            } else {
                RefKind::Yield
            },
            coef: Some(coef),
            waste_factor: Some(waste),
            yield_rate: Some(rate),
        },
    )
}

fn item_strategy() -> impl Strategy<Value = CompositeItem> {
    (
        prop::option::of((
            prop::collection::vec(row_strategy(), 0..4),
            prop::collection::vec(row_strategy(), 0..4),
            prop::collection::vec(row_strategy(), 0..4),
            prop::collection::vec(row_strategy(), 0..4),
        )),
        prop::collection::vec(item_ref_strategy(), 0..6),
    )
        .prop_map(|(sections, legacy_items)| CompositeItem {
            id: "apu".into(),
            description: "generated".into(),
            output_unit: "m2".into(),
            sections: sections.map(|(materials, labor, equipment, miscellaneous)| SectionSet {
                materials,
                labor,
                equipment,
                miscellaneous,
                extras: vec![],
            }),
            legacy_items,
        })
}

fn small_catalog() -> HashMap<String, Resource> {
    (0..5)
        .map(|n| {
            let id = format!("r{n}");
            (
                id.clone(),
                Resource {
                    id,
                    kind: ResourceKind::Material,
                    name: format!("resource {n}"),
                    unit: "u".into(),
                    unit_price: 10.0 * (n as f64 + 1.0),
                },
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn total_is_exactly_the_breakdown_sum(item in item_strategy(), kind in kind_strategy()) {
        let mut catalog = small_catalog();
        for r in catalog.values_mut() {
            r.kind = kind;
        }
        let result = resolve_cost(&item, &catalog, &AliasMap::new());
        prop_assert_eq!(result.total.to_bits(), result.breakdown.sum().to_bits());
    }

    #[test]
    fn resolution_never_panics_and_subtotals_are_non_negative(item in item_strategy()) {
        let result = resolve_cost(&item, &small_catalog(), &AliasMap::new());
        prop_assert!(result.breakdown.materials >= 0.0);
        prop_assert!(result.breakdown.labor >= 0.0);
        prop_assert!(result.breakdown.equipment >= 0.0);
        prop_assert!(result.breakdown.miscellaneous >= 0.0);
    }

    #[test]
    fn aliasing_a_reference_preserves_its_cost(coef in 0.1..20.0f64) {
        let catalog = small_catalog();
        let mut aliases = AliasMap::new();
        aliases.insert("retired", "r2");

        let make = |id: &str| CompositeItem {
            id: "apu".into(),
            description: "aliased".into(),
            output_unit: "m2".into(),
            sections: None,
            legacy_items: vec![ItemRef {
                resource_id: id.into(),
                kind: RefKind::Coefficient,
                coef: Some(coef),
                waste_factor: None,
                yield_rate: None,
            }],
        };
        let direct = resolve_cost(&make("r2"), &catalog, &aliases);
        let indirect = resolve_cost(&make("retired"), &catalog, &aliases);
        prop_assert_eq!(direct.total.to_bits(), indirect.total.to_bits());
        prop_assert!(indirect.warnings.is_empty());
    }
}
