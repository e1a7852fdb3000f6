use serde::{Deserialize, Serialize};

/// One captured line of a section: the price is a snapshot value, not a live
/// reference to a catalog resource.
///
/// Numeric fields default to 0 so a malformed stored row degrades to a
/// zero-cost line instead of failing the whole catalog load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "unidad", default)]
    pub unit: String,
    #[serde(rename = "cantidad", default)]
    pub quantity: f64,
    #[serde(rename = "pu", default)]
    pub unit_price: f64,
}

/// A free-named ad-hoc section; folds into miscellaneous when costing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtraSection {
    pub title: String,
    #[serde(default)]
    pub rows: Vec<Row>,
}

/// The four standard sections plus any number of free-named extras.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionSet {
    #[serde(rename = "materiales", default)]
    pub materials: Vec<Row>,
    #[serde(rename = "manoObra", default)]
    pub labor: Vec<Row>,
    #[serde(rename = "equipos", default)]
    pub equipment: Vec<Row>,
    #[serde(rename = "varios", default)]
    pub miscellaneous: Vec<Row>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<ExtraSection>,
}

impl SectionSet {
    /// True if any section, including extras, holds at least one row.
    pub fn has_rows(&self) -> bool {
        !self.materials.is_empty()
            || !self.labor.is_empty()
            || !self.equipment.is_empty()
            || !self.miscellaneous.is_empty()
            || self.extras.iter().any(|e| !e.rows.is_empty())
    }

    /// Iterate every row across all sections and extras.
    pub fn all_rows(&self) -> impl Iterator<Item = &Row> {
        self.materials
            .iter()
            .chain(self.labor.iter())
            .chain(self.equipment.iter())
            .chain(self.miscellaneous.iter())
            .chain(self.extras.iter().flat_map(|e| e.rows.iter()))
    }
}

/// How a legacy item derives its per-output-unit quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefKind {
    /// Fixed coefficient, optionally inflated by a waste factor.
    #[serde(rename = "coef")]
    Coefficient,
    /// Production rate: quantity = 1 / yield_rate.
    #[serde(rename = "rendimiento")]
    Yield,
}

/// A legacy line item referencing a catalog resource by id
/// (through the alias map).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRef {
    #[serde(rename = "resourceId")]
    pub resource_id: String,
    #[serde(rename = "tipo")]
    pub kind: RefKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coef: Option<f64>,
    #[serde(rename = "merma", default, skip_serializing_if = "Option::is_none")]
    pub waste_factor: Option<f64>,
    #[serde(
        rename = "rendimiento",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub yield_rate: Option<f64>,
}

/// The representation a composite item is costed from.
///
/// Stored records may carry both shapes; `CompositeItem::representation`
/// applies the total precedence rule (populated sections always win) so
/// costing can branch on an exhaustive match.
#[derive(Debug, Clone, Copy)]
pub enum Representation<'a> {
    Sections(&'a SectionSet),
    Legacy(&'a [ItemRef]),
}

/// A composite cost item ("unit price analysis"): one unit of finished work
/// described either by captured section rows or by legacy resource refs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeItem {
    pub id: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "unidadSalida", default)]
    pub output_unit: String,
    #[serde(rename = "secciones", default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<SectionSet>,
    #[serde(rename = "items", default, skip_serializing_if = "Vec::is_empty")]
    pub legacy_items: Vec<ItemRef>,
}

impl CompositeItem {
    /// Select the authoritative representation. Sections win whenever any
    /// section (including extras) holds a row; this precedence is total and
    /// not configurable.
    pub fn representation(&self) -> Representation<'_> {
        match &self.sections {
            Some(s) if s.has_rows() => Representation::Sections(s),
            _ => Representation::Legacy(&self.legacy_items),
        }
    }

    /// True if any section row exists.
    pub fn has_section_rows(&self) -> bool {
        self.sections.as_ref().is_some_and(SectionSet::has_rows)
    }
}
