use serde::{Deserialize, Serialize};

/// Cost category of a priced resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    #[serde(rename = "material")]
    Material,
    #[serde(rename = "mano_obra")]
    Labor,
    #[serde(rename = "equipo")]
    Equipment,
    #[serde(rename = "servicio")]
    Service,
}

/// A priced catalog resource. Prices are snapshots owned by the catalog;
/// the engine never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    #[serde(rename = "tipo")]
    pub kind: ResourceKind,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "unidad")]
    pub unit: String,
    #[serde(rename = "precio", default)]
    pub unit_price: f64,
}
