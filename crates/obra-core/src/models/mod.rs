//! Catalog data model.
//!
//! All record shapes carry the Spanish wire field names used by the stored
//! catalogs (`tipo`, `nombre`, `unidad`, `precio`, ...) as stable serde
//! contracts, mapped to English Rust names.

mod alias;
mod cost;
mod group;
mod item;
mod resource;

pub use alias::AliasMap;
pub use cost::{CostBreakdown, CostResolution, IncompleteReport};
pub use group::DuplicateGroup;
pub use item::{CompositeItem, ExtraSection, ItemRef, RefKind, Representation, Row, SectionSet};
pub use resource::{Resource, ResourceKind};
