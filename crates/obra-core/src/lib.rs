//! # obra-core
//!
//! Foundation crate for the Obra cost-resolution engine.
//! Defines the catalog models, the alias-indirection map, errors, and the
//! tuned matching constants. Every other crate in the workspace depends on
//! this.

pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use errors::AliasError;
pub use models::{
    AliasMap, CompositeItem, CostBreakdown, CostResolution, DuplicateGroup, ExtraSection,
    IncompleteReport, ItemRef, RefKind, Representation, Resource, ResourceKind, Row, SectionSet,
};
