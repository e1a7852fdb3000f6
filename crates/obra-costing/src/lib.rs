//! # obra-costing
//!
//! Deterministic cost resolution for composite items: sections-vs-legacy
//! precedence, alias-aware resource lookups, four-way category breakdown,
//! and the incompleteness check used to flag items that cannot yet price.

pub mod engine;
pub mod incomplete;

pub use engine::resolve_cost;
pub use incomplete::detect_incomplete;
