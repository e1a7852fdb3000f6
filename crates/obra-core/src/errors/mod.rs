//! Error types, one file per concern.

mod alias_error;

pub use alias_error::AliasError;
