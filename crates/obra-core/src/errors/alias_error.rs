/// Alias-resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AliasError {
    #[error("cyclic alias chain while resolving '{id}'")]
    CycleDetected { id: String },
}
