use serde::{Deserialize, Serialize};

/// A candidate-duplicate cluster. Ephemeral: computed on demand for review,
/// never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// Seed item id of the cluster.
    pub key: String,
    /// Normalized unit shared by the cluster (seed's unit when units are
    /// not required to match).
    pub unit: String,
    /// Ids of all members, seed first. Always at least two.
    pub member_ids: Vec<String>,
    /// Raw (unfolded) descriptions, parallel to `member_ids`.
    pub labels: Vec<String>,
}
