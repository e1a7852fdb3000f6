use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::errors::AliasError;

/// Indirection map from retired catalog ids to their canonical replacement.
///
/// Serializes as the flat `{oldId: canonicalId}` object stored alongside the
/// catalogs. Backed by a `BTreeMap` so round-trips are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasMap(BTreeMap<String, String>);

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow alias entries to convergence.
    ///
    /// Returns the first id absent from the map. A chain that revisits an id
    /// already seen in this resolution is a `CycleDetected` error; the
    /// visited-set guard bounds the walk by the map size.
    pub fn resolve<'a>(&'a self, id: &'a str) -> Result<&'a str, AliasError> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut current = id;
        while let Some(next) = self.0.get(current) {
            if !seen.insert(current) {
                return Err(AliasError::CycleDetected { id: id.to_string() });
            }
            current = next.as_str();
        }
        Ok(current)
    }

    /// Record that every id in `duplicate_ids` (except the target itself)
    /// now redirects to `target_id`.
    ///
    /// Existing entries pointing at a duplicate keep resolving correctly
    /// because `resolve` always runs to convergence, not a single hop.
    pub fn merge(&mut self, target_id: &str, duplicate_ids: &[String]) {
        for dup in duplicate_ids {
            if dup != target_id {
                self.0.insert(dup.clone(), target_id.to_string());
            }
        }
    }

    pub fn insert(&mut self, old_id: impl Into<String>, canonical_id: impl Into<String>) {
        self.0.insert(old_id.into(), canonical_id.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
