//! Duplicate grouping over the APU catalog.
//!
//! Greedy single-pass clustering: walk items in input order, open a bucket
//! at the first unassigned item, pull in every later unassigned item whose
//! unit is compatible and whose description clears the similarity
//! threshold. O(n²) comparisons — fine for catalogs of a few thousand
//! entries, not for web-scale corpora.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use obra_core::constants::DEFAULT_DUPLICATE_THRESHOLD;
use obra_core::{AliasMap, CompositeItem, DuplicateGroup};

use crate::similarity::{similarity_with, SimilarityWeights};
use crate::units::normalize_unit;

/// Tuning knobs for duplicate grouping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    /// Minimum similarity for two items to share a bucket.
    pub threshold: f64,
    /// Require normalized output units to match before comparing text.
    pub same_unit_required: bool,
    pub weights: SimilarityWeights,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_DUPLICATE_THRESHOLD,
            same_unit_required: true,
            weights: SimilarityWeights::default(),
        }
    }
}

/// Outcome of a group merge: the updated alias map and the catalog ids the
/// caller should delete. The engine owns no catalog storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeOutcome {
    pub aliases: AliasMap,
    pub removed_ids: Vec<String>,
}

/// Cluster catalog items into candidate-duplicate groups. Only buckets with
/// at least two members are returned; items keep input order inside each
/// bucket and the seed item provides the group key and unit.
pub fn find_duplicate_groups(
    items: &[CompositeItem],
    config: &GroupingConfig,
) -> Vec<DuplicateGroup> {
    let units: Vec<String> = items
        .iter()
        .map(|i| normalize_unit(&i.output_unit))
        .collect();

    let mut assigned = vec![false; items.len()];
    let mut groups = Vec::new();

    for i in 0..items.len() {
        if assigned[i] {
            continue;
        }
        let mut members = vec![i];
        for j in (i + 1)..items.len() {
            if assigned[j] {
                continue;
            }
            if config.same_unit_required && units[i] != units[j] {
                continue;
            }
            let score = similarity_with(
                &items[i].description,
                &items[j].description,
                &config.weights,
            );
            if score >= config.threshold {
                debug!(
                    seed = %items[i].id,
                    candidate = %items[j].id,
                    score,
                    "duplicate candidate matched"
                );
                members.push(j);
                assigned[j] = true;
            }
        }
        if members.len() >= 2 {
            assigned[i] = true;
            groups.push(DuplicateGroup {
                key: items[i].id.clone(),
                unit: units[i].clone(),
                member_ids: members.iter().map(|&k| items[k].id.clone()).collect(),
                labels: members
                    .iter()
                    .map(|&k| items[k].description.clone())
                    .collect(),
            });
        }
    }

    info!(
        items = items.len(),
        groups = groups.len(),
        threshold = config.threshold,
        "duplicate grouping pass finished"
    );
    groups
}

/// Merge a reviewed group into its surviving target: returns a new alias
/// map with `dup → target` entries and, when `remove_duplicates` is set,
/// the duplicate ids the caller should drop from the catalog.
pub fn merge_group(
    aliases: &AliasMap,
    target_id: &str,
    duplicate_ids: &[String],
    remove_duplicates: bool,
) -> MergeOutcome {
    let mut updated = aliases.clone();
    updated.merge(target_id, duplicate_ids);

    let removed_ids: Vec<String> = if remove_duplicates {
        duplicate_ids
            .iter()
            .filter(|d| d.as_str() != target_id)
            .cloned()
            .collect()
    } else {
        Vec::new()
    };

    info!(
        target = %target_id,
        duplicates = duplicate_ids.len(),
        removed = removed_ids.len(),
        "merged duplicate group"
    );
    MergeOutcome {
        aliases: updated,
        removed_ids,
    }
}
