//! Weighted lexical similarity between catalog labels.
//!
//! Score = trigram-Jaccard * 0.6 + token-Jaccard * 0.4, plus 0.1 when one
//! folded label contains the other and 0.05 when one is a prefix of the
//! other. Range [0, 1.15]; a non-empty label scores 1.15 against itself.
//! The weights are empirically tuned defaults, kept configurable.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use obra_core::constants::{
    DEFAULT_CONTAINMENT_BONUS, DEFAULT_PREFIX_BONUS, DEFAULT_TOKEN_WEIGHT, DEFAULT_TRIGRAM_WEIGHT,
};

use crate::text::{fold_text, tokenize, trigrams};

/// Weights for the similarity terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityWeights {
    pub trigram: f64,
    pub token: f64,
    pub containment_bonus: f64,
    pub prefix_bonus: f64,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            trigram: DEFAULT_TRIGRAM_WEIGHT,
            token: DEFAULT_TOKEN_WEIGHT,
            containment_bonus: DEFAULT_CONTAINMENT_BONUS,
            prefix_bonus: DEFAULT_PREFIX_BONUS,
        }
    }
}

/// Similarity of two labels under the default weights.
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_with(a, b, &SimilarityWeights::default())
}

/// Similarity of two labels under explicit weights. Symmetric in `a`/`b`.
pub fn similarity_with(a: &str, b: &str, weights: &SimilarityWeights) -> f64 {
    let fa = fold_text(a);
    let fb = fold_text(b);

    let tri_a: HashSet<String> = trigrams(a).into_iter().collect();
    let tri_b: HashSet<String> = trigrams(b).into_iter().collect();
    let tok_a: HashSet<String> = tokenize(a).into_iter().collect();
    let tok_b: HashSet<String> = tokenize(b).into_iter().collect();

    let mut score =
        weights.trigram * jaccard(&tri_a, &tri_b) + weights.token * jaccard(&tok_a, &tok_b);

    if !fa.is_empty() && !fb.is_empty() {
        if fa.contains(&fb) || fb.contains(&fa) {
            score += weights.containment_bonus;
        }
        if fa.starts_with(&fb) || fb.starts_with(&fa) {
            score += weights.prefix_bonus;
        }
    }
    score
}

/// |A ∩ B| / |A ∪ B|; zero when either set is empty.
fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;
    intersection / union
}
