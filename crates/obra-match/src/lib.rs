//! # obra-match
//!
//! Lexical matching for the APU catalog: text folding and trigram
//! generation, unit-of-measure normalization, the weighted similarity
//! scorer, and greedy duplicate grouping with alias-producing merges.

pub mod grouping;
pub mod similarity;
pub mod text;
pub mod units;

pub use grouping::{find_duplicate_groups, merge_group, GroupingConfig, MergeOutcome};
pub use similarity::{similarity, similarity_with, SimilarityWeights};
pub use text::{fold_text, tokenize, trigrams};
pub use units::normalize_unit;
