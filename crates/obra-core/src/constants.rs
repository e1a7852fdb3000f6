/// Default similarity threshold for duplicate grouping.
///
/// Empirically tuned against real APU catalogs (usable range 0.42–0.44);
/// kept as a configurable default, not re-derived.
pub const DEFAULT_DUPLICATE_THRESHOLD: f64 = 0.43;

/// Weight of the trigram-Jaccard term in the similarity score.
pub const DEFAULT_TRIGRAM_WEIGHT: f64 = 0.6;

/// Weight of the token-Jaccard term in the similarity score.
pub const DEFAULT_TOKEN_WEIGHT: f64 = 0.4;

/// Bonus when one folded label contains the other.
pub const DEFAULT_CONTAINMENT_BONUS: f64 = 0.1;

/// Bonus when one folded label is a prefix of the other.
pub const DEFAULT_PREFIX_BONUS: f64 = 0.05;

/// Width of the sliding window used for text trigrams.
pub const TRIGRAM_WIDTH: usize = 3;
