//! Text folding and n-gram generation for catalog labels.
//!
//! Folding: NFKD decomposition → drop non-ASCII (strips combining accents,
//! flattens `²`/`㎡`-style compatibility forms) → lowercase → delete
//! punctuation → collapse whitespace. Deleting punctuation instead of
//! spacing it out keeps hyphenated codes intact: "H-25" folds to "h25" and
//! matches "H25".

use obra_core::constants::TRIGRAM_WIDTH;
use unicode_normalization::UnicodeNormalization;

/// Fold a label into its canonical comparison form: diacritic-free,
/// lowercase, alphanumerics and single spaces only.
pub fn fold_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;
    for c in s.nfkd().filter(char::is_ascii) {
        if c.is_ascii_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() {
            pending_space = true;
        }
    }
    out
}

/// Split a label into folded word tokens, dropping empties.
pub fn tokenize(s: &str) -> Vec<String> {
    fold_text(s)
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// All 3-char sliding windows over the folded label, padded with one
/// leading and one trailing space so word boundaries carry weight.
pub fn trigrams(s: &str) -> Vec<String> {
    let folded = fold_text(s);
    if folded.is_empty() {
        return Vec::new();
    }
    let padded: Vec<char> = std::iter::once(' ')
        .chain(folded.chars())
        .chain(std::iter::once(' '))
        .collect();
    padded
        .windows(TRIGRAM_WIDTH)
        .map(|w| w.iter().collect())
        .collect()
}
