use obra_match::{fold_text, normalize_unit, similarity, tokenize, trigrams};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_unit_is_idempotent(raw in ".{0,24}") {
        let once = normalize_unit(&raw);
        prop_assert_eq!(normalize_unit(&once), once);
    }

    #[test]
    fn fold_text_is_idempotent(s in ".{0,80}") {
        let once = fold_text(&s);
        prop_assert_eq!(fold_text(&once), once);
    }

    #[test]
    fn similarity_is_symmetric(a in ".{0,60}", b in ".{0,60}") {
        prop_assert_eq!(similarity(&a, &b).to_bits(), similarity(&b, &a).to_bits());
    }

    #[test]
    fn similarity_is_bounded(a in ".{0,60}", b in ".{0,60}") {
        let s = similarity(&a, &b);
        prop_assert!((0.0..=1.15 + 1e-12).contains(&s), "score = {}", s);
    }

    #[test]
    fn self_similarity_of_non_empty_labels_is_at_least_one(s in "[a-zA-Z0-9]{1,40}") {
        prop_assert!(similarity(&s, &s) >= 1.0);
    }

    #[test]
    fn trigrams_are_always_width_three(s in ".{0,60}") {
        for t in trigrams(&s) {
            prop_assert_eq!(t.chars().count(), 3);
        }
    }

    #[test]
    fn tokens_are_non_empty_alphanumerics(s in ".{0,60}") {
        for t in tokenize(&s) {
            prop_assert!(!t.is_empty());
            prop_assert!(t.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }
}
