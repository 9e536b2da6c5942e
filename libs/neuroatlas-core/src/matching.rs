//! Answer matching for free-text questions.
//!
//! Matching is deliberately lenient: after normalization an answer is
//! accepted on an exact match with any accepted form, or when it contains
//! or is contained in one. There is no edit-distance scoring.

use crate::catalog::Catalog;

/// Lowercase, trim and collapse internal whitespace to single spaces.
pub fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Check `input` against a set of accepted forms.
///
/// Inputs shorter than `min_containment_len` characters (after
/// normalization) only ever match exactly.
pub fn lenient_match(input: &str, accepted: &[&str], min_containment_len: usize) -> bool {
    let input = normalize(input);
    if input.is_empty() {
        return false;
    }

    let accepted: Vec<String> = accepted
        .iter()
        .map(|form| normalize(form))
        .filter(|form| !form.is_empty())
        .collect();

    if accepted.iter().any(|form| *form == input) {
        return true;
    }

    if input.chars().count() < min_containment_len {
        return false;
    }

    accepted
        .iter()
        .any(|form| form.contains(input.as_str()) || input.contains(form.as_str()))
}

/// Grade a typed answer for `target_item_id`.
///
/// Accepted forms are the item's identifier, short code and display name.
/// An id missing from the catalog is compared against the id alone.
pub fn grade_free_text<C: Catalog + ?Sized>(
    catalog: &C,
    input: &str,
    target_item_id: &str,
    min_containment_len: usize,
) -> bool {
    match catalog.item(target_item_id) {
        Some(item) => lenient_match(
            input,
            &[item.id, item.short_code, item.display_name],
            min_containment_len,
        ),
        None => lenient_match(input, &[target_item_id], min_containment_len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::Atlas;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Primary   Motor\tCortex "), "primary motor cortex");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_short_code_case_insensitive() {
        let atlas = Atlas::mouse();
        assert!(grade_free_text(&atlas, "mop", "MOp", 2));
        assert!(grade_free_text(&atlas, "  MOP ", "MOp", 2));
    }

    #[test]
    fn test_full_name_with_messy_whitespace() {
        let atlas = Atlas::mouse();
        assert!(grade_free_text(&atlas, "primary   motor cortex", "MOp", 2));
    }

    #[test]
    fn test_partial_name_contained() {
        let atlas = Atlas::mouse();
        assert!(grade_free_text(&atlas, "motor cortex", "MOp", 2));
        assert!(grade_free_text(&atlas, "the MOp region", "MOp", 2));
    }

    #[test]
    fn test_single_character_never_contained() {
        let atlas = Atlas::mouse();
        assert!(!grade_free_text(&atlas, "m", "MOp", 2));
        assert!(!grade_free_text(&atlas, "p", "MOp", 2));
    }

    #[test]
    fn test_single_character_exact_still_matches() {
        assert!(lenient_match("x", &["X"], 2));
    }

    #[test]
    fn test_empty_input_never_matches() {
        let atlas = Atlas::mouse();
        assert!(!grade_free_text(&atlas, "   ", "MOp", 2));
    }

    #[test]
    fn test_wrong_region_rejected() {
        let atlas = Atlas::mouse();
        assert!(!grade_free_text(&atlas, "cerebellum", "MOp", 2));
    }

    #[test]
    fn test_unknown_target_falls_back_to_id() {
        let atlas = Atlas::mouse();
        assert!(grade_free_text(&atlas, "zz9", "ZZ9", 2));
        assert!(!grade_free_text(&atlas, "motor", "ZZ9", 2));
    }
}
