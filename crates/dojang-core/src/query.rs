use crate::types::Term;

/// Category sentinel that disables the category predicate.
pub const ALL_CATEGORIES: &str = "all";

/// Produce the visible subset of terms for the given filter inputs.
///
/// A term is kept iff both predicates hold:
/// - category: `category` is `"all"` (or empty), or equals
///   `term.category` exactly (case-sensitive);
/// - text: `search_text` is empty, or its ASCII-lowercased form is a
///   substring of at least one of the ASCII-lowercased `english_name`,
///   `korean_name`, `romanized`, `belt_learnt`, `category` fields.
///   Hangul compares character-wise; only ASCII is case-folded.
///
/// Output preserves the relative order of `terms`. Pure: no I/O, no
/// side effects, identical inputs give identical output.
pub fn filter<'a>(terms: &'a [Term], search_text: &str, category: &str) -> Vec<&'a Term> {
    let needle = search_text.to_ascii_lowercase();

    terms
        .iter()
        .filter(|term| matches_category(term, category) && matches_text(term, &needle))
        .collect()
}

fn matches_category(term: &Term, category: &str) -> bool {
    category == ALL_CATEGORIES || category.is_empty() || term.category == category
}

/// `needle` must already be ASCII-lowercased.
fn matches_text(term: &Term, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    [
        &term.english_name,
        &term.korean_name,
        &term.romanized,
        &term.belt_learnt,
        &term.category,
    ]
    .into_iter()
    .any(|field| field.to_ascii_lowercase().contains(needle))
}
