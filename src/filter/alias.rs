//! Alias expansion strategies.
//!
//! An alias function maps one candidate name to the ordered list of forms
//! that are probed against the include/exclude sets.

/// Returns the candidate unchanged as its only alias.
pub fn identity_aliases(candidate: &str) -> Vec<String> {
    vec![candidate.to_string()]
}

/// Returns the lowercased candidate followed by its plural form.
pub fn kind_aliases(candidate: &str) -> Vec<String> {
    let kind = candidate.to_lowercase();
    let plural = pluralize(&kind);
    vec![kind, plural]
}

/// Poor man's pluralizer.
///
/// Words ending in `cy` become `cies`, everything else gets an `s`. Other
/// irregular forms are deliberately left alone.
pub fn pluralize(word: &str) -> String {
    match word.strip_suffix('y') {
        Some(stem) if stem.ends_with('c') => format!("{}ies", stem),
        _ => format!("{}s", word),
    }
}
