use std::collections::BTreeSet;

use crate::profile::vocabulary::TermSet;

/// Strips everything but ASCII letters, digits, and whitespace, then lowercases.
fn simplify(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Skills whose words appear contiguously in the text. Sorted, no duplicates.
pub fn find_matching_skills(text: &str, skills: &TermSet) -> Vec<String> {
    let simplified = simplify(text);
    let words: Vec<&str> = simplified.split_whitespace().collect();

    let mut matched = BTreeSet::new();
    for (display, folded) in skills.entries() {
        let simplified_skill = simplify(folded);
        let needle: Vec<&str> = simplified_skill.split_whitespace().collect();
        if needle.is_empty() {
            continue;
        }
        if words.windows(needle.len()).any(|w| w == needle.as_slice()) {
            matched.insert(display.to_string());
        }
    }
    matched.into_iter().collect()
}

/// Firms mentioned anywhere in the text, in vocabulary order.
pub fn extract_companies(text: &str, firms: &TermSet) -> Vec<String> {
    let haystack = text.to_lowercase();
    firms
        .entries()
        .filter(|(_, folded)| haystack.contains(folded))
        .map(|(display, _)| display.to_string())
        .collect()
}
