//! Tag extraction from ticket titles
//!
//! Titles are the only source of skill tags. Extraction is a pure keyword
//! heuristic: separator characters become spaces, short tokens are dropped,
//! edge punctuation is trimmed, and each surviving token is title-cased into
//! a canonical tag.

use std::collections::BTreeSet;

const EDGE_PUNCTUATION: &[char] = &['.', ',', ':', ';', '!', '?'];

/// Extract normalized skill tags from a ticket title.
///
/// Returns a `BTreeSet` so tag iteration order is always lexicographic;
/// matched-skill rationale text and score tie-breaking both observe that
/// order, and it must not vary between runs.
///
/// # Examples
///
/// ```
/// use triage::assignment::extract_tags;
///
/// let tags = extract_tags("Reset-Password_Issue");
/// assert!(tags.contains("Reset"));
/// assert!(tags.contains("Password"));
/// assert!(tags.contains("Issue"));
/// ```
pub fn extract_tags(title: &str) -> BTreeSet<String> {
    title
        .replace(['-', '_', '(', ')'], " ")
        .split_whitespace()
        // Length gate applies to the raw token, before punctuation trimming
        .filter(|word| word.chars().count() > 2)
        .map(|word| {
            let token = word.trim_matches(EDGE_PUNCTUATION).replace('/', "_");
            title_case(&token)
        })
        .collect()
}

/// Title-case a token: an alphabetic char is uppercased when it follows a
/// non-alphabetic char or the start of the token, lowercased otherwise.
/// Non-alphabetic chars pass through and start a new sub-word.
fn title_case(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut prev_alphabetic = false;
    for c in token.chars() {
        if c.is_alphabetic() {
            if prev_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(c);
            prev_alphabetic = false;
        }
    }
    out
}
