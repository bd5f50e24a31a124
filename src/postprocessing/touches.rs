//! Final punctuation and capitalization polish.

use super::cleaner::{capitalize_first, collapse_whitespace};

/// Idempotent for non-empty input: collapses whitespace, appends a period
/// when no terminal punctuation is present, and uppercases the first
/// character.
pub fn add_final_touches(response: &str) -> String {
    let mut polished = collapse_whitespace(response);
    if polished.is_empty() {
        return polished;
    }

    let terminal = matches!(polished.chars().last(), Some('.') | Some('!') | Some('?'));
    if !terminal {
        polished.push('.');
    }

    capitalize_first(&polished)
}
