//! Cleans and normalizes the raw model answer.

/// Substituted whenever the model returns nothing usable.
pub const NO_ANSWER_FALLBACK: &str = "I don't have a specific answer for that question.";

/// Whitespace and punctuation cleanup. Never fails; empty or
/// whitespace-only input maps to [`NO_ANSWER_FALLBACK`].
pub fn clean_answer(answer: &str) -> String {
    if answer.trim().is_empty() {
        return NO_ANSWER_FALLBACK.to_string();
    }

    let collapsed = collapse_whitespace(answer);
    let tightened = strip_space_before_punctuation(&collapsed);
    let spaced = space_out_sentences(&tightened);

    spaced
        .split(". ")
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(". ")
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercases the first character, leaving the rest untouched.
pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn strip_space_before_punctuation(text: &str) -> String {
    let mut tightened = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '.' | ',' | ':' | ';' | '!' | '?') {
            while tightened.ends_with(' ') {
                tightened.pop();
            }
        }
        tightened.push(c);
    }
    tightened
}

/// Ensures a single space between sentence-ending punctuation and a
/// following lowercase letter, so "end.next" reads "end. next".
fn space_out_sentences(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut spaced = String::with_capacity(text.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        spaced.push(c);
        if matches!(c, '.' | '!' | '?') {
            let mut next = i + 1;
            while next < chars.len() && chars[next].is_whitespace() {
                next += 1;
            }
            if next < chars.len() && chars[next].is_ascii_lowercase() {
                spaced.push(' ');
                i = next;
                continue;
            }
        }
        i += 1;
    }

    spaced
}
