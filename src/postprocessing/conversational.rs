//! Uncertainty framing and randomized conversational phrasing.

use rand::Rng;

use crate::config::FormatterConfig;
use crate::phrasebook::{PhraseBank, PhrasebookError};

/// Prepends a disclaimer to the lowercased answer. The disclaimer's own
/// capitalization carries the sentence.
pub fn add_uncertainty_disclaimer<R: Rng>(
    rng: &mut R,
    bank: &PhraseBank,
    answer: &str,
) -> Result<String, PhrasebookError> {
    let disclaimer = bank.disclaimer(rng)?;
    Ok(format!("{}{}", disclaimer, answer.to_lowercase()))
}

/// Wraps the answer with greeting, transition, and closing phrases. Each
/// of the three draws is independent, so all eight structural
/// combinations can occur.
pub fn add_conversational_elements<R: Rng>(
    rng: &mut R,
    bank: &PhraseBank,
    config: &FormatterConfig,
    answer: &str,
) -> Result<String, PhrasebookError> {
    let mut parts: Vec<String> = Vec::with_capacity(4);

    if chance(rng, config.greeting_probability) {
        parts.push(bank.greeting(rng)?.to_string());
    }

    if chance(rng, config.transition_probability) {
        parts.push(bank.transition(rng)?.to_string());
    }

    parts.push(answer.to_string());

    if chance(rng, config.closing_probability) {
        parts.push(bank.closing(rng)?.to_string());
    }

    Ok(parts.join(" "))
}

/// Uniform draw in [0, 1) compared against `probability`. Out-of-range
/// probabilities degrade to always/never rather than panicking.
pub(crate) fn chance<R: Rng>(rng: &mut R, probability: f64) -> bool {
    rng.gen::<f64>() < probability
}
