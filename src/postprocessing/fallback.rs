//! Canned replies for when model inference fails outright.

use rand::Rng;

use crate::phrasebook::{PhraseBank, PhrasebookError};

/// One fallback sentence plus one topic suggestion, space-separated.
pub fn create_fallback_response<R: Rng>(
    rng: &mut R,
    bank: &PhraseBank,
) -> Result<String, PhrasebookError> {
    let base = bank.fallback(rng)?;
    let suggestion = bank.suggestion(rng)?;
    Ok(format!("{} {}", base, suggestion))
}
