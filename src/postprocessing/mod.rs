//! Final polish of the model answer before it reaches the user.
//!
//! The pipeline structure is fixed (cleanup, then uncertainty framing,
//! then conversational phrasing, then code annotation, then final
//! touches) while the phrase content is drawn at random from the bank.
//! Every failure is absorbed at the public boundary: callers always get
//! a displayable string, worst case a fixed apology.

pub mod cleaner;
pub mod code;
pub mod conversational;
pub mod fallback;
pub mod touches;


use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::{debug, error, instrument, warn};

use crate::config::{ConfigError, FormatterConfig};
use crate::phrasebook::{PhraseBank, PhrasebookError};
use code::CodeMatchers;

pub use cleaner::{clean_answer, NO_ANSWER_FALLBACK};
pub use code::CodePattern;
pub use touches::add_final_touches;

/// Returned whenever the pipeline cannot produce a usable reply.
pub const APOLOGY: &str =
    "I apologize, but I'm having trouble formatting my response. Please try asking the question again.";

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Phrase selection failed: {0}")]
    Phrasebook(#[from] PhrasebookError),
    #[error("Invalid formatter configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Code pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
}

/// Turns raw question-answering output into a conversational reply.
///
/// The formatter owns its pseudo-random source, so formatting takes
/// `&mut self`; the phrase bank and compiled matchers never change after
/// construction, and a formatter is cheap to build per thread.
pub struct ResponseFormatter {
    bank: PhraseBank,
    config: FormatterConfig,
    matchers: CodeMatchers,
    rng: StdRng,
}

impl ResponseFormatter {
    pub fn new() -> Result<Self, FormatError> {
        Self::with_parts(
            PhraseBank::default(),
            FormatterConfig::default(),
            StdRng::from_entropy(),
        )
    }

    /// Deterministic construction for reproducible output.
    pub fn with_seed(seed: u64) -> Result<Self, FormatError> {
        Self::with_parts(
            PhraseBank::default(),
            FormatterConfig::default(),
            StdRng::seed_from_u64(seed),
        )
    }

    /// Full injection constructor. The phrase bank is taken as-is; an
    /// empty category surfaces at call time and is absorbed into the
    /// apology at the boundary.
    pub fn with_parts(
        bank: PhraseBank,
        config: FormatterConfig,
        rng: StdRng,
    ) -> Result<Self, FormatError> {
        config.validate()?;
        let matchers = CodeMatchers::compile()?;

        Ok(Self {
            bank,
            config,
            matchers,
            rng,
        })
    }

    /// The per-turn entry point. Never fails: any pipeline error is
    /// logged and replaced with [`APOLOGY`], never partial output.
    #[instrument(skip(self, raw_answer))]
    pub fn format_response(
        &mut self,
        raw_answer: &str,
        question: Option<&str>,
        confidence: f32,
    ) -> String {
        match self.try_format(raw_answer, question, confidence) {
            Ok(formatted) => formatted,
            Err(err) => {
                error!(error = %err, "Failed to format response, returning apology");
                APOLOGY.to_string()
            }
        }
    }

    /// The same pipeline with the typed error surfaced instead of
    /// absorbed.
    pub fn try_format(
        &mut self,
        raw_answer: &str,
        question: Option<&str>,
        confidence: f32,
    ) -> Result<String, FormatError> {
        debug!(
            raw_length = raw_answer.len(),
            question = question.unwrap_or(""),
            confidence,
            "Formatting model answer"
        );

        let mut answer = cleaner::clean_answer(raw_answer);

        if confidence < self.config.confidence_threshold {
            answer = conversational::add_uncertainty_disclaimer(&mut self.rng, &self.bank, &answer)?;
        }

        let response =
            conversational::add_conversational_elements(&mut self.rng, &self.bank, &self.config, &answer)?;
        let response = self
            .matchers
            .annotate(&mut self.rng, &self.bank, &self.config, &response)?;

        Ok(touches::add_final_touches(&response))
    }

    /// Called by the front-end when model inference itself fails and no
    /// confidence score is available.
    #[instrument(skip(self))]
    pub fn create_fallback_response(&mut self, question: Option<&str>) -> String {
        debug!(question = question.unwrap_or(""), "Building fallback response");

        match fallback::create_fallback_response(&mut self.rng, &self.bank) {
            Ok(response) => response,
            Err(err) => {
                error!(error = %err, "Failed to build fallback response, returning apology");
                APOLOGY.to_string()
            }
        }
    }

    /// Standalone best-effort pass over text that may hold code examples;
    /// on failure the input is returned unchanged.
    pub fn enhance_code_examples(&mut self, text: &str) -> String {
        match self
            .matchers
            .enhance_examples(&mut self.rng, &self.bank, &self.config, text)
        {
            Ok(enhanced) => enhanced,
            Err(err) => {
                warn!(error = %err, "Skipping code example enhancement");
                text.to_string()
            }
        }
    }
}

/// Convenience wrapper: one entropy-seeded formatter, one response.
pub fn format_python_response(answer: &str, question: Option<&str>, confidence: f32) -> String {
    match ResponseFormatter::new() {
        Ok(mut formatter) => formatter.format_response(answer, question, confidence),
        Err(err) => {
            error!(error = %err, "Failed to construct response formatter");
            APOLOGY.to_string()
        }
    }
}
