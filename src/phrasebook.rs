//! The immutable phrase bank the formatter draws from.
//!
//! Defaults are compiled in; a TOML file can override any category, the
//! same way persona voice files are loaded elsewhere in the assistant.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhrasebookError {
    #[error("Phrase category `{0}` has no entries")]
    EmptyCategory(&'static str),
    #[error("Failed to read phrasebook file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse phrasebook: {0}")]
    Parse(#[from] toml::de::Error),
}

const GREETINGS: &[&str] = &[
    "Great question!",
    "Let me help you with that.",
    "Here's what I can tell you:",
    "That's a fundamental concept in Python.",
    "Excellent question about Python!",
    "I'd be happy to explain that.",
];

const TRANSITIONS: &[&str] = &[
    "Here's how it works:",
    "Let me break it down:",
    "To understand this:",
    "In Python:",
    "The key concept is:",
    "Simply put:",
];

const CLOSINGS: &[&str] = &[
    "Hope this helps!",
    "Let me know if you need clarification!",
    "Feel free to ask more questions!",
    "This should get you started.",
    "Good luck with your interview preparation!",
    "Keep practicing!",
];

const CODE_INDICATORS: &[&str] = &[
    "Here's an example:",
    "For instance:",
    "Sample code:",
    "Example implementation:",
    "Code example:",
    "Try this:",
];

// Disclaimers keep their trailing space so the lowercased answer can be
// appended directly.
const DISCLAIMERS: &[&str] = &[
    "I'm not entirely certain, but ",
    "Based on my understanding, ",
    "From what I know, ",
    "I believe ",
    "It seems that ",
];

const FALLBACKS: &[&str] = &[
    "I'm sorry, I don't have enough information to answer that specific question.",
    "That's a great question, but I need more context to provide a helpful answer.",
    "I'm not sure about that particular topic. Could you rephrase the question?",
    "That question is beyond my current knowledge. Try asking about basic Python concepts.",
    "I'd love to help, but I need a clearer question to provide a good answer.",
];

const SUGGESTIONS: &[&str] = &[
    "You might want to try asking about Python basics like variables, functions, or data structures.",
    "Consider asking about specific Python concepts like lists, dictionaries, or loops.",
    "Try asking about Python programming fundamentals or interview preparation topics.",
    "Feel free to ask about Python syntax, data types, or common programming patterns.",
];

const CODE_EXPLANATIONS: &[&str] = &[
    "This code demonstrates:",
    "Here's how you can implement it:",
    "The following example shows:",
    "You can use this approach:",
    "This pattern is useful for:",
];

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PhraseBank {
    pub greetings: Vec<String>,
    pub transitions: Vec<String>,
    pub closings: Vec<String>,
    pub code_indicators: Vec<String>,
    pub disclaimers: Vec<String>,
    pub fallbacks: Vec<String>,
    pub suggestions: Vec<String>,
    pub code_explanations: Vec<String>,
}

impl Default for PhraseBank {
    fn default() -> Self {
        Self {
            greetings: owned(GREETINGS),
            transitions: owned(TRANSITIONS),
            closings: owned(CLOSINGS),
            code_indicators: owned(CODE_INDICATORS),
            disclaimers: owned(DISCLAIMERS),
            fallbacks: owned(FALLBACKS),
            suggestions: owned(SUGGESTIONS),
            code_explanations: owned(CODE_EXPLANATIONS),
        }
    }
}

impl PhraseBank {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PhrasebookError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Missing categories fall back to the built-in phrases; present ones
    /// replace them wholesale and must not be empty.
    pub fn from_toml_str(raw: &str) -> Result<Self, PhrasebookError> {
        let bank: Self = toml::from_str(raw)?;
        bank.validate()?;
        Ok(bank)
    }

    pub fn validate(&self) -> Result<(), PhrasebookError> {
        let categories = [
            ("greetings", &self.greetings),
            ("transitions", &self.transitions),
            ("closings", &self.closings),
            ("code_indicators", &self.code_indicators),
            ("disclaimers", &self.disclaimers),
            ("fallbacks", &self.fallbacks),
            ("suggestions", &self.suggestions),
            ("code_explanations", &self.code_explanations),
        ];

        for (name, phrases) in categories {
            if phrases.is_empty() {
                return Err(PhrasebookError::EmptyCategory(name));
            }
        }

        Ok(())
    }

    pub fn greeting<R: Rng>(&self, rng: &mut R) -> Result<&str, PhrasebookError> {
        pick(rng, &self.greetings, "greetings")
    }

    pub fn transition<R: Rng>(&self, rng: &mut R) -> Result<&str, PhrasebookError> {
        pick(rng, &self.transitions, "transitions")
    }

    pub fn closing<R: Rng>(&self, rng: &mut R) -> Result<&str, PhrasebookError> {
        pick(rng, &self.closings, "closings")
    }

    pub fn code_indicator<R: Rng>(&self, rng: &mut R) -> Result<&str, PhrasebookError> {
        pick(rng, &self.code_indicators, "code_indicators")
    }

    pub fn disclaimer<R: Rng>(&self, rng: &mut R) -> Result<&str, PhrasebookError> {
        pick(rng, &self.disclaimers, "disclaimers")
    }

    pub fn fallback<R: Rng>(&self, rng: &mut R) -> Result<&str, PhrasebookError> {
        pick(rng, &self.fallbacks, "fallbacks")
    }

    pub fn suggestion<R: Rng>(&self, rng: &mut R) -> Result<&str, PhrasebookError> {
        pick(rng, &self.suggestions, "suggestions")
    }

    pub fn code_explanation<R: Rng>(&self, rng: &mut R) -> Result<&str, PhrasebookError> {
        pick(rng, &self.code_explanations, "code_explanations")
    }
}

fn owned(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|phrase| phrase.to_string()).collect()
}

fn pick<'a, R: Rng>(
    rng: &mut R,
    phrases: &'a [String],
    category: &'static str,
) -> Result<&'a str, PhrasebookError> {
    phrases
        .choose(rng)
        .map(String::as_str)
        .ok_or(PhrasebookError::EmptyCategory(category))
}
