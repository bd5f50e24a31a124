//! Detects code-like spans and annotates them with lead-in phrases.

use rand::Rng;
use regex::Regex;

use super::conversational::chance;
use crate::config::FormatterConfig;
use crate::phrasebook::{PhraseBank, PhrasebookError};

/// Pattern classes scanned in priority order. The first class that
/// matches anywhere in the text wins and ends the scan, whether or not
/// an indicator is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePattern {
    FunctionCall,
    FunctionDef,
    ClassDef,
    Import,
    FromImport,
    MethodCall,
    Subscript,
}

impl CodePattern {
    pub const ORDERED: [CodePattern; 7] = [
        CodePattern::FunctionCall,
        CodePattern::FunctionDef,
        CodePattern::ClassDef,
        CodePattern::Import,
        CodePattern::FromImport,
        CodePattern::MethodCall,
        CodePattern::Subscript,
    ];

    pub fn pattern(&self) -> &'static str {
        match self {
            CodePattern::FunctionCall => r"\w+\([^)]*\)",
            CodePattern::FunctionDef => r"def \w+[^:]*:",
            CodePattern::ClassDef => r"class \w+[^:]*:",
            CodePattern::Import => r"import \w+",
            CodePattern::FromImport => r"from \w+ import \w+",
            CodePattern::MethodCall => r"\w+\.\w+\([^)]*\)",
            CodePattern::Subscript => r"\w+\[.*?\]",
        }
    }
}

/// The pattern classes compiled once at formatter construction.
pub struct CodeMatchers {
    classes: Vec<(CodePattern, Regex)>,
    keywords: Regex,
}

impl CodeMatchers {
    pub fn compile() -> Result<Self, regex::Error> {
        let mut classes = Vec::with_capacity(CodePattern::ORDERED.len());
        for class in CodePattern::ORDERED {
            classes.push((class, Regex::new(class.pattern())?));
        }
        let keywords = Regex::new(r"def \w+|class \w+|import \w+")?;

        Ok(Self { classes, keywords })
    }

    /// Inserts at most one code-indicator phrase, immediately before the
    /// first occurrence of the first matching pattern class. Skips the
    /// coin flip entirely when an indicator is already present.
    pub fn annotate<R: Rng>(
        &self,
        rng: &mut R,
        bank: &PhraseBank,
        config: &FormatterConfig,
        text: &str,
    ) -> Result<String, PhrasebookError> {
        for (_, regex) in &self.classes {
            if let Some(found) = regex.find(text) {
                if !has_indicator(bank, text) && chance(rng, config.code_indicator_probability) {
                    let indicator = bank.code_indicator(rng)?;
                    return Ok(insert_before(text, found.start(), indicator));
                }
                break;
            }
        }

        Ok(text.to_string())
    }

    /// Standalone enhancement pass, not part of the main pipeline:
    /// prepends an explanatory phrase before the first
    /// definition/import keyword.
    pub fn enhance_examples<R: Rng>(
        &self,
        rng: &mut R,
        bank: &PhraseBank,
        config: &FormatterConfig,
        text: &str,
    ) -> Result<String, PhrasebookError> {
        if let Some(found) = self.keywords.find(text) {
            if chance(rng, config.code_explanation_probability) {
                let explanation = bank.code_explanation(rng)?;
                return Ok(insert_before(text, found.start(), explanation));
            }
        }

        Ok(text.to_string())
    }
}

fn has_indicator(bank: &PhraseBank, text: &str) -> bool {
    bank.code_indicators
        .iter()
        .any(|indicator| text.contains(indicator.as_str()))
}

fn insert_before(text: &str, at: usize, phrase: &str) -> String {
    let mut annotated = String::with_capacity(text.len() + phrase.len() + 1);
    annotated.push_str(&text[..at]);
    annotated.push_str(phrase);
    annotated.push(' ');
    annotated.push_str(&text[at..]);
    annotated
}
