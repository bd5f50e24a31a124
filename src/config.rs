//! Tuning knobs for the response formatter.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Probability `{name}` must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
    #[error("Confidence threshold must be finite, got {0}")]
    NonFiniteThreshold(f32),
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Probabilities for the randomized pipeline stages and the confidence
/// threshold below which answers get uncertainty framing. Answers arrive
/// with a confidence score from the upstream question-answering model;
/// scores under the threshold are framed with a disclaimer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct FormatterConfig {
    pub confidence_threshold: f32,
    pub greeting_probability: f64,
    pub transition_probability: f64,
    pub closing_probability: f64,
    pub code_indicator_probability: f64,
    pub code_explanation_probability: f64,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.3,
            greeting_probability: 0.3,
            transition_probability: 0.4,
            closing_probability: 0.2,
            code_indicator_probability: 0.5,
            code_explanation_probability: 0.6,
        }
    }
}

impl FormatterConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.confidence_threshold.is_finite() {
            return Err(ConfigError::NonFiniteThreshold(self.confidence_threshold));
        }

        let probabilities = [
            ("greeting_probability", self.greeting_probability),
            ("transition_probability", self.transition_probability),
            ("closing_probability", self.closing_probability),
            ("code_indicator_probability", self.code_indicator_probability),
            (
                "code_explanation_probability",
                self.code_explanation_probability,
            ),
        ];

        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }

        Ok(())
    }
}
