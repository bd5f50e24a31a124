//! Conversational response formatting for a placement-prep tutor
//! assistant.
//!
//! The upstream question-answering model produces terse answer spans
//! with no guaranteed grammar or punctuation. This crate turns such a
//! span, plus the source question and the model's confidence score,
//! into a reply fit for a chat window: whitespace and punctuation
//! cleanup, uncertainty framing for low-confidence answers, randomized
//! conversational phrasing, code annotation, and a final capitalization
//! and punctuation pass.

pub mod config;
pub mod phrasebook;
pub mod postprocessing;

pub use config::{ConfigError, FormatterConfig};
pub use phrasebook::{PhraseBank, PhrasebookError};
pub use postprocessing::{format_python_response, FormatError, ResponseFormatter};
