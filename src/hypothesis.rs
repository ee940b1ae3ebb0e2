//! Tolerant parsing of raw recognizer hypothesis records.
//!
//! The engine emits JSON objects whose fields vary by kind: partial
//! hypotheses carry `"partial"`, final hypotheses carry `"text"` and
//! sometimes a `"spk"` speaker-embedding array. Missing optional fields
//! are normal (the engine frequently emits empty partials); only input
//! that is not a well-formed JSON object at all is a hard error.

use crate::error::Result;
use serde::Deserialize;

/// One hypothesis record as received from the recognition engine.
///
/// Every field is optional; which ones are present determines how the
/// dispatcher treats the record. Unknown fields (word timings,
/// confidences, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawHypothesis {
    /// In-progress hypothesis text.
    pub partial: Option<String>,
    /// Settled hypothesis text.
    pub text: Option<String>,
    /// Speaker embedding for the utterance, when the engine produced one.
    pub spk: Option<Vec<f32>>,
}

impl RawHypothesis {
    /// Parse a raw hypothesis payload.
    ///
    /// # Errors
    /// Returns [`crate::error::DiaristError::HypothesisParse`] when the
    /// payload is not a well-formed JSON object.
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The embedding, if present and non-empty.
    pub fn embedding(&self) -> Option<&[f32]> {
        match self.spk.as_deref() {
            Some([]) | None => None,
            Some(spk) => Some(spk),
        }
    }
}
