//! Structured events emitted to the session's caller.
//!
//! Shapes mirror what the original listener protocol put on the wire:
//! `{"type":"partial","result":...}` and
//! `{"type":"final","result":...,"speaker":...}`.

use serde::{Deserialize, Serialize};

/// Events pushed to the live event stream as hypotheses are processed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SessionEvent {
    /// In-progress hypothesis text. May repeat and be revised.
    Partial { result: String },
    /// Settled hypothesis text attributed to a speaker.
    Final { result: String, speaker: String },
    /// Session lifecycle notice (started, error, timeout, stopped).
    Status { result: String },
}

impl SessionEvent {
    /// Serialize event to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize event from JSON string.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

/// Outcome delivered exactly once per session on its completion channel.
///
/// `Resolved` carries a partial-shaped payload even though it is produced
/// by the first *final* hypothesis — a quirk of the original protocol
/// that downstream callers depend on, so it is preserved as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCompletion {
    /// First final hypothesis arrived; payload is partial-shaped.
    Resolved(SessionEvent),
    /// The recognition engine reported a fatal error.
    Error { message: String },
    /// The recognition engine timed out.
    Timeout,
}
