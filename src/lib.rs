//! diarist - Online speaker diarization for streaming speech recognition.
//!
//! Attributes each recognized utterance to a speaker, in real time and
//! without enrollment, from the speaker embeddings the recognition engine
//! attaches to its final hypotheses.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod defaults;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod hypothesis;
pub mod recognizer;
pub mod session;
pub mod speaker;

// Core pipeline (recognizer → dispatcher → events)
pub use dispatcher::ResultDispatcher;
pub use event::{SessionCompletion, SessionEvent};
pub use hypothesis::RawHypothesis;
pub use recognizer::{RecognizerMessage, ScriptedRecognizer};
pub use session::Session;
pub use speaker::{SpeakerProfile, SpeakerRegistry};

// Error handling
pub use error::{DiaristError, Result};

// Config
pub use config::{Config, DiarizationConfig, SessionConfig};

/// Build version string with optional git commit hash.
///
/// Returns `"0.2.0+abc1234"` when git hash is available, `"0.2.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
