//! Recognition engine boundary.
//!
//! The engine itself (speech-to-text plus embedding extraction) is an
//! external collaborator; this crate only defines the message contract it
//! pushes into a session. A scripted source is provided for tests.

use tokio::sync::mpsc;

/// Messages delivered by the recognition engine to a session.
///
/// `Partial` and `Final` carry the engine's raw hypothesis JSON
/// untouched; parsing happens in the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum RecognizerMessage {
    /// In-progress hypothesis payload.
    Partial(String),
    /// Settled hypothesis payload, possibly with a `"spk"` embedding.
    Final(String),
    /// The engine failed with a message.
    Error(String),
    /// The engine timed out.
    Timeout,
}

/// Scripted recognizer source for testing session behavior.
///
/// Plays a fixed message sequence into a session, standing in for the
/// real engine callback thread.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRecognizer {
    script: Vec<RecognizerMessage>,
}

impl ScriptedRecognizer {
    /// Creates an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the script.
    pub fn with_message(mut self, message: RecognizerMessage) -> Self {
        self.script.push(message);
        self
    }

    /// Append a raw partial hypothesis to the script.
    pub fn with_partial(self, raw: &str) -> Self {
        self.with_message(RecognizerMessage::Partial(raw.to_string()))
    }

    /// Append a raw final hypothesis to the script.
    pub fn with_final(self, raw: &str) -> Self {
        self.with_message(RecognizerMessage::Final(raw.to_string()))
    }

    /// Play the script into the given session input.
    ///
    /// Stops early if the session has gone away.
    pub async fn feed(self, tx: mpsc::Sender<RecognizerMessage>) {
        for message in self.script {
            if tx.send(message).await.is_err() {
                break;
            }
        }
    }
}
