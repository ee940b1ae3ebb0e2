//! Result dispatcher: translates recognizer hypotheses into caller events.
//!
//! Consumes partial and final hypothesis records, consults the speaker
//! registry exactly once per final hypothesis that carries an embedding,
//! pushes [`SessionEvent`]s onto the live event stream, and resolves the
//! session's one-shot completion slot on the first final result.

use crate::config::DiarizationConfig;
use crate::error::Result;
use crate::event::{SessionCompletion, SessionEvent};
use crate::hypothesis::RawHypothesis;
use crate::speaker::SpeakerRegistry;
use log::debug;
use tokio::sync::oneshot;

/// Per-session dispatcher. Owns the speaker registry and the pending
/// completion slot; both are mutated only from the session's single
/// processing context.
pub struct ResultDispatcher {
    registry: SpeakerRegistry,
    event_tx: crossbeam_channel::Sender<SessionEvent>,
    /// One-shot completion slot. `take()`n on first resolution so a
    /// second final hypothesis cannot resolve it twice.
    pending: Option<oneshot::Sender<SessionCompletion>>,
    unattributed_label: String,
}

impl ResultDispatcher {
    /// Creates a dispatcher with a fresh registry.
    ///
    /// `pending` is the completion slot for the request that initiated
    /// this session, if the caller is waiting on one.
    pub fn new(
        config: DiarizationConfig,
        event_tx: crossbeam_channel::Sender<SessionEvent>,
        pending: Option<oneshot::Sender<SessionCompletion>>,
    ) -> Self {
        let unattributed_label = config.unattributed_label.clone();
        Self {
            registry: SpeakerRegistry::new(config),
            event_tx,
            pending,
            unattributed_label,
        }
    }

    /// Process a raw partial hypothesis.
    ///
    /// Emits a partial event when the record carries partial text. A
    /// record without the field is skipped — the engine emits empty
    /// partials routinely — and only a structurally invalid payload is
    /// returned as an error.
    pub fn handle_partial(&mut self, raw: &str) -> Result<()> {
        let hypothesis = RawHypothesis::parse(raw)?;

        let Some(text) = hypothesis.partial else {
            debug!("no 'partial' field in partial result: {}", raw);
            return Ok(());
        };

        self.emit(SessionEvent::Partial { result: text });
        Ok(())
    }

    /// Process a raw final hypothesis.
    ///
    /// When the record carries final text: attribute it to a speaker
    /// (via the registry if an embedding is present, else the fixed
    /// unattributed label), emit a final event, and resolve the pending
    /// completion slot — with a partial-shaped payload, matching the
    /// protocol callers already depend on.
    pub fn handle_final(&mut self, raw: &str) -> Result<()> {
        let hypothesis = RawHypothesis::parse(raw)?;

        let Some(ref text) = hypothesis.text else {
            debug!("no 'text' field in final result: {}", raw);
            return Ok(());
        };

        let speaker = match hypothesis.embedding() {
            Some(embedding) => self.registry.identify_or_create(embedding)?,
            None => self.unattributed_label.clone(),
        };

        self.emit(SessionEvent::Final {
            result: text.clone(),
            speaker,
        });

        if let Some(tx) = self.pending.take() {
            let _ = tx.send(SessionCompletion::Resolved(SessionEvent::Partial {
                result: text.clone(),
            }));
        }

        Ok(())
    }

    /// Resolve the pending completion slot with the given outcome.
    ///
    /// Used for engine errors, timeouts, and teardown. No-op when the
    /// slot was already resolved or never existed.
    pub fn resolve_pending(&mut self, completion: SessionCompletion) {
        if let Some(tx) = self.pending.take() {
            let _ = tx.send(completion);
        }
    }

    /// Whether a completion slot is still waiting.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Emit a lifecycle status event to the live stream.
    pub fn emit_status(&self, message: &str) {
        self.emit(SessionEvent::Status {
            result: message.to_string(),
        });
    }

    /// The speaker registry driven by this dispatcher.
    pub fn registry(&self) -> &SpeakerRegistry {
        &self.registry
    }

    /// Clear session state: registry profiles and any pending slot.
    ///
    /// A still-pending completion is explicitly failed, never left
    /// dangling.
    pub fn teardown(&mut self) {
        self.resolve_pending(SessionCompletion::Error {
            message: "Recognition stopped".to_string(),
        });
        self.registry.clear();
    }

    fn emit(&self, event: SessionEvent) {
        // The receiver may be gone (caller stopped following the stream);
        // dropping the event then is fine.
        let _ = self.event_tx.send(event);
    }
}
