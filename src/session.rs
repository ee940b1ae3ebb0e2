//! Recognition session lifecycle.
//!
//! One session owns one speaker registry and one result dispatcher for
//! exactly as long as it runs. The session task is the single consumer of
//! recognizer messages, so registry and pending-slot mutation need no
//! locking; callers interact only through channels.

use crate::config::Config;
use crate::dispatcher::ResultDispatcher;
use crate::error::{DiaristError, Result};
use crate::event::{SessionCompletion, SessionEvent};
use crate::recognizer::RecognizerMessage;
use log::{info, warn};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// A running recognition session.
///
/// Dropping the handle without calling [`Session::stop`] closes the
/// message channel, which also shuts the session task down cleanly.
pub struct Session {
    message_tx: mpsc::Sender<RecognizerMessage>,
    event_rx: crossbeam_channel::Receiver<SessionEvent>,
    completion_rx: Option<oneshot::Receiver<SessionCompletion>>,
    task: JoinHandle<()>,
}

impl Session {
    /// Start a session and spawn its processing task.
    pub fn start(config: Config) -> Self {
        let (message_tx, message_rx) = mpsc::channel(config.session.queue_capacity);
        let (event_tx, event_rx) = crossbeam_channel::unbounded();
        let (completion_tx, completion_rx) = oneshot::channel();

        let resume_on_error = config.session.resume_on_error;
        let dispatcher =
            ResultDispatcher::new(config.diarization, event_tx, Some(completion_tx));

        let task = tokio::spawn(run_session(message_rx, dispatcher, resume_on_error));

        Self {
            message_tx,
            event_rx,
            completion_rx: Some(completion_rx),
            task,
        }
    }

    /// Sender for the recognition engine to push messages into.
    pub fn recognizer_input(&self) -> mpsc::Sender<RecognizerMessage> {
        self.message_tx.clone()
    }

    /// Receiver for the live event stream.
    pub fn events(&self) -> crossbeam_channel::Receiver<SessionEvent> {
        self.event_rx.clone()
    }

    /// Take the one-shot completion channel.
    ///
    /// Resolved exactly once: by the first final hypothesis, an engine
    /// error or timeout, or session teardown. Returns `None` if already
    /// taken.
    pub fn completion(&mut self) -> Option<oneshot::Receiver<SessionCompletion>> {
        self.completion_rx.take()
    }

    /// Stop the session: close the input channel and wait for the task
    /// to finish its teardown.
    ///
    /// Teardown clears the registry and explicitly fails any still
    /// pending completion, so no caller is left waiting.
    pub async fn stop(self) -> Result<()> {
        drop(self.message_tx);
        self.task.await.map_err(|e| DiaristError::Recognizer {
            message: format!("session task panicked: {}", e),
        })
    }
}

/// Session receive loop: pure translation from recognizer message to
/// dispatcher call.
async fn run_session(
    mut message_rx: mpsc::Receiver<RecognizerMessage>,
    mut dispatcher: ResultDispatcher,
    resume_on_error: bool,
) {
    dispatcher.emit_status("Recognition started");

    while let Some(message) = message_rx.recv().await {
        match message {
            RecognizerMessage::Partial(raw) => {
                if let Err(e) = dispatcher.handle_partial(&raw) {
                    warn!("dropping malformed partial hypothesis: {}", e);
                }
            }
            RecognizerMessage::Final(raw) => {
                if let Err(e) = dispatcher.handle_final(&raw) {
                    warn!("dropping malformed final hypothesis: {}", e);
                }
            }
            RecognizerMessage::Error(message) => {
                warn!("recognizer error: {}", message);
                dispatcher.emit_status("Recognition error");
                dispatcher.resolve_pending(SessionCompletion::Error { message });
                if !resume_on_error {
                    break;
                }
                // Resume listening: the engine restarts its stream and
                // keeps pushing into the same session.
            }
            RecognizerMessage::Timeout => {
                warn!("recognizer timeout");
                dispatcher.emit_status("Recognition timeout");
                dispatcher.resolve_pending(SessionCompletion::Timeout);
                if !resume_on_error {
                    break;
                }
            }
        }
    }

    info!(
        "session finished with {} tracked speaker(s)",
        dispatcher.registry().speaker_count()
    );
    dispatcher.emit_status("Recognition stopped");
    dispatcher.teardown();
}
