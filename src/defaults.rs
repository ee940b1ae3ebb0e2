//! Default configuration constants for diarist.
//!
//! This module provides shared constants used across different configuration types
//! to ensure consistency and eliminate duplication.

/// Default cosine-similarity threshold for assigning an utterance to an
/// existing speaker profile.
///
/// An embedding joins the best-matching profile only when the similarity
/// against that profile's centroid is strictly greater than this value;
/// otherwise a new speaker is created. 0.45 is tuned for x-vector style
/// speaker embeddings from Vosk/Kaldi speaker models.
pub const SIMILARITY_THRESHOLD: f32 = 0.45;

/// Prefix for sequentially minted speaker labels ("Speaker 1", "Speaker 2", ...).
pub const SPEAKER_LABEL_PREFIX: &str = "Speaker";

/// Label used for a final hypothesis that carries no embedding.
///
/// The registry is not consulted in that case; the utterance is attributed
/// to this fixed placeholder.
pub const UNATTRIBUTED_SPEAKER_LABEL: &str = "Speaker";

/// Capacity of the channel carrying recognizer messages into a session.
///
/// Hypothesis records are small and processing is in-memory arithmetic, so
/// a short queue is enough to absorb bursts without backpressuring the
/// recognition engine.
pub const RECOGNIZER_QUEUE_CAPACITY: usize = 64;
