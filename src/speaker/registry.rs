//! Session-scoped speaker registry.
//!
//! Owns every speaker profile observed during one recognition session and
//! assigns each incoming embedding to an existing or freshly minted
//! speaker. State lives exactly as long as the session; there is no
//! persistence across sessions.

use crate::config::DiarizationConfig;
use crate::error::{DiaristError, Result};
use crate::speaker::vector::{centroid, cosine_similarity, normalize};
use log::{debug, warn};

/// One tracked speaker: a stable label and the normalized embeddings of
/// every utterance assigned to it so far.
#[derive(Debug, Clone)]
pub struct SpeakerProfile {
    /// Display label, e.g. "Speaker 1". Stable for the session.
    pub label: String,
    /// Member embeddings, each already unit-normalized on insertion.
    embeddings: Vec<Vec<f32>>,
}

impl SpeakerProfile {
    fn new(label: String, embedding: Vec<f32>) -> Self {
        Self {
            label,
            embeddings: vec![embedding],
        }
    }

    /// Dimension-wise mean of the member embeddings.
    ///
    /// Derived on demand, never cached: profile membership changes on
    /// every assignment. Members are unit length, so the centroid is
    /// bounded but not itself guaranteed unit length.
    pub fn centroid(&self) -> Vec<f32> {
        centroid(&self.embeddings)
    }

    /// Number of utterances assigned to this speaker.
    pub fn sample_count(&self) -> usize {
        self.embeddings.len()
    }
}

/// Registry of the speakers heard so far in one session.
///
/// Profiles are kept in creation order; that order is the deterministic
/// tie-break when two centroids score identically against a probe.
#[derive(Debug, Clone)]
pub struct SpeakerRegistry {
    profiles: Vec<SpeakerProfile>,
    /// Monotonic counter used to mint labels. Never decremented.
    speaker_count: usize,
    /// Embedding dimensionality, established by the first embedding seen.
    dimension: Option<usize>,
    config: DiarizationConfig,
}

impl SpeakerRegistry {
    /// Creates an empty registry with the given diarization settings.
    pub fn new(config: DiarizationConfig) -> Self {
        Self {
            profiles: Vec::new(),
            speaker_count: 0,
            dimension: None,
            config,
        }
    }

    /// Assign an embedding to a speaker, creating one if nothing matches.
    ///
    /// The input is unit-normalized, then scored by cosine similarity
    /// against each profile's centroid in creation order. The strictly
    /// best-scoring profile wins; on an exact tie the earlier-created
    /// profile is kept (running-best scan with `>`). If the best score
    /// does not exceed the similarity threshold, a new speaker is minted.
    ///
    /// A zero-magnitude embedding cannot be normalized; it is treated as
    /// matching nothing and deterministically mints a new speaker whose
    /// zero-valued profile can never attract later utterances.
    ///
    /// # Errors
    /// Returns [`DiaristError::EmptyEmbedding`] for an empty input and
    /// [`DiaristError::EmbeddingDimensionMismatch`] when the input length
    /// disagrees with the dimensionality established earlier in the
    /// session — both are engine-contract violations, not runtime
    /// branches.
    pub fn identify_or_create(&mut self, embedding: &[f32]) -> Result<String> {
        if embedding.is_empty() {
            return Err(DiaristError::EmptyEmbedding);
        }
        if let Some(expected) = self.dimension
            && embedding.len() != expected
        {
            return Err(DiaristError::EmbeddingDimensionMismatch {
                expected,
                actual: embedding.len(),
            });
        }
        self.dimension = Some(embedding.len());

        let Some(normalized) = normalize(embedding) else {
            warn!("zero-magnitude embedding, assigning a new speaker");
            return Ok(self.mint_speaker(embedding.to_vec()));
        };

        let mut best_match: Option<usize> = None;
        let mut highest_similarity = f32::NEG_INFINITY;

        for (index, profile) in self.profiles.iter().enumerate() {
            let similarity = cosine_similarity(&normalized, &profile.centroid());
            if similarity > highest_similarity {
                highest_similarity = similarity;
                best_match = Some(index);
            }
        }

        if highest_similarity > self.config.similarity_threshold
            && let Some(index) = best_match
        {
            let profile = &mut self.profiles[index];
            profile.embeddings.push(normalized);
            debug!(
                "matched '{}' with similarity {:.3} ({} samples)",
                profile.label,
                highest_similarity,
                profile.sample_count()
            );
            return Ok(profile.label.clone());
        }

        Ok(self.mint_speaker(normalized))
    }

    fn mint_speaker(&mut self, embedding: Vec<f32>) -> String {
        self.speaker_count += 1;
        let label = format!("{} {}", self.config.label_prefix, self.speaker_count);
        debug!("new speaker '{}'", label);
        self.profiles.push(SpeakerProfile::new(label.clone(), embedding));
        label
    }

    /// Number of distinct speakers minted so far.
    pub fn speaker_count(&self) -> usize {
        self.speaker_count
    }

    /// Profiles in creation order.
    pub fn profiles(&self) -> &[SpeakerProfile] {
        &self.profiles
    }

    /// Drop all profiles and reset the counter and dimensionality.
    ///
    /// Called on session teardown; labels restart at "Speaker 1".
    pub fn clear(&mut self) {
        self.profiles.clear();
        self.speaker_count = 0;
        self.dimension = None;
    }
}

impl Default for SpeakerRegistry {
    fn default() -> Self {
        Self::new(DiarizationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_creates_speaker_1() {
        let mut registry = SpeakerRegistry::default();
        let label = registry
            .identify_or_create(&[0.1, 0.2, 0.3])
            .expect("should assign");

        assert_eq!(label, "Speaker 1");
        assert_eq!(registry.speaker_count(), 1);
        assert_eq!(registry.profiles().len(), 1);
    }

    #[test]
    fn test_similar_embeddings_share_a_label() {
        let mut registry = SpeakerRegistry::default();
        // Nearly collinear: cosine similarity well above 0.45.
        let first = registry
            .identify_or_create(&[1.0, 0.0, 0.0])
            .expect("should assign");
        let second = registry
            .identify_or_create(&[0.9, 0.1, 0.0])
            .expect("should assign");

        assert_eq!(first, second);
        assert_eq!(registry.speaker_count(), 1);
        assert_eq!(registry.profiles()[0].sample_count(), 2);
    }

    #[test]
    fn test_dissimilar_embeddings_get_distinct_labels() {
        let mut registry = SpeakerRegistry::default();
        // Orthogonal: cosine similarity 0.0 <= 0.45.
        let first = registry
            .identify_or_create(&[1.0, 0.0, 0.0])
            .expect("should assign");
        let second = registry
            .identify_or_create(&[0.0, 1.0, 0.0])
            .expect("should assign");

        assert_eq!(first, "Speaker 1");
        assert_eq!(second, "Speaker 2");
    }

    #[test]
    fn test_repeated_identical_embedding_keeps_its_label() {
        let mut registry = SpeakerRegistry::default();
        let first = registry
            .identify_or_create(&[0.5, 0.5, 0.1])
            .expect("should assign");
        let second = registry
            .identify_or_create(&[0.5, 0.5, 0.1])
            .expect("should assign");

        assert_eq!(first, second);
        assert_eq!(registry.speaker_count(), 1);
    }

    #[test]
    fn test_tie_break_prefers_earlier_profile() {
        let mut registry = SpeakerRegistry::default();
        // Two profiles whose unit centroids are mirror images across the
        // x-axis; orthogonal to each other, so they stay separate.
        registry
            .identify_or_create(&[1.0, 1.0])
            .expect("should assign");
        registry
            .identify_or_create(&[1.0, -1.0])
            .expect("should assign");
        assert_eq!(registry.speaker_count(), 2);

        // A probe on the x-axis scores identically against both centroids
        // (1/sqrt(2) each); strict-greater comparison keeps the first.
        let label = registry
            .identify_or_create(&[1.0, 0.0])
            .expect("should assign");
        assert_eq!(label, "Speaker 1");
    }

    #[test]
    fn test_zero_magnitude_embedding_mints_new_speaker() {
        let mut registry = SpeakerRegistry::default();
        registry
            .identify_or_create(&[1.0, 0.0])
            .expect("should assign");

        let label = registry
            .identify_or_create(&[0.0, 0.0])
            .expect("degenerate input must not fail");
        assert_eq!(label, "Speaker 2");

        // The degenerate profile never attracts later utterances.
        let label = registry
            .identify_or_create(&[0.0, 1.0])
            .expect("should assign");
        assert_eq!(label, "Speaker 3");
    }

    #[test]
    fn test_empty_embedding_is_an_error() {
        let mut registry = SpeakerRegistry::default();
        let err = registry.identify_or_create(&[]).unwrap_err();
        assert!(matches!(err, DiaristError::EmptyEmbedding));
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let mut registry = SpeakerRegistry::default();
        registry
            .identify_or_create(&[0.1, 0.2, 0.3])
            .expect("should assign");

        let err = registry.identify_or_create(&[0.1, 0.2]).unwrap_err();
        assert!(matches!(
            err,
            DiaristError::EmbeddingDimensionMismatch {
                expected: 3,
                actual: 2,
            }
        ));
    }

    #[test]
    fn test_centroid_drifts_toward_members() {
        let mut registry = SpeakerRegistry::default();
        registry
            .identify_or_create(&[1.0, 0.0])
            .expect("should assign");
        registry
            .identify_or_create(&[0.8, 0.2])
            .expect("should assign");

        let centroid = registry.profiles()[0].centroid();
        // Mean of two distinct unit vectors sits between them.
        assert!(centroid[0] < 1.0);
        assert!(centroid[1] > 0.0);
    }

    #[test]
    fn test_clear_resets_labels_and_dimension() {
        let mut registry = SpeakerRegistry::default();
        registry
            .identify_or_create(&[0.1, 0.2, 0.3])
            .expect("should assign");
        registry.clear();

        assert_eq!(registry.speaker_count(), 0);
        // Dimensionality re-establishes from the next embedding.
        let label = registry
            .identify_or_create(&[0.4, 0.5])
            .expect("should assign after clear");
        assert_eq!(label, "Speaker 1");
    }

    #[test]
    fn test_custom_label_prefix() {
        let config = DiarizationConfig {
            label_prefix: "Participant".to_string(),
            ..DiarizationConfig::default()
        };
        let mut registry = SpeakerRegistry::new(config);
        let label = registry
            .identify_or_create(&[0.3, 0.4])
            .expect("should assign");
        assert_eq!(label, "Participant 1");
    }
}
