//! Online speaker identification from voice embeddings.
//!
//! Implements greedy, threshold-gated centroid clustering: each incoming
//! embedding either joins the closest existing speaker profile or mints a
//! new one. Single pass, no re-clustering, no merging — appropriate for
//! short live sessions with a handful of speakers.

pub mod registry;
pub mod vector;

pub use registry::{SpeakerProfile, SpeakerRegistry};
pub use vector::{centroid, cosine_similarity, normalize};
