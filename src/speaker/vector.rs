//! Vector arithmetic for speaker embeddings.

/// Euclidean magnitude of a vector.
pub fn magnitude(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Scale a vector to unit Euclidean length.
///
/// Returns `None` for a zero-magnitude vector, which cannot be normalized.
pub fn normalize(v: &[f32]) -> Option<Vec<f32>> {
    let mag = magnitude(v);
    if mag == 0.0 {
        return None;
    }
    Some(v.iter().map(|x| x / mag).collect())
}

/// Dimension-wise arithmetic mean of a set of equal-length vectors.
///
/// Callers must pass at least one vector; all vectors must share a length.
pub fn centroid(vectors: &[Vec<f32>]) -> Vec<f32> {
    let len = vectors[0].len();
    let mut mean = vec![0.0f32; len];
    for vector in vectors {
        for (acc, x) in mean.iter_mut().zip(vector.iter()) {
            *acc += x;
        }
    }
    let count = vectors.len() as f32;
    for acc in &mut mean {
        *acc /= count;
    }
    mean
}

/// Cosine similarity between two vectors.
///
/// Computed in the generic form (dot product over the product of
/// magnitudes) so correctness does not depend on the operands already
/// being unit length. Returns 0.0 when either operand has zero magnitude
/// or the lengths differ.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a = magnitude(a);
    let norm_b = magnitude(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    #[test]
    fn test_normalize_yields_unit_magnitude() {
        let vectors = vec![
            vec![3.0, 4.0],
            vec![0.1, 0.2, 0.3],
            vec![-7.5, 2.0, 0.0, 1.0],
            vec![1e-3, 1e-3],
        ];
        for v in vectors {
            let unit = normalize(&v).expect("non-zero vector should normalize");
            assert!(
                (magnitude(&unit) - 1.0).abs() < TOLERANCE,
                "normalized {:?} has magnitude {}",
                v,
                magnitude(&unit)
            );
        }
    }

    #[test]
    fn test_normalize_zero_vector_is_none() {
        assert!(normalize(&[0.0, 0.0, 0.0]).is_none());
    }

    #[test]
    fn test_centroid_is_dimension_wise_mean() {
        let vectors = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let mean = centroid(&vectors);
        assert_eq!(mean, vec![0.5, 0.5]);
    }

    #[test]
    fn test_centroid_single_vector_is_identity() {
        let vectors = vec![vec![0.2, -0.4, 0.6]];
        assert_eq!(centroid(&vectors), vec![0.2, -0.4, 0.6]);
    }

    #[test]
    fn test_cosine_similarity() {
        // Same vector should have similarity 1.0
        let a = vec![1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < TOLERANCE);

        // Orthogonal vectors should have similarity 0.0
        let b = vec![0.0, 1.0, 0.0];
        assert!(cosine_similarity(&a, &b).abs() < TOLERANCE);

        // Opposite vectors should have similarity -1.0
        let c = vec![-1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &c) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_cosine_similarity_is_magnitude_invariant() {
        let a = vec![0.3, 0.4];
        let scaled: Vec<f32> = a.iter().map(|x| x * 25.0).collect();
        assert!((cosine_similarity(&a, &scaled) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_cosine_similarity_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    }
}
