use crate::core::distance_metric::SequenceMetric;

/// Euclidean distance with implicit zero padding.
///
/// The shorter sequence is treated as if padded with zeros to the length of
/// the longer one, so past the shorter length only the longer sequence's
/// elements contribute (`x²`). Argument order does not matter.
pub fn padded_euclidean(a: &[f64], b: &[f64]) -> f64 {
    let (long, short) = if a.len() < b.len() { (b, a) } else { (a, b) };
    let shared: f64 = long
        .iter()
        .zip(short)
        .map(|(x, y)| (x - y) * (x - y))
        .sum();
    let tail: f64 = long[short.len()..].iter().map(|x| x * x).sum();
    (shared + tail).sqrt()
}

/// Zero-padded Euclidean distance metric.
///
/// Distance formula: `d = sqrt(sum_i (a_i - b_i)^2)` with missing elements = 0.
#[derive(Debug, Clone)]
pub struct PaddedEuclidean;

impl SequenceMetric for PaddedEuclidean {
    fn name() -> &'static str {
        "euclidean"
    }

    #[inline]
    fn distance(a: &[f64], b: &[f64]) -> f64 {
        padded_euclidean(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_identical_sequences() {
        let a = vec![97.0, 98.0, 99.0];
        let d = PaddedEuclidean::distance(&a, &a);
        assert_eq!(d, 0.0, "Self-distance should be 0, got {d}");
    }

    #[test]
    fn test_distance_equal_length_hand_computed() {
        // (1-4)^2 + (2-6)^2 = 9 + 16 = 25
        let d = padded_euclidean(&[1.0, 2.0], &[4.0, 6.0]);
        assert!((d - 5.0).abs() < 1e-12, "Expected 5, got {d}");
    }

    #[test]
    fn test_distance_pads_shorter_with_zeros() {
        // [3] vs [0, 4] → (3-0)^2 + 4^2 = 25
        let d = padded_euclidean(&[3.0], &[0.0, 4.0]);
        assert!((d - 5.0).abs() < 1e-12, "Expected 5, got {d}");

        // Same as explicitly padding
        let explicit = padded_euclidean(&[3.0, 0.0], &[0.0, 4.0]);
        assert_eq!(d, explicit);
    }

    #[test]
    fn test_distance_symmetric() {
        let cases: [(&[f64], &[f64]); 4] = [
            (&[97.0, 100.0], &[99.0, 98.0, 101.0, 97.0]),
            (&[], &[1.0, 2.0]),
            (&[5.5, 2.25, 1.0], &[0.5]),
            (&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]),
        ];
        for (a, b) in cases {
            assert_eq!(
                PaddedEuclidean::distance(a, b),
                PaddedEuclidean::distance(b, a),
                "Asymmetric for {a:?} vs {b:?}"
            );
        }
    }

    #[test]
    fn test_distance_against_zero_vector_is_norm() {
        let d = padded_euclidean(&[0.0, 0.0, 0.0], &[2.0, 3.0, 6.0]);
        assert!((d - 7.0).abs() < 1e-12, "Expected 7, got {d}");
    }

    #[test]
    fn test_distances_to_preserves_centroid_order() {
        let centroids = vec![vec![0.0, 0.0], vec![3.0, 4.0]];
        let d = PaddedEuclidean::distances_to(&[3.0, 4.0], &centroids);
        assert_eq!(d, vec![5.0, 0.0]);
    }
}
