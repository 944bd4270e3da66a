/// Trait for distances between two numeric sequences of possibly different length.
///
/// Designed for static polymorphism: the clustering engine is generic over
/// `M: SequenceMetric`, so the metric call in the assignment loop is
/// monomorphized and inlined.
///
/// Implementations must return a non-negative value and must not retain or
/// mutate state between calls. Inputs are either encoded sequences (ragged)
/// or centroids (dense, `dataset_dim` long), in either argument position.
pub trait SequenceMetric: Clone + Send + Sync {
    /// Short human-readable name, used in log output.
    fn name() -> &'static str;

    /// Distance between `a` and `b`.
    fn distance(a: &[f64], b: &[f64]) -> f64;

    /// Distances from `seq` to every centroid, in centroid order.
    ///
    /// Default implementation loops over `distance()`.
    fn distances_to(seq: &[f64], centroids: &[Vec<f64>]) -> Vec<f64> {
        centroids.iter().map(|c| Self::distance(seq, c)).collect()
    }
}
