use serde::{Deserialize, Serialize};

use crate::core::error::{ClusterError, Result};
use crate::metrics::euclidean::padded_euclidean;

/// What to do with a centroid whose cluster received no members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyClusterPolicy {
    /// Abort the run with `ClusterError::EmptyCluster`.
    Fail,
    /// Leave the centroid where it was for this iteration.
    #[default]
    KeepCentroid,
    /// Draw a fresh uniform random centroid from the dataset's code range.
    Reinitialize,
}

/// Configuration for a k-means run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KMeansConfig {
    /// Number of clusters.
    pub k: usize,
    /// Iteration cap. Reaching it yields `ClusterError::NotConverged`.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// The loop stops once the summed centroid movement is `<= tolerance`.
    /// The default of 0 stops only when no centroid moved at all.
    #[serde(default)]
    pub tolerance: f64,
    #[serde(default)]
    pub empty_cluster: EmptyClusterPolicy,
    /// Seed for centroid initialization. `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_max_iterations() -> usize {
    300
}

impl KMeansConfig {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iterations: default_max_iterations(),
            tolerance: 0.0,
            empty_cluster: EmptyClusterPolicy::default(),
            seed: None,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_empty_cluster(mut self, policy: EmptyClusterPolicy) -> Self {
        self.empty_cluster = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject parameters the engine cannot run with.
    ///
    /// `k` may exceed the number of sequences; the surplus clusters stay empty
    /// and are handled by the empty-cluster policy.
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(ClusterError::config("k must be > 0"));
        }
        if self.max_iterations == 0 {
            return Err(ClusterError::config("max_iterations must be > 0"));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ClusterError::config(
                "tolerance must be a finite number >= 0",
            ));
        }
        Ok(())
    }
}

/// Raw result of a k-means run over encoded sequences.
#[derive(Debug, Clone)]
pub struct KMeansOutput {
    /// Member sequences of each cluster, in dataset order.
    pub clusters: Vec<Vec<Vec<f64>>>,
    /// Final centroid of each cluster, `dataset_dim` long.
    pub centroids: Vec<Vec<f64>>,
    /// Cluster index of every input sequence.
    pub assignments: Vec<usize>,
    /// Number of assign/update passes performed.
    pub iterations: usize,
    /// Summed centroid movement of the last pass.
    pub delta: f64,
}

/// Clustering of symbol sequences, as returned by the engine facade.
#[derive(Debug, Clone)]
pub struct Clustering<S> {
    /// Member sequences of each cluster in their original symbol form.
    pub clusters: Vec<Vec<Vec<S>>>,
    /// Final centroids in code space. Means cannot be decoded to symbols.
    pub centroids: Vec<Vec<f64>>,
    /// Cluster index of every input sequence.
    pub assignments: Vec<usize>,
    pub iterations: usize,
    pub delta: f64,
    /// Encoded members of each cluster, aligned with `clusters`.
    pub(crate) encoded: Vec<Vec<Vec<f64>>>,
}

impl<S> Clustering<S> {
    /// Number of clusters that ended with at least one member.
    pub fn non_empty_clusters(&self) -> usize {
        self.clusters.iter().filter(|c| !c.is_empty()).count()
    }

    /// Within-cluster sum of squared padded-Euclidean distances to each centroid.
    ///
    /// This is the statistic an elbow sweep over `k` plots.
    pub fn sum_of_squared_distances(&self) -> f64 {
        sum_of_squared_distances(&self.encoded, &self.centroids)
    }
}

impl KMeansOutput {
    pub fn non_empty_clusters(&self) -> usize {
        self.clusters.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn sum_of_squared_distances(&self) -> f64 {
        sum_of_squared_distances(&self.clusters, &self.centroids)
    }
}

fn sum_of_squared_distances(clusters: &[Vec<Vec<f64>>], centroids: &[Vec<f64>]) -> f64 {
    clusters
        .iter()
        .zip(centroids)
        .flat_map(|(members, centroid)| {
            members.iter().map(move |m| {
                let d = padded_euclidean(m, centroid);
                d * d
            })
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = KMeansConfig::new(5);
        assert_eq!(c.k, 5);
        assert_eq!(c.max_iterations, 300);
        assert_eq!(c.tolerance, 0.0);
        assert_eq!(c.empty_cluster, EmptyClusterPolicy::KeepCentroid);
        assert_eq!(c.seed, None);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let c = KMeansConfig::new(2)
            .with_max_iterations(10)
            .with_tolerance(1e-9)
            .with_empty_cluster(EmptyClusterPolicy::Fail)
            .with_seed(7);
        assert_eq!(c.max_iterations, 10);
        assert_eq!(c.tolerance, 1e-9);
        assert_eq!(c.empty_cluster, EmptyClusterPolicy::Fail);
        assert_eq!(c.seed, Some(7));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(
            KMeansConfig::new(0).validate(),
            Err(ClusterError::InvalidConfig(_))
        ));
        assert!(KMeansConfig::new(1).with_max_iterations(0).validate().is_err());
        assert!(KMeansConfig::new(1).with_tolerance(-1.0).validate().is_err());
        assert!(KMeansConfig::new(1).with_tolerance(f64::NAN).validate().is_err());
        assert!(KMeansConfig::new(1)
            .with_tolerance(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let c: KMeansConfig = serde_json::from_str(r#"{"k": 4}"#).unwrap();
        assert_eq!(c, KMeansConfig::new(4));

        let c: KMeansConfig = serde_json::from_str(
            r#"{"k": 3, "max_iterations": 50, "empty_cluster": "reinitialize", "seed": 11}"#,
        )
        .unwrap();
        assert_eq!(c.max_iterations, 50);
        assert_eq!(c.empty_cluster, EmptyClusterPolicy::Reinitialize);
        assert_eq!(c.seed, Some(11));
    }

    #[test]
    fn test_serialize_round_trip() {
        let c = KMeansConfig::new(3).with_seed(1).with_tolerance(0.5);
        let json = serde_json::to_string(&c).unwrap();
        let back: KMeansConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_output_statistics() {
        let out = KMeansOutput {
            clusters: vec![vec![vec![1.0, 1.0], vec![3.0, 1.0]], vec![]],
            centroids: vec![vec![2.0, 1.0], vec![0.0, 0.0]],
            assignments: vec![0, 0],
            iterations: 1,
            delta: 0.0,
        };
        assert_eq!(out.non_empty_clusters(), 1);
        assert!((out.sum_of_squared_distances() - 2.0).abs() < 1e-12);
    }
}
