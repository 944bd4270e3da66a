pub mod algorithms;
pub mod core;
pub mod metrics;

pub use crate::algorithms::kmeans::k_means;
pub use crate::core::clustering::{Clustering, EmptyClusterPolicy, KMeansConfig, KMeansOutput};
pub use crate::core::codebook::{CharCodeBook, Code, CodeBook, NumericCodeBook};
pub use crate::core::distance_metric::SequenceMetric;
pub use crate::core::error::{ClusterError, Result};
pub use crate::core::sequence::{max_char_dimension, max_dimension, zero_padded, zeros};
pub use crate::metrics::dtw::{dtw_distance, dtw_table, Dtw};
pub use crate::metrics::euclidean::{padded_euclidean, PaddedEuclidean};
pub use crate::metrics::levenshtein::{
    damerau_levenshtein, damerau_levenshtein_str, encoded_levenshtein, EncodedLevenshtein,
};

use std::fmt::Debug;
use std::hash::Hash;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// High-level facade for clustering symbol sequences, generic over distance metric.
///
/// # Examples
///
/// ```
/// use seqcluster::{EuclideanEngine, KMeansConfig};
///
/// let logs = vec![
///     vec!["login", "view", "logout"],
///     vec!["login", "view", "logout"],
///     vec!["signup", "verify"],
/// ];
/// let engine = EuclideanEngine::new(KMeansConfig::new(2).with_seed(7));
/// let result = engine.cluster(&logs).unwrap();
/// assert_eq!(result.clusters.iter().map(Vec::len).sum::<usize>(), logs.len());
/// ```
pub struct Engine<M: SequenceMetric> {
    config: KMeansConfig,
    _metric: std::marker::PhantomData<M>,
}

impl<M: SequenceMetric> Engine<M> {
    /// Create a new engine with the given configuration.
    pub fn new(config: KMeansConfig) -> Self {
        Self {
            config,
            _metric: std::marker::PhantomData,
        }
    }

    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }

    /// Random source for centroid initialization: seeded when the config
    /// carries a seed, OS entropy otherwise.
    fn rng(&self) -> ChaCha8Rng {
        match self.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// Cluster raw symbol sequences.
    ///
    /// Builds a numeric code book over `dataset`, runs k-means on the encoded
    /// sequences and decodes every cluster back to symbols. The code book lives
    /// only for this call.
    pub fn cluster<S>(&self, dataset: &[Vec<S>]) -> Result<Clustering<S>>
    where
        S: Clone + Eq + Hash + Ord + Debug,
    {
        let book = NumericCodeBook::build(dataset)?;
        let encoded = book.encode_numeric(dataset)?;
        let out = self.cluster_encoded(&encoded)?;

        let clusters = out
            .clusters
            .iter()
            .map(|members| book.decode_numeric(members))
            .collect::<Result<Vec<_>>>()?;

        Ok(Clustering {
            clusters,
            centroids: out.centroids,
            assignments: out.assignments,
            iterations: out.iterations,
            delta: out.delta,
            encoded: out.clusters,
        })
    }

    /// Cluster sequences that are already numeric codes.
    pub fn cluster_encoded(&self, data: &[Vec<f64>]) -> Result<KMeansOutput> {
        k_means::<M, _>(data, &self.config, &mut self.rng())
    }
}

/// Engine over zero-padded Euclidean distance.
pub type EuclideanEngine = Engine<PaddedEuclidean>;

/// Engine over Dynamic Time Warping.
pub type DtwEngine = Engine<Dtw>;

/// Engine over Damerau–Levenshtein on character-encoded sequences.
pub type LevenshteinEngine = Engine<EncodedLevenshtein>;
