use rand::Rng;
use tracing::{debug, info, warn};

use crate::core::clustering::{EmptyClusterPolicy, KMeansConfig, KMeansOutput};
use crate::core::distance_metric::SequenceMetric;
use crate::core::error::{ClusterError, Result};
use crate::core::sequence::{max_dimension, value_range, zeros};

/// Draw a `dim`-long centroid uniformly from `[lo, hi]`.
///
/// Integer codes are sampled as integers. If the range holds no integer the
/// values are drawn from the continuous interval instead.
fn random_centroid<R: Rng + ?Sized>(dim: usize, (lo, hi): (f64, f64), rng: &mut R) -> Vec<f64> {
    let (int_lo, int_hi) = (lo.ceil(), hi.floor());
    if int_lo <= int_hi {
        let (int_lo, int_hi) = (int_lo as i64, int_hi as i64);
        (0..dim)
            .map(|_| rng.gen_range(int_lo..=int_hi) as f64)
            .collect()
    } else {
        (0..dim).map(|_| rng.gen_range(lo..=hi)).collect()
    }
}

/// Index of the smallest distance. Ties go to the lowest index.
fn nearest(distances: &[f64]) -> usize {
    let mut best = 0;
    for (i, &d) in distances.iter().enumerate().skip(1) {
        if d < distances[best] {
            best = i;
        }
    }
    best
}

/// Elementwise mean of ragged members.
///
/// A member contributes at index `i` only if it is longer than `i`, but every
/// index is divided by the total member count. Short members therefore pull
/// the tail of the centroid towards zero, as if zero padded.
fn member_mean(members: &[&Vec<f64>], dim: usize) -> Vec<f64> {
    let count = members.len() as f64;
    let mut means = zeros(dim);
    for member in members {
        for (mean, &v) in means.iter_mut().zip(member.iter()) {
            *mean += v / count;
        }
    }
    means
}

/// Run k-means over encoded, possibly ragged sequences with metric `M`.
///
/// # Algorithm
/// 1. Draw `k` centroids of length `dataset_dim` uniformly from the dataset's
///    code range. The initial movement is measured against the zero vector.
/// 2. Assign every sequence to its nearest centroid.
/// 3. Replace each centroid with the mean of its members (see
///    [`EmptyClusterPolicy`] for clusters without members).
/// 4. Repeat 2–3 until the summed centroid movement is `<= tolerance`.
///
/// At least one assign/update pass always runs.
///
/// # Errors
/// - `InvalidConfig` for a config rejected by [`KMeansConfig::validate`]
/// - `EmptyDataset` if `data` is empty or holds only empty sequences
/// - `EmptyCluster` under [`EmptyClusterPolicy::Fail`]
/// - `NotConverged` once `max_iterations` passes ran without converging
pub fn k_means<M, R>(data: &[Vec<f64>], config: &KMeansConfig, rng: &mut R) -> Result<KMeansOutput>
where
    M: SequenceMetric,
    R: Rng + ?Sized,
{
    config.validate()?;
    let range = value_range(data).ok_or(ClusterError::EmptyDataset)?;
    let dim = max_dimension(data);
    let k = config.k;

    let zero = zeros(dim);
    let mut centroids: Vec<Vec<f64>> = (0..k).map(|_| random_centroid(dim, range, rng)).collect();
    let mut delta: f64 = centroids.iter().map(|c| M::distance(&zero, c)).sum();

    info!(
        metric = M::name(),
        k,
        n = data.len(),
        dim,
        initial_delta = delta,
        "starting k-means"
    );

    let mut assignments = vec![0usize; data.len()];
    let mut iterations = 0;

    while iterations == 0 || delta > config.tolerance {
        if iterations == config.max_iterations {
            warn!(iterations, delta, "k-means hit the iteration cap");
            return Err(ClusterError::NotConverged { iterations, delta });
        }
        iterations += 1;

        for (slot, seq) in assignments.iter_mut().zip(data) {
            *slot = nearest(&M::distances_to(seq, &centroids));
        }

        delta = 0.0;
        let mut sizes = vec![0usize; k];
        for (cluster, centroid) in centroids.iter_mut().enumerate() {
            let members: Vec<&Vec<f64>> = data
                .iter()
                .zip(&assignments)
                .filter(|&(_, &a)| a == cluster)
                .map(|(seq, _)| seq)
                .collect();
            sizes[cluster] = members.len();

            let updated = if members.is_empty() {
                match config.empty_cluster {
                    EmptyClusterPolicy::Fail => {
                        return Err(ClusterError::EmptyCluster {
                            cluster,
                            iteration: iterations,
                        });
                    }
                    EmptyClusterPolicy::KeepCentroid => {
                        debug!(cluster, iteration = iterations, "empty cluster keeps its centroid");
                        continue;
                    }
                    EmptyClusterPolicy::Reinitialize => {
                        debug!(cluster, iteration = iterations, "empty cluster reinitialized");
                        random_centroid(dim, range, rng)
                    }
                }
            } else {
                member_mean(&members, dim)
            };

            delta += M::distance(centroid, &updated);
            *centroid = updated;
        }

        debug!(iteration = iterations, delta, sizes = ?sizes, "k-means iteration");
    }

    info!(iterations, delta, "k-means converged");

    let mut clusters: Vec<Vec<Vec<f64>>> = vec![Vec::new(); k];
    for (seq, &cluster) in data.iter().zip(&assignments) {
        clusters[cluster].push(seq.clone());
    }

    Ok(KMeansOutput {
        clusters,
        centroids,
        assignments,
        iterations,
        delta,
    })
}
