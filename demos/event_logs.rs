//! Cluster a small categorical event log with each distance metric.
//!
//! Run with: cargo run --example event_logs
//! Set `RUST_LOG=seqcluster=debug` to watch the iterations.

use seqcluster::{
    Clustering, DtwEngine, EuclideanEngine, KMeansConfig, LevenshteinEngine, Result,
};
use tracing_subscriber::EnvFilter;

fn sessions() -> Vec<Vec<&'static str>> {
    vec![
        vec!["login", "search", "view", "cart", "buy", "logout"],
        vec!["login", "search", "view", "cart", "buy"],
        vec!["login", "view", "cart", "buy", "logout"],
        vec!["signup", "verify", "login"],
        vec!["signup", "verify", "login", "search"],
        vec!["signup", "verify"],
        vec!["login", "search", "search", "search", "logout"],
        vec!["login", "search", "view", "search", "view", "logout"],
    ]
}

fn report(name: &str, result: Result<Clustering<&'static str>>) {
    println!("==================== {name}");
    match result {
        Ok(clustering) => {
            for (i, cluster) in clustering.clusters.iter().enumerate() {
                println!("Cluster {i}:");
                for seq in cluster {
                    println!("  {seq:?}");
                }
            }
            println!(
                "iterations: {}, non-empty clusters: {}, within-cluster SSD: {:.3}",
                clustering.iterations,
                clustering.non_empty_clusters(),
                clustering.sum_of_squared_distances()
            );
        }
        Err(e) => println!("failed: {e}"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data = sessions();
    let config = KMeansConfig::new(3).with_seed(17);

    report("euclidean", EuclideanEngine::new(config.clone()).cluster(&data));
    report("dtw", DtwEngine::new(config.clone()).cluster(&data));
    report("levenshtein", LevenshteinEngine::new(config).cluster(&data));
}
