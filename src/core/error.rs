use thiserror::Error;

/// Errors returned by the encoder and the clustering engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClusterError {
    /// A symbol was looked up in a code book that never saw it.
    #[error("symbol not present in code book: {0}")]
    UnknownSymbol(String),

    /// A code was looked up in a code book that never produced it.
    #[error("code not present in code book: {0}")]
    UnknownCode(String),

    /// More distinct symbols than the code type can represent.
    #[error("code space exhausted after {assigned} symbols")]
    CodeSpaceExhausted { assigned: usize },

    /// A cluster lost all of its members under `EmptyClusterPolicy::Fail`.
    #[error("cluster {cluster} has no members at iteration {iteration}")]
    EmptyCluster { cluster: usize, iteration: usize },

    /// The iteration cap was reached before centroids stopped moving.
    #[error("k-means did not converge after {iterations} iterations (delta = {delta})")]
    NotConverged { iterations: usize, delta: f64 },

    /// Rejected configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Nothing to cluster.
    #[error("dataset is empty")]
    EmptyDataset,
}

impl ClusterError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ClusterError>;
