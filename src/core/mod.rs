pub mod clustering;
pub mod codebook;
pub mod distance_metric;
pub mod error;
pub mod sequence;
