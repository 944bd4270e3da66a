//! Dimension and padding helpers for ragged datasets.

/// Length of the longest sequence, i.e. the centroid dimension.
pub fn max_dimension<T>(dataset: &[Vec<T>]) -> usize {
    dataset.iter().map(Vec::len).max().unwrap_or(0)
}

/// Length in characters of the longest string (character-mode datasets).
pub fn max_char_dimension<S: AsRef<str>>(dataset: &[S]) -> usize {
    dataset
        .iter()
        .map(|s| s.as_ref().chars().count())
        .max()
        .unwrap_or(0)
}

/// The all-zero vector of length `dim`.
pub fn zeros(dim: usize) -> Vec<f64> {
    vec![0.0; dim]
}

/// Copy of `seq` extended with zeros up to `dim`. Longer input is returned whole.
pub fn zero_padded(seq: &[f64], dim: usize) -> Vec<f64> {
    let mut out = seq.to_vec();
    if out.len() < dim {
        out.resize(dim, 0.0);
    }
    out
}

/// Smallest and largest value across all sequences, or `None` if there are none.
pub fn value_range(dataset: &[Vec<f64>]) -> Option<(f64, f64)> {
    dataset
        .iter()
        .flat_map(|s| s.iter().copied())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
