pub mod dtw;
pub mod euclidean;
pub mod levenshtein;
