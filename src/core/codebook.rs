//! Bijective symbol ↔ code dictionaries.
//!
//! A [`CodeBook`] is built once per run from the unique symbols of a set of
//! sequences. Numeric books hand out `u32` codes starting at 97, character
//! books hand out `char` codes starting at `'a'`. Unique symbols are
//! enumerated in sorted order, so the same input always yields the same codes.

use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use crate::core::error::{ClusterError, Result};

/// A dense surrogate type that can enumerate consecutive values.
pub trait Code: Copy + Eq + Hash + Ord + Debug {
    /// The code assigned to the first symbol.
    const FIRST: Self;

    /// The code following `self`, or `None` once the code space is exhausted.
    fn succ(self) -> Option<Self>;
}

impl Code for u32 {
    const FIRST: u32 = 97;

    fn succ(self) -> Option<Self> {
        self.checked_add(1)
    }
}

impl Code for char {
    const FIRST: char = 'a';

    fn succ(self) -> Option<Self> {
        // Skip the UTF-16 surrogate block, which holds no scalar values.
        let next = match self as u32 + 1 {
            0xD800 => 0xE000,
            n => n,
        };
        char::from_u32(next)
    }
}

/// Forward and inverse mapping between symbols and codes.
#[derive(Debug, Clone)]
pub struct CodeBook<S, C> {
    forward: HashMap<S, C>,
    inverse: HashMap<C, S>,
}

/// Code book for the numeric encoding used by the clustering engine.
pub type NumericCodeBook<S> = CodeBook<S, u32>;

/// Code book for the character encoding used by the Levenshtein metric.
pub type CharCodeBook<S> = CodeBook<S, char>;

impl<S, C> CodeBook<S, C>
where
    S: Clone + Eq + Hash + Ord + Debug,
    C: Code,
{
    /// Build a code book covering every symbol that occurs in `sequences`.
    pub fn build(sequences: &[Vec<S>]) -> Result<Self> {
        let unique: BTreeSet<&S> = sequences
            .iter()
            .flat_map(|seq| seq.iter())
            .collect();

        let mut forward = HashMap::with_capacity(unique.len());
        let mut inverse = HashMap::with_capacity(unique.len());
        let mut next = Some(C::FIRST);

        for symbol in unique {
            let code = next.ok_or(ClusterError::CodeSpaceExhausted {
                assigned: forward.len(),
            })?;
            forward.insert(symbol.clone(), code);
            inverse.insert(code, symbol.clone());
            next = code.succ();
        }

        Ok(Self { forward, inverse })
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn forward(&self) -> &HashMap<S, C> {
        &self.forward
    }

    pub fn inverse(&self) -> &HashMap<C, S> {
        &self.inverse
    }

    /// Look up the code for `symbol`.
    pub fn code(&self, symbol: &S) -> Result<C> {
        self.forward
            .get(symbol)
            .copied()
            .ok_or_else(|| ClusterError::UnknownSymbol(format!("{symbol:?}")))
    }

    /// Look up the symbol behind `code`.
    pub fn symbol(&self, code: C) -> Result<&S> {
        self.inverse
            .get(&code)
            .ok_or_else(|| ClusterError::UnknownCode(format!("{code:?}")))
    }

    pub fn encode_sequence(&self, sequence: &[S]) -> Result<Vec<C>> {
        sequence.iter().map(|s| self.code(s)).collect()
    }

    pub fn decode_sequence(&self, sequence: &[C]) -> Result<Vec<S>> {
        sequence.iter().map(|&c| self.symbol(c).cloned()).collect()
    }

    /// Replace every symbol of every sequence with its code.
    ///
    /// Fails on the first symbol the book does not know.
    pub fn encode(&self, sequences: &[Vec<S>]) -> Result<Vec<Vec<C>>> {
        sequences
            .iter()
            .map(|seq| self.encode_sequence(seq))
            .collect()
    }

    /// Inverse of [`CodeBook::encode`].
    pub fn decode(&self, sequences: &[Vec<C>]) -> Result<Vec<Vec<S>>> {
        sequences
            .iter()
            .map(|seq| self.decode_sequence(seq))
            .collect()
    }
}

impl<S> CodeBook<S, u32>
where
    S: Clone + Eq + Hash + Ord + Debug,
{
    /// Encode straight into the `f64` representation the metrics consume.
    pub fn encode_numeric(&self, sequences: &[Vec<S>]) -> Result<Vec<Vec<f64>>> {
        sequences
            .iter()
            .map(|seq| {
                seq.iter()
                    .map(|s| self.code(s).map(f64::from))
                    .collect()
            })
            .collect()
    }

    /// Decode `f64` code sequences. Values that are not an exact code are
    /// rejected with `UnknownCode`.
    pub fn decode_numeric(&self, sequences: &[Vec<f64>]) -> Result<Vec<Vec<S>>> {
        sequences
            .iter()
            .map(|seq| {
                seq.iter()
                    .map(|&v| {
                        if v.fract() != 0.0 || v < 0.0 || v > f64::from(u32::MAX) {
                            return Err(ClusterError::UnknownCode(format!("{v}")));
                        }
                        self.symbol(v as u32).cloned()
                    })
                    .collect()
            })
            .collect()
    }
}
