//! Frequency modeling and symbol ranking.
//!
//! Code construction starts from how often each symbol occurs. This module
//! counts occurrences into a [`FrequencyTable`] and orders the alphabet into
//! a [`RankedList`] with a fixed tie-break, so that the same input always
//! produces the same ranking and therefore the same codewords.
//!
//! # Tie-break
//!
//! Symbols are sorted by count descending; equal counts are ordered by the
//! symbol's own `Ord`, also descending. The direction matters: it decides
//! which of two equally frequent symbols ends up in the shorter half of a
//! split, so it is part of the codec's observable contract.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{ModelError, Result};

/// Occurrence counts for every distinct symbol of an input sequence.
///
/// # Invariants
/// - `total` equals the length of the sequence the table was built from
/// - every symbol of that sequence appears exactly once as a key
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    counts: HashMap<S, u64>,
    total: u64,
}

impl<S: Eq + Hash> FrequencyTable<S> {
    /// The occurrence count for `symbol`, or 0 if it never occurred.
    pub fn count(&self, symbol: &S) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// The probability of `symbol` (count / total).
    pub fn probability(&self, symbol: &S) -> f64 {
        self.count(symbol) as f64 / self.total as f64
    }

    /// Total number of symbols counted (the input sequence length).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct symbols (the alphabet size).
    pub fn alphabet_len(&self) -> usize {
        self.counts.len()
    }

    /// Iterate over (symbol, count) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> {
        self.counts.iter().map(|(s, &c)| (s, c))
    }
}

/// Count occurrences of each distinct symbol in `sequence`.
///
/// # Errors
/// Returns `ModelError::EmptyInput` for a zero-length sequence: there is no
/// alphabet to build a code for, and callers must handle this explicitly
/// rather than receive an empty table.
pub fn build_frequency_table<S>(sequence: &[S]) -> Result<FrequencyTable<S>>
where
    S: Clone + Eq + Hash,
{
    if sequence.is_empty() {
        return Err(ModelError::EmptyInput.into());
    }

    let mut counts: HashMap<S, u64> = HashMap::new();
    for symbol in sequence {
        *counts.entry(symbol.clone()).or_insert(0) += 1;
    }

    Ok(FrequencyTable {
        total: sequence.len() as u64,
        counts,
    })
}

/// The alphabet ordered for partitioning: count descending, then symbol
/// descending.
///
/// Built once per input and immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedList<S> {
    entries: Vec<(S, u64)>,
}

impl<S> RankedList<S> {
    /// The ranked (symbol, count) pairs, highest count first.
    pub fn as_slice(&self) -> &[(S, u64)] {
        &self.entries
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the alphabet is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S> Default for RankedList<S> {
    /// An empty ranking (empty alphabet).
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

/// Rank the alphabet of `table` by (count descending, symbol descending).
pub fn rank_symbols<S>(table: &FrequencyTable<S>) -> RankedList<S>
where
    S: Clone + Eq + Hash + Ord,
{
    let mut entries: Vec<(S, u64)> = table.iter().map(|(s, c)| (s.clone(), c)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
    RankedList { entries }
}
