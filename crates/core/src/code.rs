//! Shannon-Fano code construction.
//!
//! The ranked alphabet is recursively partitioned into two groups whose
//! cumulative counts are as close to equal as possible. Every symbol in the
//! first group gets a `0` appended to its codeword, every symbol in the
//! second a `1`, and each group is partitioned again until it holds a single
//! symbol. Each symbol ends up at a distinct leaf of the binary split
//! hierarchy, so no codeword can be a prefix of another.
//!
//! Each recursive call returns its own sub-table and the caller merges them;
//! there is no shared accumulator mutated across calls.
//!
//! # Split rule
//!
//! The split index minimizes |weight(prefix group) − weight(suffix group)|,
//! scanning left to right; the first minimum wins, and both groups must be
//! non-empty. This rule is part of the codec's observable contract: changing
//! it changes which codewords symbols receive.
//!
//! # Depth
//!
//! Recursion depth is O(log n) for balanced frequency distributions but
//! degrades to O(n) when one symbol dominates (each split then peels off a
//! single symbol). Shannon-Fano does not guarantee balanced trees.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::model::RankedList;

/// A binary codeword: a non-empty ordered sequence of bits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Codeword {
    bits: Vec<bool>,
}

impl Codeword {
    /// The empty codeword (used only as a recursion root).
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Build a codeword from explicit bits.
    pub fn from_bits<I: IntoIterator<Item = bool>>(bits: I) -> Self {
        Self {
            bits: bits.into_iter().collect(),
        }
    }

    /// Parse a codeword from a `0`/`1` string; `None` on any other character.
    pub fn from_bit_str(s: &str) -> Option<Self> {
        s.chars()
            .map(|c| match c {
                '0' => Some(false),
                '1' => Some(true),
                _ => None,
            })
            .collect::<Option<Vec<bool>>>()
            .map(|bits| Self { bits })
    }

    /// This codeword extended by one bit.
    pub fn with_bit(&self, bit: bool) -> Self {
        let mut bits = self.bits.clone();
        bits.push(bit);
        Self { bits }
    }

    /// Iterate over the bits in order.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Length in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True for the empty codeword.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// True if `self` is a proper prefix of `other`.
    pub fn is_proper_prefix_of(&self, other: &Codeword) -> bool {
        self.bits.len() < other.bits.len() && other.bits[..self.bits.len()] == self.bits[..]
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Mapping from symbol to codeword.
///
/// # Invariants
/// - tables produced by [`build_codes`] are prefix-free: no codeword is a
///   proper prefix of another
///
/// Once built, the table is read-only for both encoding and decoding.
#[derive(Debug, Clone, Default)]
pub struct CodeTable<S> {
    codes: HashMap<S, Codeword>,
}

impl<S: Eq + Hash> CodeTable<S> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            codes: HashMap::new(),
        }
    }

    /// Insert a codeword for `symbol`, replacing any previous one.
    ///
    /// Hand-built tables are not checked for prefix-freedom here; decoding
    /// rejects ambiguous tables when it builds its prefix tree.
    pub fn insert(&mut self, symbol: S, codeword: Codeword) {
        self.codes.insert(symbol, codeword);
    }

    /// Look up the codeword for `symbol`.
    pub fn get(&self, symbol: &S) -> Option<&Codeword> {
        self.codes.get(symbol)
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if the table holds no codewords.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over (symbol, codeword) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &Codeword)> {
        self.codes.iter()
    }

    /// Check the prefix-free invariant by pairwise comparison.
    ///
    /// O(n^2) in alphabet size; intended for validation and tests, not the
    /// decode hot path (the prefix tree enforces the same property in O(n)).
    pub fn is_prefix_free(&self) -> bool {
        let codewords: Vec<&Codeword> = self.codes.values().collect();
        for (i, a) in codewords.iter().enumerate() {
            for b in &codewords[i + 1..] {
                if a.is_proper_prefix_of(b) || b.is_proper_prefix_of(a) || a == b {
                    return false;
                }
            }
        }
        true
    }

    fn merge(&mut self, other: CodeTable<S>) {
        self.codes.extend(other.codes);
    }
}

/// Build a Shannon-Fano code table from a ranked alphabet.
///
/// A singleton alphabet gets the one-bit codeword `0`: the recursion alone
/// would leave it with an empty codeword, which the encoder contract
/// disallows. An empty ranking yields an empty table.
pub fn build_codes<S>(ranked: &RankedList<S>) -> CodeTable<S>
where
    S: Clone + Eq + Hash,
{
    let entries = ranked.as_slice();
    match entries.len() {
        0 => CodeTable::new(),
        1 => {
            let mut table = CodeTable::new();
            table.insert(entries[0].0.clone(), Codeword::from_bits([false]));
            table
        }
        _ => assign(entries, Codeword::new()),
    }
}

/// Recursively assign codewords to `group`, all sharing `prefix`.
///
/// Returns a fresh sub-table; the caller merges sibling sub-tables.
fn assign<S>(group: &[(S, u64)], prefix: Codeword) -> CodeTable<S>
where
    S: Clone + Eq + Hash,
{
    if group.len() == 1 {
        let mut table = CodeTable::new();
        table.insert(group[0].0.clone(), prefix);
        return table;
    }

    let split = split_point(group);
    let (head, tail) = group.split_at(split);

    let mut table = assign(head, prefix.with_bit(false));
    table.merge(assign(tail, prefix.with_bit(true)));
    table
}

/// Find the split index (1..len) minimizing the weight difference between
/// the two groups. The first minimum in a left-to-right scan wins.
fn split_point<S>(group: &[(S, u64)]) -> usize {
    let total: u64 = group.iter().map(|(_, count)| *count).sum();

    let mut head_sum = 0u64;
    let mut best_split = 1;
    let mut best_diff = u64::MAX;

    for (i, (_, count)) in group[..group.len() - 1].iter().enumerate() {
        head_sum += count;
        let diff = head_sum.abs_diff(total - head_sum);
        if diff < best_diff {
            best_diff = diff;
            best_split = i + 1;
        }
    }

    best_split
}
