//! Information-theoretic reporting over a built code.
//!
//! Derives entropy, average code length, and coding efficiency from a
//! frequency table and the code table built from it. For a correctly built
//! table, efficiency lies in (0, 1], reaching 1 only when every probability
//! is a negative power of two and the splits land exactly.

use std::hash::Hash;

use crate::code::CodeTable;
use crate::error::{Result, StatsError};
use crate::model::FrequencyTable;

/// Aggregate statistics for a code table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeStats {
    /// Source entropy in bits per symbol: sum of p * log2(1/p)
    pub entropy: f64,
    /// Average codeword length in bits per symbol: sum of p * len
    pub avg_code_length: f64,
    /// entropy / avg_code_length
    pub efficiency: f64,
}

/// Per-symbol line of a statistics report.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolStat<S> {
    pub symbol: S,
    pub count: u64,
    pub probability: f64,
    pub code_len: usize,
}

/// Compute entropy, average code length, and efficiency.
///
/// # Errors
/// - `StatsError::EmptyAlphabet` if the frequency table counted nothing
/// - `StatsError::MissingCode` if a counted symbol has no codeword
/// - `StatsError::ZeroCodeLength` if the average length comes out zero
///   (a table of empty codewords); efficiency would divide by zero
pub fn analyze<S>(codes: &CodeTable<S>, freqs: &FrequencyTable<S>) -> Result<CodeStats>
where
    S: Eq + Hash,
{
    if freqs.total() == 0 || freqs.alphabet_len() == 0 {
        return Err(StatsError::EmptyAlphabet.into());
    }

    let mut entropy = 0.0;
    let mut avg_code_length = 0.0;

    for (symbol, count) in freqs.iter() {
        let code_len = codes.get(symbol).ok_or(StatsError::MissingCode)?.len();
        let p = count as f64 / freqs.total() as f64;
        entropy += p * (1.0 / p).log2();
        avg_code_length += p * code_len as f64;
    }

    if avg_code_length == 0.0 {
        return Err(StatsError::ZeroCodeLength.into());
    }

    Ok(CodeStats {
        entropy,
        avg_code_length,
        efficiency: entropy / avg_code_length,
    })
}

/// Per-symbol report: count, probability, and code length for every counted
/// symbol, ordered like the ranking (count descending, symbol descending).
pub fn symbol_stats<S>(codes: &CodeTable<S>, freqs: &FrequencyTable<S>) -> Result<Vec<SymbolStat<S>>>
where
    S: Clone + Eq + Hash + Ord,
{
    if freqs.total() == 0 || freqs.alphabet_len() == 0 {
        return Err(StatsError::EmptyAlphabet.into());
    }

    let mut report = Vec::with_capacity(freqs.alphabet_len());
    for (symbol, count) in freqs.iter() {
        let code_len = codes.get(symbol).ok_or(StatsError::MissingCode)?.len();
        report.push(SymbolStat {
            symbol: symbol.clone(),
            count,
            probability: count as f64 / freqs.total() as f64,
            code_len,
        });
    }
    report.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| b.symbol.cmp(&a.symbol))
    });

    Ok(report)
}
