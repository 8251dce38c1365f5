//! fano-core: Shannon-Fano entropy codec
//!
//! This library builds a prefix-free variable-length binary code from the
//! symbol frequencies of an input sequence, encodes the sequence into a
//! packed bitstream, and decodes the bitstream back losslessly.
//!
//! # Architecture
//!
//! The pipeline is a chain of pure functions over in-memory data:
//! - `model`: frequency counting and deterministic symbol ranking
//! - `code`: recursive Shannon-Fano partitioning into a prefix-free code table
//! - `codec`: bitstream encoding and prefix-tree decoding
//! - `bitio`: packed bit sequences with exact bit lengths
//! - `stats`: entropy, average code length, and efficiency reporting
//!
//! Symbols are generic: any `Clone + Eq + Hash + Ord` type works (bytes,
//! pixel values, string tokens). Ranking ties are broken by the symbol's
//! `Ord`, descending, so repeated runs always produce identical codes.
//!
//! # Design Principles
//!
//! - **No panics**: all failures are structured errors
//! - **Deterministic**: same input, same code table, same bits
//! - **Pure core**: no I/O; callers supply and persist sequences and tables
//!
//! # Example
//!
//! ```
//! use fano_core::code::build_codes;
//! use fano_core::codec::{decode, encode};
//! use fano_core::model::{build_frequency_table, rank_symbols};
//!
//! let input = b"abracadabra".to_vec();
//! let freqs = build_frequency_table(&input).unwrap();
//! let codes = build_codes(&rank_symbols(&freqs));
//! let bits = encode(&input, &codes).unwrap();
//! assert_eq!(decode(&bits, &codes).unwrap(), input);
//! ```

pub mod bitio;
pub mod code;
pub mod codec;
pub mod error;
pub mod model;
pub mod stats;

// Re-export commonly used types
pub use error::{Error, Result};
