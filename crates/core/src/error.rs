//! Error types for the codec.
//!
//! All operations return structured errors rather than panicking.
//! Every failure is deterministic: retrying the same call with the same
//! inputs reproduces the same error.

use thiserror::Error;

/// Top-level error type for all operations in the codec.
///
/// Each variant corresponds to a specific failure domain:
/// - Bit I/O: constructing or slicing packed bit sequences
/// - Model: frequency table construction
/// - Encode: codeword lookup during encoding
/// - Decode: prefix-tree construction and bitstream decoding
/// - Stats: entropy/efficiency computation
#[derive(Debug, Error)]
pub enum Error {
    /// Bit sequence construction failed (e.g., bit length exceeds the buffer)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Frequency model error (e.g., empty input sequence)
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// Encoding error (e.g., symbol missing from the code table)
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Decoding error (e.g., truncated or corrupt bitstream)
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Statistics error (e.g., division by a zero average code length)
    #[error("stats error: {0}")]
    Stats(#[from] StatsError),

    /// File I/O error (reading input sequences in the demo app)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Packed bit sequence errors.
#[derive(Debug, Error)]
pub enum BitIoError {
    /// Declared bit length doesn't fit in the backing bytes
    #[error("bit length {bit_len} exceeds capacity of {capacity} bits")]
    LengthOutOfRange { bit_len: usize, capacity: usize },
}

/// Frequency model errors.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Zero-length input: no alphabet to build a code for
    #[error("empty input: cannot build a frequency table")]
    EmptyInput,
}

/// Encoding errors.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Input contains a symbol the code table has no codeword for
    #[error("unknown symbol at position {position}: no codeword in table")]
    UnknownSymbol { position: usize },
}

/// Decoding errors.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Stream ended in the middle of a codeword
    #[error("truncated stream: {pending_bits} bit(s) buffered with no matching codeword")]
    TruncatedStream { pending_bits: usize },

    /// A bit led outside the prefix tree (corrupt stream or wrong table)
    #[error("invalid code at bit position {position}")]
    InvalidCode { position: usize },

    /// Code table is not prefix-free, so decoding would be ambiguous
    #[error("ambiguous code table: codeword {codeword} collides with another codeword")]
    AmbiguousCode { codeword: String },
}

/// Statistics errors.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Frequency table has no symbols (total count is zero)
    #[error("empty alphabet: no probabilities to report")]
    EmptyAlphabet,

    /// A counted symbol has no codeword in the table
    #[error("incomplete code table: a counted symbol has no codeword")]
    MissingCode,

    /// Average code length is zero, so efficiency is undefined
    #[error("zero average code length: efficiency is undefined")]
    ZeroCodeLength,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
