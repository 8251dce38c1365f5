//! Bitstream encoding and decoding.
//!
//! Encoding is a plain fold: concatenate each input symbol's codeword into a
//! [`Bitstream`]. Decoding walks a binary prefix tree built once from the
//! code table, one transition per bit, instead of rescanning the table for
//! every buffered prefix. Codeword boundaries carry no delimiters; they are
//! recovered purely from the prefix-free property.
//!
//! # Failure modes
//!
//! - a bit with no tree edge means the stream was corrupted or decoded with
//!   the wrong table (`InvalidCode`)
//! - stream exhaustion mid-codeword means the tail was cut off
//!   (`TruncatedStream`); decode never returns partial output

use std::hash::Hash;

use crate::bitio::Bitstream;
use crate::code::CodeTable;
use crate::error::{DecodeError, EncodeError, Result};

/// Encode `sequence` by concatenating codewords from `codes` in input order.
///
/// The empty sequence encodes to the empty bitstream.
///
/// # Errors
/// Returns `EncodeError::UnknownSymbol` if a symbol has no codeword. This
/// cannot happen when the table was built from the same sequence, but the
/// table may be reused across calls, so it is checked.
pub fn encode<S>(sequence: &[S], codes: &CodeTable<S>) -> Result<Bitstream>
where
    S: Eq + Hash,
{
    let mut out = Bitstream::new();
    for (position, symbol) in sequence.iter().enumerate() {
        let codeword = codes
            .get(symbol)
            .ok_or(EncodeError::UnknownSymbol { position })?;
        out.extend(codeword.bits());
    }
    Ok(out)
}

/// Decode `bits` back into the symbol sequence it was encoded from.
///
/// # Errors
/// - `DecodeError::AmbiguousCode` if `codes` is not prefix-free
/// - `DecodeError::InvalidCode` if a bit matches no codeword
/// - `DecodeError::TruncatedStream` if the stream ends mid-codeword
pub fn decode<S>(bits: &Bitstream, codes: &CodeTable<S>) -> Result<Vec<S>>
where
    S: Clone + Eq + Hash,
{
    let tree = DecodeTree::from_table(codes)?;
    let mut decoder = tree.decoder();

    let mut out = Vec::new();
    for bit in bits.iter() {
        if let Some(symbol) = decoder.feed(bit)? {
            out.push(symbol.clone());
        }
    }

    if !decoder.is_aligned() {
        return Err(DecodeError::TruncatedStream {
            pending_bits: decoder.pending_bits(),
        }
        .into());
    }

    Ok(out)
}

/// A node in the prefix tree. Leaves carry a symbol; internal nodes carry
/// up to two child indices.
#[derive(Debug, Clone)]
struct TreeNode<S> {
    children: [Option<usize>; 2],
    symbol: Option<S>,
}

impl<S> Default for TreeNode<S> {
    fn default() -> Self {
        Self {
            children: [None, None],
            symbol: None,
        }
    }
}

/// Binary prefix tree over a code table, for O(1) transitions per bit.
///
/// Nodes live in an arena indexed by `usize`; index 0 is the root. Built
/// once per decode and shared read-only by any number of [`Decoder`]s.
#[derive(Debug, Clone)]
pub struct DecodeTree<S> {
    nodes: Vec<TreeNode<S>>,
}

impl<S: Clone + Eq + Hash> DecodeTree<S> {
    /// Build the prefix tree for `codes`.
    ///
    /// # Errors
    /// Returns `DecodeError::AmbiguousCode` if any codeword is a prefix of
    /// (or equal to) another, i.e. the table violates the prefix-free
    /// invariant. Tables from [`build_codes`](crate::code::build_codes)
    /// always pass.
    pub fn from_table(codes: &CodeTable<S>) -> Result<Self> {
        let mut nodes: Vec<TreeNode<S>> = vec![TreeNode::default()];

        for (symbol, codeword) in codes.iter() {
            let mut node = 0;
            for bit in codeword.bits() {
                // Passing through a leaf means some codeword is a prefix
                // of this one.
                if nodes[node].symbol.is_some() {
                    return Err(DecodeError::AmbiguousCode {
                        codeword: codeword.to_string(),
                    }
                    .into());
                }
                let branch = bit as usize;
                let existing = nodes[node].children[branch];
                node = match existing {
                    Some(next) => next,
                    None => {
                        nodes.push(TreeNode::default());
                        let next = nodes.len() - 1;
                        nodes[node].children[branch] = Some(next);
                        next
                    }
                };
            }
            // Landing on an occupied or internal node means this codeword
            // duplicates or prefixes another.
            if nodes[node].symbol.is_some() || nodes[node].children.iter().any(Option::is_some) {
                return Err(DecodeError::AmbiguousCode {
                    codeword: codeword.to_string(),
                }
                .into());
            }
            nodes[node].symbol = Some(symbol.clone());
        }

        Ok(Self { nodes })
    }

    /// Start a fresh decoding cursor at the root.
    pub fn decoder(&self) -> Decoder<'_, S> {
        Decoder {
            tree: self,
            node: 0,
            pending: 0,
            position: 0,
        }
    }
}

/// A decoding cursor over a [`DecodeTree`].
///
/// Feed bits one at a time; a complete codeword yields its symbol and the
/// cursor returns to the root.
#[derive(Debug, Clone)]
pub struct Decoder<'a, S> {
    tree: &'a DecodeTree<S>,
    /// Current node index (0 = root)
    node: usize,
    /// Bits consumed since the last emitted symbol
    pending: usize,
    /// Total bits consumed, for error reporting
    position: usize,
}

impl<'a, S> Decoder<'a, S> {
    /// Consume one bit. Returns the decoded symbol when the bit completes a
    /// codeword, `None` while still inside one.
    ///
    /// # Errors
    /// Returns `DecodeError::InvalidCode` if no codeword continues with
    /// this bit.
    pub fn feed(&mut self, bit: bool) -> Result<Option<&'a S>> {
        let next = self.tree.nodes[self.node].children[bit as usize].ok_or(
            DecodeError::InvalidCode {
                position: self.position,
            },
        )?;
        self.position += 1;

        match &self.tree.nodes[next].symbol {
            Some(symbol) => {
                self.node = 0;
                self.pending = 0;
                Ok(Some(symbol))
            }
            None => {
                self.node = next;
                self.pending += 1;
                Ok(None)
            }
        }
    }

    /// True if the cursor sits at a codeword boundary (nothing buffered).
    pub fn is_aligned(&self) -> bool {
        self.pending == 0
    }

    /// Bits consumed since the last emitted symbol.
    pub fn pending_bits(&self) -> usize {
        self.pending
    }
}
