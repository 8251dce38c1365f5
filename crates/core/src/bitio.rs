//! Packed bit sequences.
//!
//! A [`Bitstream`] owns an ordered sequence of bits packed MSB-first into
//! bytes, together with its exact bit length. Variable-length codewords do
//! not align to byte boundaries, so the length in bits must travel with the
//! bytes: the final byte's padding is all zeros and is not data.
//!
//! # Example
//! ```
//! use fano_core::bitio::Bitstream;
//!
//! let mut bits = Bitstream::new();
//! bits.push(true);
//! bits.push(false);
//! bits.push(true);
//! // 101 -> padded to 10100000
//! assert_eq!(bits.as_bytes(), &[0b1010_0000]);
//! assert_eq!(bits.bit_len(), 3);
//! assert_eq!(bits.iter().collect::<Vec<_>>(), vec![true, false, true]);
//! ```

use crate::error::{BitIoError, Result};

/// An owned bit sequence packed MSB-first into bytes.
///
/// # Invariants
/// - `bit_len <= bytes.len() * 8`
/// - all padding bits past `bit_len` in the final byte are zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitstream {
    /// Backing bytes; the last byte may be partially filled
    bytes: Vec<u8>,
    /// Exact number of valid bits
    bit_len: usize,
}

impl Bitstream {
    /// Create an empty bitstream.
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            bit_len: 0,
        }
    }

    /// Reconstruct a bitstream from packed bytes and an exact bit length.
    ///
    /// Padding bits past `bit_len` are cleared so that equal bit sequences
    /// compare equal regardless of how the caller padded the final byte.
    ///
    /// # Errors
    /// Returns `BitIoError::LengthOutOfRange` if `bit_len` exceeds the
    /// capacity of `bytes`.
    pub fn from_parts(mut bytes: Vec<u8>, bit_len: usize) -> Result<Self> {
        let capacity = bytes.len() * 8;
        if bit_len > capacity {
            return Err(BitIoError::LengthOutOfRange { bit_len, capacity }.into());
        }

        // Drop whole bytes past the end, then clear partial-byte padding.
        bytes.truncate((bit_len + 7) / 8);
        let tail_bits = bit_len % 8;
        if tail_bits != 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= 0xFFu8 << (8 - tail_bits);
            }
        }

        Ok(Self { bytes, bit_len })
    }

    /// Append a single bit.
    pub fn push(&mut self, bit: bool) {
        let offset = self.bit_len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << (7 - offset);
        }
        self.bit_len += 1;
    }

    /// Append every bit of `bits` in order.
    pub fn extend<I: IntoIterator<Item = bool>>(&mut self, bits: I) {
        for bit in bits {
            self.push(bit);
        }
    }

    /// Get the bit at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.bit_len {
            return None;
        }
        let byte = self.bytes[index / 8];
        Some((byte >> (7 - index % 8)) & 1 == 1)
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> Bits<'_> {
        Bits {
            stream: self,
            position: 0,
        }
    }

    /// The exact number of bits in the stream.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// The number of backing bytes (including the padded final byte).
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// The packed bytes, final byte zero-padded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// True if the stream holds no bits.
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }
}

impl Default for Bitstream {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the bits of a [`Bitstream`], MSB-first.
#[derive(Debug, Clone)]
pub struct Bits<'a> {
    stream: &'a Bitstream,
    position: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        let bit = self.stream.get(self.position)?;
        self.position += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.stream.bit_len - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_pack() {
        let mut bits = Bitstream::new();
        for &b in &[true, false, true, true, false, false, true, false] {
            bits.push(b);
        }
        assert_eq!(bits.as_bytes(), &[0b1011_0010]);
        assert_eq!(bits.bit_len(), 8);
    }

    #[test]
    fn test_padding_is_zero() {
        let mut bits = Bitstream::new();
        bits.push(true);
        assert_eq!(bits.as_bytes(), &[0b1000_0000]);
        assert_eq!(bits.bit_len(), 1);
        assert_eq!(bits.byte_len(), 1);
    }

    #[test]
    fn test_multi_byte() {
        let mut bits = Bitstream::new();
        for i in 0..12 {
            bits.push(i % 2 == 0);
        }
        // 101010101010 -> 10101010 | 10100000
        assert_eq!(bits.as_bytes(), &[0b1010_1010, 0b1010_0000]);
        assert_eq!(bits.bit_len(), 12);
    }

    #[test]
    fn test_get_past_end() {
        let mut bits = Bitstream::new();
        bits.push(true);
        assert_eq!(bits.get(0), Some(true));
        assert_eq!(bits.get(1), None);
    }

    #[test]
    fn test_iter_round_trip() {
        let pattern = [true, true, false, true, false, false, false, true, true];
        let mut bits = Bitstream::new();
        bits.extend(pattern.iter().copied());

        let collected: Vec<bool> = bits.iter().collect();
        assert_eq!(collected, pattern);
        assert_eq!(bits.iter().len(), pattern.len());
    }

    #[test]
    fn test_from_parts() {
        let bits = Bitstream::from_parts(vec![0b0100_0000], 2).unwrap();
        assert_eq!(bits.bit_len(), 2);
        assert_eq!(bits.iter().collect::<Vec<_>>(), vec![false, true]);
    }

    #[test]
    fn test_from_parts_clears_padding() {
        // Caller left garbage in the padding; equality must not see it.
        let noisy = Bitstream::from_parts(vec![0b0111_1111], 2).unwrap();
        let clean = Bitstream::from_parts(vec![0b0100_0000], 2).unwrap();
        assert_eq!(noisy, clean);
    }

    #[test]
    fn test_from_parts_length_out_of_range() {
        let result = Bitstream::from_parts(vec![0xFF], 9);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty() {
        let bits = Bitstream::new();
        assert!(bits.is_empty());
        assert_eq!(bits.bit_len(), 0);
        assert_eq!(bits.iter().count(), 0);
    }
}
