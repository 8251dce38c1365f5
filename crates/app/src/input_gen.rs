//! Sample input generation.
//!
//! When no input file is specified, we generate sample data with interesting
//! entropy characteristics: mix of skewed and flat symbol distributions.
//!
//! # Design
//!
//! Generated data has:
//! - Some heavily skewed sections (runs of one byte), where the code shortens
//! - Some limited-alphabet sections (text-like data)
//! - Some flat sections (random bytes), where codes approach 8 bits
//!
//! This makes the entropy/efficiency numbers in the report worth reading.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate sample data with mixed symbol distributions.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `size_bytes`: exact size of generated data
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    let mut remaining = size_bytes;

    while remaining > 0 {
        let section_size = remaining.min(4096);

        let section_type: u8 = rng.gen_range(0..10);
        match section_type {
            // 40% heavily skewed (runs of one byte)
            0..=3 => {
                let byte_value: u8 = rng.gen();
                data.extend(std::iter::repeat(byte_value).take(section_size));
            }

            // 40% limited alphabet (text-like)
            4..=7 => {
                let alphabet = b"etaoin shrdlu.!,\n";
                for _ in 0..section_size {
                    let idx = rng.gen_range(0..alphabet.len());
                    data.push(alphabet[idx]);
                }
            }

            // 20% flat distribution (random bytes)
            _ => {
                for _ in 0..section_size {
                    data.push(rng.gen());
                }
            }
        }

        remaining = remaining.saturating_sub(section_size);
    }

    data.truncate(size_bytes);
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_size() {
        for size in [0, 1, 100, 4096, 10_000] {
            assert_eq!(generate_sample_data(7, size).len(), size);
        }
    }

    #[test]
    fn test_determinism() {
        assert_eq!(generate_sample_data(42, 8192), generate_sample_data(42, 8192));
    }

    #[test]
    fn test_different_seeds() {
        assert_ne!(generate_sample_data(1, 4096), generate_sample_data(2, 4096));
    }
}
