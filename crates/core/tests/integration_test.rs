//! Integration tests for the full codec pipeline.
//!
//! These tests verify end-to-end behavior: frequency table -> ranking ->
//! code table -> encode -> decode, with verification that the decoded
//! sequence matches the input exactly.

use fano_core::bitio::Bitstream;
use fano_core::code::{build_codes, CodeTable};
use fano_core::codec::{decode, encode};
use fano_core::error::{DecodeError, Error, ModelError};
use fano_core::model::{build_frequency_table, rank_symbols, FrequencyTable};
use fano_core::stats::analyze;

fn build_table<S>(input: &[S]) -> (CodeTable<S>, FrequencyTable<S>)
where
    S: Clone + Eq + std::hash::Hash + Ord,
{
    let freqs = build_frequency_table(input).expect("frequency table failed");
    let codes = build_codes(&rank_symbols(&freqs));
    (codes, freqs)
}

fn round_trip(input: &[u8]) {
    let (codes, _) = build_table(input);
    let bits = encode(input, &codes).expect("encode failed");
    let decoded = decode(&bits, &codes).expect("decode failed");
    assert_eq!(decoded, input, "round trip mismatch");
}

#[test]
fn test_round_trip_text() {
    round_trip(b"hello world! this is a test with some repetition: aaaaaaaaaa bbbbbbbbbb cccccccccc");
}

#[test]
fn test_round_trip_single_symbol() {
    round_trip(&[b'A'; 1000]);
}

#[test]
fn test_round_trip_single_occurrence() {
    round_trip(b"Q");
}

#[test]
fn test_round_trip_all_byte_values() {
    let input: Vec<u8> = (0..=255).collect();
    round_trip(&input);
}

#[test]
fn test_round_trip_repeated_text() {
    let input = b"The quick brown fox jumps over the lazy dog. ".repeat(100);
    round_trip(&input);
}

#[test]
fn test_round_trip_patterned_data() {
    // Deterministic mix: long runs, a small cycling alphabet, and a spike.
    let mut input = Vec::new();
    input.extend(std::iter::repeat(0u8).take(500));
    for i in 0..1000u32 {
        input.push((i * 7 % 31) as u8);
    }
    input.extend(std::iter::repeat(255u8).take(3));
    round_trip(&input);
}

#[test]
fn test_compression_beats_raw_on_skewed_input() {
    // One dominant symbol: packed output must be well under 8 bits/symbol.
    let mut input = vec![b'a'; 10_000];
    input.extend_from_slice(b"bcdefg");

    let (codes, _) = build_table(&input);
    let bits = encode(&input, &codes).unwrap();
    assert!(bits.byte_len() < input.len() / 2);
}

#[test]
fn test_determinism_across_runs() {
    let input = b"a deterministic codec produces identical codes every run".to_vec();

    let (codes_a, _) = build_table(&input);
    let (codes_b, _) = build_table(&input);
    for (symbol, codeword) in codes_a.iter() {
        assert_eq!(codes_b.get(symbol), Some(codeword));
    }

    let bits_a = encode(&input, &codes_a).unwrap();
    let bits_b = encode(&input, &codes_b).unwrap();
    assert_eq!(bits_a, bits_b);
}

#[test]
fn test_prefix_freedom_over_varied_inputs() {
    let inputs: Vec<Vec<u8>> = vec![
        b"ab".to_vec(),
        b"aab".to_vec(),
        b"abcabcabc".to_vec(),
        (0..=255).collect(),
        b"zzzzzzzzzzzzzzzy".to_vec(),
        b"The quick brown fox jumps over the lazy dog".to_vec(),
    ];
    for input in inputs {
        let (codes, _) = build_table(&input);
        assert!(codes.is_prefix_free(), "not prefix-free for {:?}", input);
    }
}

#[test]
fn test_total_encoded_length_equals_sum_of_codeword_lengths() {
    let input = b"entropy coding assigns short codes to frequent symbols".to_vec();
    let (codes, _) = build_table(&input);
    let bits = encode(&input, &codes).unwrap();

    let expected: usize = input.iter().map(|s| codes.get(s).unwrap().len()).sum();
    assert_eq!(bits.bit_len(), expected);
}

#[test]
fn test_efficiency_bound() {
    let inputs: Vec<Vec<u8>> = vec![
        b"abab".to_vec(),
        b"aaab".to_vec(),
        b"The quick brown fox jumps over the lazy dog".to_vec(),
        (0..=255).collect(),
    ];
    for input in inputs {
        let (codes, freqs) = build_table(&input);
        let stats = analyze(&codes, &freqs).unwrap();
        assert!(
            stats.efficiency > 0.0 && stats.efficiency <= 1.0 + 1e-9,
            "efficiency {} out of bounds for {:?}",
            stats.efficiency,
            input
        );
        assert!(stats.entropy <= stats.avg_code_length + 1e-9);
    }
}

#[test]
fn test_empty_input_rejected() {
    let result = build_frequency_table::<u8>(&[]);
    assert!(matches!(
        result,
        Err(Error::Model(ModelError::EmptyInput))
    ));
}

#[test]
fn test_truncated_stream_rejected() {
    let input = b"needs more than one bit per symbol somewhere".to_vec();
    let (codes, _) = build_table(&input);
    let bits = encode(&input, &codes).unwrap();

    // Cut the final bit off; the last codeword can no longer complete.
    let truncated = Bitstream::from_parts(bits.as_bytes().to_vec(), bits.bit_len() - 1).unwrap();
    let result = decode(&truncated, &codes);
    assert!(matches!(
        result,
        Err(Error::Decode(DecodeError::TruncatedStream { .. }))
    ));
}

#[test]
fn test_table_reuse_across_sequences() {
    // Build the table once, encode a different sequence over the same
    // alphabet with it.
    let training = b"abbcccdddd".to_vec();
    let (codes, _) = build_table(&training);

    let other = b"dcba abcd".to_vec();
    match encode(&other, &codes) {
        // Space is not in the training alphabet.
        Err(Error::Encode(_)) => {}
        other => panic!("expected unknown symbol error, got {:?}", other),
    }

    let in_alphabet = b"dcbaabcd".to_vec();
    let bits = encode(&in_alphabet, &codes).unwrap();
    assert_eq!(decode(&bits, &codes).unwrap(), in_alphabet);
}

#[test]
fn test_round_trip_integer_symbols() {
    let input: Vec<u16> = (0u32..500).map(|i| ((i * i) % 97) as u16).collect();
    let (codes, _) = build_table(&input);
    let bits = encode(&input, &codes).unwrap();
    assert_eq!(decode(&bits, &codes).unwrap(), input);
}

#[test]
fn test_round_trip_string_symbols() {
    let input: Vec<String> = "the rain in spain falls mainly in the plain the end"
        .split_whitespace()
        .map(|w| w.to_string())
        .collect();
    let (codes, _) = build_table(&input);
    let bits = encode(&input, &codes).unwrap();
    assert_eq!(decode(&bits, &codes).unwrap(), input);
}
