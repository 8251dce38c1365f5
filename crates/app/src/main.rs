//! fano: Shannon-Fano codec round-trip demo.
//!
//! Reads a file (or generates seeded sample data), builds a code table from
//! the input's symbol frequencies, encodes, decodes, verifies the output
//! matches the input, and prints a report: code table (optional), entropy,
//! average code length, efficiency, compression ratio, and timing.

mod config;
mod input_gen;

use std::time::Instant;

use fano_core::code::build_codes;
use fano_core::codec::{decode, encode};
use fano_core::model::{build_frequency_table, rank_symbols};
use fano_core::stats::{analyze, symbol_stats};
use fano_core::Result;

use config::Config;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("error: {}", msg);
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    config.print();

    let input = match &config.input_file {
        Some(path) => std::fs::read(path)?,
        None => input_gen::generate_sample_data(config.seed, config.sample_bytes),
    };

    let start = Instant::now();

    let freqs = build_frequency_table(&input)?;
    let codes = build_codes(&rank_symbols(&freqs));
    let bits = encode(&input, &codes)?;
    let decoded = decode(&bits, &codes)?;

    let elapsed = start.elapsed();

    if config.print_table {
        println!("=== Code Table ===");
        for stat in symbol_stats(&codes, &freqs)? {
            let codeword = codes
                .get(&stat.symbol)
                .map(|c| c.to_string())
                .unwrap_or_default();
            println!(
                "0x{:02x}  count {:>8}  p {:.6}  code {}",
                stat.symbol, stat.count, stat.probability, codeword
            );
        }
        println!();
    }

    println!("=== Round Trip ===");
    println!("Input:   {} bytes, {} distinct symbols", input.len(), freqs.alphabet_len());
    println!("Encoded: {} bits ({} bytes packed)", bits.bit_len(), bits.byte_len());
    println!("Decoded: {} bytes", decoded.len());
    if decoded == input {
        println!("Verification: PASSED");
    } else {
        println!("Verification: FAILED (decoded output differs from input)");
    }
    println!();

    if config.print_stats {
        let stats = analyze(&codes, &freqs)?;
        let ratio = bits.byte_len() as f64 / input.len() as f64;

        println!("=== Statistics ===");
        println!("Entropy: {:.4} bits/symbol", stats.entropy);
        println!("Average code length: {:.4} bits/symbol", stats.avg_code_length);
        println!("Efficiency: {:.2}%", stats.efficiency * 100.0);
        println!("Compression ratio: {:.1}%", ratio * 100.0);
        println!("Codec time: {} ms", elapsed.as_millis());
        println!();
    }

    Ok(())
}
