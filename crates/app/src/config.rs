//! Configuration for the fano demo application.
//!
//! Handles parsing command-line arguments and generating sensible defaults
//! (including a randomized sample size that is reproducible with a seed).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments, using intelligent defaults.
//! All defaults are printed so runs are reproducible.

use std::path::PathBuf;

/// Complete configuration for a round-trip run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input file path (None = generate sample data)
    pub input_file: Option<PathBuf>,

    /// Seed for sample-data generation
    pub seed: u64,

    /// Size of generated sample data in bytes
    pub sample_bytes: usize,

    /// Whether to print the per-symbol code table
    pub print_table: bool,

    /// Whether to print the statistics summary
    pub print_stats: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If --seed is not provided, a time-based seed is used (and printed,
    /// so the run can be reproduced).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut print_table = false;
        let mut print_stats = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--size" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--size requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid size")?);
                }
                "--print-table" => {
                    print_table = true;
                }
                "--no-stats" => {
                    print_stats = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis() as u64
        });

        Ok(Config {
            input_file,
            seed,
            sample_bytes: sample_bytes.unwrap_or(65536), // 64 KiB
            print_table,
            print_stats,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!(
            "Input: {}",
            self.input_file
                .as_ref()
                .and_then(|p| p.to_str())
                .unwrap_or("(generate sample)")
        );
        println!("Seed: {}", self.seed);
        if self.input_file.is_none() {
            println!("Sample size: {} bytes ({} KiB)", self.sample_bytes, self.sample_bytes / 1024);
        }
        println!();
    }
}

fn print_help() {
    println!("fano: Shannon-Fano codec round-trip demo");
    println!();
    println!("Builds a prefix-free code from the input's symbol frequencies,");
    println!("encodes, decodes, verifies, and reports coding statistics.");
    println!();
    println!("USAGE:");
    println!("    fano [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>       Input file (default: generate sample)");
    println!("    --seed <N>        Seed for sample generation (default: time-based)");
    println!("    --size <N>        Generated sample size in bytes (default: 65536)");
    println!();
    println!("    --print-table     Print the per-symbol code table");
    println!("    --no-stats        Don't print the statistics summary");
    println!("    --help, -h        Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    fano                          # Round-trip generated sample data");
    println!("    fano --seed 42 --size 4096    # Deterministic small sample");
    println!("    fano --in file.bin            # Round-trip a specific file");
    println!();
}
