//! Command-line interface definition for morph
//!
//! Every flag is optional; missing base word and output file are prompted for.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{MorphError, Result};
use crate::mutate::{VariantConfig, DEFAULT_CASE_VARIANTS, DEFAULT_DUPLICATE_VARIANTS, MAX_RANDOM_VARIANTS};

/// Largest accepted write buffer (1GB)
pub const MAX_BUFFER_SIZE: usize = 1024 * 1024 * 1024;

/// Mutation wordlist generator for penetration testing
#[derive(Parser, Debug, Clone)]
#[command(
    name = "morph",
    author = "m0h1nd4",
    version,
    about = "Mutation wordlist generator for penetration testing",
    long_about = r#"
╔══════════════════════════════════════════════════════════════╗
║                        MORPH v1.0.0                          ║
║                 Mutation Wordlist Generator                  ║
╚══════════════════════════════════════════════════════════════╝

Mutates a base word with random capitalization and character duplication,
appends the numbers 1-999 to every variant and writes each unique result
as one line. Without --word / --output the values are prompted for.

Line order is only stable across runs when --seed is given.

EXAMPLES:
    # Interactive
    morph

    # Non-interactive, default output morph.txt
    morph -w dragon

    # Reproducible output with a progress bar instead of echo
    morph -w dragon -o dragon.txt --seed 1337 --quiet

    # Preview the variants without writing anything
    morph -w dragon --dry-run
"#
)]
pub struct Args {
    /// Base word to mutate (prompted for if omitted)
    #[arg(short, long, value_name = "WORD")]
    pub word: Option<String>,

    /// Output file (prompted for if omitted, default: morph.txt)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Seed for the random mutations (default: random)
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Number of random-capitalization draws
    #[arg(
        long,
        value_name = "NUM",
        default_value_t = DEFAULT_CASE_VARIANTS,
        value_parser = variant_count_parser()
    )]
    pub case_variants: usize,

    /// Number of random character-duplication draws
    #[arg(
        long,
        value_name = "NUM",
        default_value_t = DEFAULT_DUPLICATE_VARIANTS,
        value_parser = variant_count_parser()
    )]
    pub dup_variants: usize,

    /// Pause after each echoed word, in microseconds (0 = no pause)
    #[arg(long, value_name = "MICROS", default_value_t = 0)]
    pub delay_us: u64,

    /// Quiet mode - progress bar instead of echoing every word
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Dry run - show the variants without writing files
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Buffer size for file writing (default: 1MB)
    #[arg(long, value_name = "SIZE", default_value = "1MB")]
    pub buffer_size: String,
}

impl Args {
    /// Parse buffer size string to bytes
    pub fn parse_buffer_size(&self) -> Result<usize> {
        parse_size(&self.buffer_size)
    }

    /// Echo pacing, `None` when disabled
    pub fn pacing(&self) -> Option<Duration> {
        (self.delay_us > 0).then(|| Duration::from_micros(self.delay_us))
    }

    pub fn variant_config(&self) -> VariantConfig {
        VariantConfig {
            case_variants: self.case_variants,
            duplicate_variants: self.dup_variants,
        }
    }
}

fn variant_count_parser() -> clap::builder::RangedU64ValueParser<usize> {
    clap::builder::RangedU64ValueParser::<usize>::new().range(0..=MAX_RANDOM_VARIANTS as u64)
}

/// Parse human-readable size string to bytes
pub fn parse_size(size_str: &str) -> Result<usize> {
    let size_str = size_str.trim().to_uppercase();

    let (num_str, multiplier) = if let Some(n) = size_str.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = size_str.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = size_str.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = size_str.strip_suffix('B') {
        (n, 1)
    } else {
        (size_str.as_str(), 1)
    };

    let num: usize = num_str
        .trim()
        .parse()
        .map_err(|_| MorphError::InvalidSize(size_str.clone()))?;

    match num.checked_mul(multiplier) {
        Some(bytes) if bytes > 0 && bytes <= MAX_BUFFER_SIZE => Ok(bytes),
        _ => Err(MorphError::InvalidSize(size_str)),
    }
}
