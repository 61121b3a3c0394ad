//! # Morph
//!
//! Mutation wordlist generator for penetration testing.
//!
//! ## Features
//!
//! - **Case mutation**: lowercase, uppercase, capitalized and random-case variants
//! - **Character duplication**: one random character repeated two or three times
//! - **Numeric suffixes**: every variant expanded with `1` .. `999`
//! - **Deduplication**: each line is written once per run
//! - **Reproducible**: pass a seed to get identical output across runs
//!
//! ## Usage
//!
//! ```bash
//! # Prompt for the base word and output file
//! morph
//!
//! # Non-interactive
//! morph -w dragon -o dragon.txt --seed 1337
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use morph_wordlist::generator::{Generator, GeneratorConfig};
//!
//! let config = GeneratorConfig::new("dragon", "dragon.txt").with_seed(1337);
//! let report = Generator::new(config).run().unwrap();
//! println!("{} words", report.stats.unique_lines);
//! ```

pub mod cli;
pub mod dedup;
pub mod error;
pub mod expand;
pub mod generator;
pub mod mutate;
pub mod output;
pub mod progress;
pub mod prompt;

pub use cli::Args;
pub use error::{MorphError, Result};
pub use generator::{Generator, GeneratorConfig};
