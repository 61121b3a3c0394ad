//! Core generation engine
//!
//! Builds the variant set, expands every variant with numeric suffixes and
//! writes each string the first time it is produced.

use crate::cli::Args;
use crate::dedup::{DedupStats, Deduplicator, EmittedSet};
use crate::error::{MorphError, Result};
use crate::expand::{candidates_per_variant, numeric_suffixes};
use crate::mutate::{build_variants, validate_base_word, VariantConfig};
use crate::output::{OutputWriter, DEFAULT_BUFFER_SIZE};
use crate::progress::{print_bullet, print_header, print_info, GenerationStats, LineDisplay};

use colored::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

/// The emitted set is never pre-sized beyond this many entries
const MAX_PRESIZED_ENTRIES: usize = 1 << 20;

/// Generator configuration
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub base_word: String,
    pub output_path: PathBuf,
    pub variants: VariantConfig,
    pub seed: u64,
    pub buffer_size: usize,
    pub pacing: Option<Duration>,
    pub quiet: bool,
}

impl GeneratorConfig {
    /// Default settings with a fresh random seed
    pub fn new(base_word: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            base_word: base_word.into(),
            output_path: output_path.into(),
            variants: VariantConfig::default(),
            seed: rand::random(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            pacing: None,
            quiet: false,
        }
    }

    /// Combine parsed flags with the (possibly prompted) base word and output path
    pub fn from_args(args: &Args, base_word: String, output_path: PathBuf) -> Result<Self> {
        Ok(Self {
            base_word,
            output_path,
            variants: args.variant_config(),
            seed: args.seed.unwrap_or_else(rand::random),
            buffer_size: args.parse_buffer_size()?,
            pacing: args.pacing(),
            quiet: args.quiet,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Outcome of one generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    pub seed: u64,
    pub stats: GenerationStats,
}

/// Main generator
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Variant set for the configured word and seed
    pub fn variants(&self) -> Result<Vec<String>> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        build_variants(&self.config.base_word, &self.config.variants, &mut rng)
    }

    /// Generate the wordlist, echoing to stdout or driving a progress bar in quiet mode
    pub fn run(&self) -> Result<GenerationReport> {
        validate_base_word(&self.config.base_word)?;
        log::debug!("Generating from {:?} with seed {}", self.config.base_word, self.config.seed);

        let variants = self.variants()?;

        if self.config.quiet {
            let total = variants.len() as u64 * candidates_per_variant();
            let mut display: LineDisplay<io::Sink> = LineDisplay::bar(total);
            self.write_variants(&variants, &mut display)
        } else {
            print_header("Morphing...");
            let mut display = LineDisplay::echo(io::stdout().lock(), self.config.pacing);
            self.write_variants(&variants, &mut display)
        }
    }

    /// Write every variant and its expansions to the output file
    pub fn write_variants<W: Write>(
        &self,
        variants: &[String],
        display: &mut LineDisplay<W>,
    ) -> Result<GenerationReport> {
        let mut stats = GenerationStats::new();
        stats.variants = variants.len() as u64;

        let mut sink = OutputWriter::new(self.config.output_path.clone(), self.config.buffer_size)?;
        let expected = variants.len().saturating_mul(candidates_per_variant() as usize);
        let mut emitted = EmittedSet::with_capacity(expected.min(MAX_PRESIZED_ENTRIES));

        let dedup = emit_all(variants, &mut emitted, &mut sink, display)?;
        sink.flush()?;
        display.finish().map_err(MorphError::Display)?;

        stats.unique_lines = sink.lines_written();
        stats.duplicate_lines = dedup.duplicate_count;
        stats.bytes_written = sink.bytes_written();

        log::debug!(
            "Wrote {} lines, skipped {} duplicates, emitted set holds {} strings (~{} bytes)",
            stats.unique_lines,
            stats.duplicate_lines,
            emitted.len(),
            emitted.memory_usage()
        );

        Ok(GenerationReport {
            output_path: sink.path().to_path_buf(),
            seed: self.config.seed,
            stats,
        })
    }

    /// Dry run report
    pub fn dry_run_report(&self) -> Result<()> {
        let variants = self.variants()?;

        print_header("DRY RUN - No files will be written");

        println!("\n  {} Variants ({}):", "▶".green(), variants.len());
        for variant in &variants {
            print_bullet(variant);
        }

        println!("\n  {} Output configuration:", "▶".green());
        print_bullet(&format!("Output file: {:?}", self.config.output_path));
        print_bullet(&format!("Seed: {}", self.config.seed));
        print_info(&format!(
            "At most {} lines would be written",
            variants.len() as u64 * candidates_per_variant()
        ));

        Ok(())
    }
}

/// Offer each variant, then its numeric expansions, to the deduplicator.
///
/// Novel strings go to `sink` and `display`; the rest are counted as duplicates.
pub fn emit_all<D, W>(
    variants: &[String],
    emitted: &mut D,
    sink: &mut OutputWriter,
    display: &mut LineDisplay<W>,
) -> Result<DedupStats>
where
    D: Deduplicator + ?Sized,
    W: Write,
{
    let mut stats = DedupStats::new();

    for variant in variants {
        emit_one(variant, emitted, sink, display, &mut stats)?;

        for candidate in numeric_suffixes(variant) {
            emit_one(&candidate, emitted, sink, display, &mut stats)?;
        }
    }

    Ok(stats)
}

#[inline]
fn emit_one<D, W>(
    candidate: &str,
    emitted: &mut D,
    sink: &mut OutputWriter,
    display: &mut LineDisplay<W>,
    stats: &mut DedupStats,
) -> Result<()>
where
    D: Deduplicator + ?Sized,
    W: Write,
{
    if emitted.insert(candidate) {
        sink.write_line(candidate)?;
        display.emit(candidate).map_err(MorphError::Display)?;
        stats.record_unique();
    } else {
        display.skip();
        stats.record_duplicate();
    }
    Ok(())
}
