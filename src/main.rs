//! Morph - mutation wordlist generator for penetration testing
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::io;
use std::process;

use morph_wordlist::cli::Args;
use morph_wordlist::generator::{Generator, GeneratorConfig};
use morph_wordlist::progress::{print_banner, print_error, print_header, print_info, print_success};
use morph_wordlist::prompt::resolve_inputs;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging, RUST_LOG still wins when set
    let level = if args.verbose {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Print banner unless quiet mode
    if !args.quiet {
        print_banner();
    }

    let (base_word, output_path) = resolve_inputs(
        args.word.as_deref(),
        args.output.as_deref(),
        &mut io::stdin().lock(),
        &mut io::stdout(),
    )?;

    let config = GeneratorConfig::from_args(&args, base_word, output_path)?;
    log::info!("Seed: {}", config.seed);

    if args.verbose {
        print_config(&config);
    }

    let generator = Generator::new(config);

    if args.dry_run {
        generator.dry_run_report()?;
        return Ok(());
    }

    let report = generator.run()?;

    if !args.quiet {
        report.stats.print_summary(&report.output_path);
    }
    print_success(&format!(
        "Total word: {} → {}",
        report.stats.unique_lines,
        report.output_path.display()
    ));

    Ok(())
}

/// Print configuration summary
fn print_config(config: &GeneratorConfig) {
    print_header("Configuration");

    print_info(&format!("Base word:     {:?}", config.base_word));
    print_info(&format!("Output:        {:?}", config.output_path));
    print_info(&format!("Case variants: {}", config.variants.case_variants));
    print_info(&format!("Dup variants:  {}", config.variants.duplicate_variants));
    print_info(&format!("Seed:          {}", config.seed));
    print_info(&format!("Buffer size:   {} KB", config.buffer_size / 1024));
    if let Some(pacing) = config.pacing {
        print_info(&format!("Pacing:        {:?}", pacing));
    }
}
