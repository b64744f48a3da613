//! # CLI Module
//!
//! Command-line interface for the similarity kernel.
//!
//! ## Usage
//! ```bash
//! # Correlate two coefficient strips given as text
//! phash-xcorr correlate "1,2,3,4,5,6,7,8" "2,3,4,5,6,7,8,9"
//!
//! # Correlate two raw strip files
//! phash-xcorr correlate a.bin b.bin --file
//!
//! # Hamming distance between two hash words (signed words are accepted)
//! phash-xcorr hamming 0xAAAA -1
//!
//! # Two-stage comparison
//! phash-xcorr compare --hash-a 0xF0 --hash-b 0xF1 --strip-a 0x0102 --strip-b 0x0203
//!
//! # JSON output
//! phash-xcorr popcount 0xFF --output json
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use console::{style, Term};
use phash_correlation::core::comparator::{
    CompareConfig, HashedStrip, PairVerdict, DEFAULT_HAMMING_THRESHOLD, DEFAULT_MIN_CORRELATION,
};
use phash_correlation::core::correlation::{cross_correlation_aligned, Alignment};
use phash_correlation::core::hamming::{
    hamming_distance_xor, hamming_popcount, PopcountBackend, HASH_WORD_BITS,
};
use phash_correlation::core::input::{parse_hash_word, parse_strip};
use phash_correlation::error::{Result, SimilarityError};
use std::path::PathBuf;
use tracing::debug;

/// pHash similarity kernel - correlation and Hamming distance
#[derive(Parser, Debug)]
#[command(name = "phash-xcorr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    output: OutputFormat,

    /// Verbose output (debug logging unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Cross-correlate two coefficient strips
    Correlate {
        /// First strip ("1,2,3", "200" or hex "0x010203"), or a path with --file
        a: String,

        /// Second strip, same format as the first
        b: String,

        /// Treat A and B as paths to raw byte files
        #[arg(long)]
        file: bool,
    },

    /// Hamming distance between two 64-bit hash words
    #[command(allow_negative_numbers = true)]
    Hamming {
        /// First hash word (hex, binary, decimal or negative decimal)
        #[arg(value_parser = parse_hash_word)]
        x: u64,

        /// Second hash word
        #[arg(value_parser = parse_hash_word)]
        y: u64,
    },

    /// Population count of a 64-bit hash word
    #[command(allow_negative_numbers = true)]
    Popcount {
        /// Hash word (hex, binary, decimal or negative decimal)
        #[arg(value_parser = parse_hash_word)]
        value: u64,
    },

    /// Hamming first cut, then correlation of the strips
    #[command(allow_negative_numbers = true)]
    Compare {
        /// Hash word of the first image
        #[arg(long, value_parser = parse_hash_word)]
        hash_a: u64,

        /// Hash word of the second image
        #[arg(long, value_parser = parse_hash_word)]
        hash_b: u64,

        /// Coefficient strip of the first image
        #[arg(long)]
        strip_a: String,

        /// Coefficient strip of the second image
        #[arg(long)]
        strip_b: String,

        /// Maximum Hamming distance before correlation is skipped (0-64)
        #[arg(short, long, default_value_t = DEFAULT_HAMMING_THRESHOLD)]
        threshold: u32,

        /// Minimum correlation for a pair to be similar (0-1)
        #[arg(short, long, default_value_t = DEFAULT_MIN_CORRELATION)]
        min_correlation: f32,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON output for scripting
    Json,
    /// Minimal output (bare values)
    Minimal,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    phash_correlation::init_tracing(if cli.verbose { "debug" } else { "warn" });
    debug!(backend = %PopcountBackend::active(), "popcount backend selected");

    match cli.command {
        Commands::Correlate { a, b, file } => run_correlate(&a, &b, file, cli.output),
        Commands::Hamming { x, y } => run_hamming(x, y, cli.output),
        Commands::Popcount { value } => run_popcount(value, cli.output),
        Commands::Compare {
            hash_a,
            hash_b,
            strip_a,
            strip_b,
            threshold,
            min_correlation,
        } => {
            let a = HashedStrip::new(hash_a, parse_strip(&strip_a)?);
            let b = HashedStrip::new(hash_b, parse_strip(&strip_b)?);
            let config = CompareConfig::new()
                .hamming_threshold(threshold)
                .min_correlation(min_correlation);
            run_compare(&a, &b, config, cli.output)
        }
    }
}

/// Load a strip from text, or from a raw byte file
fn load_strip(input: &str, from_file: bool) -> Result<Vec<u8>> {
    if from_file {
        let path = PathBuf::from(input);
        let bytes = std::fs::read(&path).map_err(|source| SimilarityError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), len = bytes.len(), "strip file loaded");
        Ok(bytes)
    } else {
        Ok(parse_strip(input)?)
    }
}

fn run_correlate(a: &str, b: &str, from_file: bool, output: OutputFormat) -> Result<()> {
    let strip_a = load_strip(a, from_file)?;
    let strip_b = load_strip(b, from_file)?;
    let compared = strip_a.len().min(strip_b.len());
    if strip_a.len() != strip_b.len() {
        debug!(
            len_a = strip_a.len(),
            len_b = strip_b.len(),
            "strips differ in length, comparing common prefix"
        );
    }

    let alignment = cross_correlation_aligned(&strip_a, &strip_b);

    match output {
        OutputFormat::Pretty => print_pretty_correlation(&alignment, compared),
        OutputFormat::Json => print_json(&serde_json::json!({
            "score": alignment.score,
            "offset": alignment.offset,
            "compared_len": compared,
        }))?,
        OutputFormat::Minimal => println!("{}", alignment.score),
    }
    Ok(())
}

fn run_hamming(x: u64, y: u64, output: OutputFormat) -> Result<()> {
    let distance = hamming_distance_xor(x, y);

    match output {
        OutputFormat::Pretty => {
            let term = Term::stdout();
            term.write_line(&format!(
                "{} {:#018x} vs {:#018x}",
                style("Hamming").bold().cyan(),
                x,
                y
            ))
            .ok();
            term.write_line(&format!(
                "  {} of {} bits differ",
                style(distance).cyan(),
                HASH_WORD_BITS
            ))
            .ok();
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "x": x,
            "y": y,
            "distance": distance,
        }))?,
        OutputFormat::Minimal => println!("{}", distance),
    }
    Ok(())
}

fn run_popcount(value: u64, output: OutputFormat) -> Result<()> {
    let count = hamming_popcount(value);
    let backend = PopcountBackend::active();

    match output {
        OutputFormat::Pretty => {
            let term = Term::stdout();
            term.write_line(&format!(
                "{} {:#018x}",
                style("Popcount").bold().cyan(),
                value
            ))
            .ok();
            term.write_line(&format!("  {} set bits", style(count).cyan()))
                .ok();
            term.write_line(&format!("  {}", style(backend.description()).dim()))
                .ok();
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "value": value,
            "popcount": count,
            "backend": backend,
        }))?,
        OutputFormat::Minimal => println!("{}", count),
    }
    Ok(())
}

fn run_compare(
    a: &HashedStrip,
    b: &HashedStrip,
    config: CompareConfig,
    output: OutputFormat,
) -> Result<()> {
    let mut comparator = config.build()?;
    let verdict = comparator.compare(a, b);

    match output {
        OutputFormat::Pretty => print_pretty_verdict(&verdict),
        OutputFormat::Json => print_json(&verdict)?,
        OutputFormat::Minimal => println!("{}", verdict.is_similar),
    }
    Ok(())
}

fn print_pretty_correlation(alignment: &Alignment, compared: usize) {
    let term = Term::stdout();
    term.write_line(&format!(
        "{} over {} coefficients",
        style("Cross-correlation").bold().cyan(),
        compared
    ))
    .ok();
    term.write_line(&format!(
        "  score {} at offset {}",
        style(format!("{:.6}", alignment.score)).cyan(),
        alignment.offset
    ))
    .ok();
}

fn print_pretty_verdict(verdict: &PairVerdict) {
    let term = Term::stdout();
    let headline = if verdict.is_similar {
        style("✓ Similar").green().bold()
    } else {
        style("✗ Not similar").red().bold()
    };
    term.write_line(&headline.to_string()).ok();

    term.write_line(&format!(
        "  Hamming distance {} of {} bits",
        style(verdict.distance).cyan(),
        HASH_WORD_BITS
    ))
    .ok();

    match (verdict.correlation, verdict.offset) {
        (Some(score), Some(offset)) => {
            term.write_line(&format!(
                "  Correlation {} at offset {}",
                style(format!("{:.6}", score)).cyan(),
                offset
            ))
            .ok();
        }
        _ => {
            term.write_line(&format!(
                "  {}",
                style("Correlation skipped: hashes too far apart").dim()
            ))
            .ok();
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
