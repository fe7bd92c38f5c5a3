//! Mixlang CLI - split a mix file into language sections.
//!
//! Prints every `[tag]` section of the given file, optionally with the
//! variables, functions and classes found in each one.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::OutputFormat;
use cli::parse::ParseOptions;

/// Mixlang: split mixed-language files into tagged sections.
#[derive(Parser)]
#[command(name = "mixlang")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Mix file to parse
    file: Option<PathBuf>,

    /// List the identifiers found in each section
    #[arg(short, long)]
    identifiers: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Fail if any section uses a language without an extractor
    #[arg(long)]
    strict: bool,

    /// Extract sections in parallel
    #[arg(long)]
    parallel: bool,

    /// Configuration file (defaults to ./mixlang.yaml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let options = ParseOptions {
        file: cli.file,
        config: cli.config,
        format: cli.format,
        identifiers: cli.identifiers,
        parallel: cli.parallel,
        strict: cli.strict,
    };

    match cli::parse::run(&options) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
